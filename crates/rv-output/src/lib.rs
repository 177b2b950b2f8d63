//! `rv-output`: simulation output writers for the rendezvous simulator.
//!
//! | Backend | Files created                        |
//! |---------|--------------------------------------|
//! | CSV     | `trajectory.csv`, `outcome.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`TrajectoryObserver`], which implements `rv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rv_output::{CsvWriter, TrajectoryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = TrajectoryObserver::new(writer, &config);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryObserver;
pub use row::{OutcomeRow, TrajectoryRow};
pub use writer::OutputWriter;
