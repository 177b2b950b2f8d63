//! `rv-sweep`: the per-train Sweep & Wait algorithm.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`action`] | `Action` enum (`Forward`, `Backward`, `Wait`)                    |
//! | [`sweep`]  | `decide`, `advance`, `try_advance`: the pure algorithm           |
//! | [`model`]  | `SearchStrategy` trait and its `SweepAndWait` implementor        |
//! | [`error`]  | `SweepError`, `SweepResult<T>`                                   |
//!
//! # Design notes
//!
//! Each tick is split in two, mirroring how the driver in rv-sim works:
//!
//! 1. **Decide**: both trains pick an `Action` from the same snapshot.
//! 2. **Advance**: each train builds its next `AgentState` from its own
//!    action.  Nothing written here is visible to the other train until the
//!    following tick.
//!
//! Neither function can see the other train.  The only external input is the
//! foreign [`Marker`][rv_core::Marker], which a train can only match against
//! its own position.

pub mod action;
pub mod error;
pub mod model;
pub mod sweep;


pub use action::Action;
pub use error::{SweepError, SweepResult};
pub use model::{SearchStrategy, SweepAndWait};
pub use sweep::{advance, decide, try_advance};
