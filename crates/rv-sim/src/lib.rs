//! `rv-sim`: synchronous driver for the two-train rendezvous.
//!
//! # One tick
//!
//! ```text
//! for step in 0..max_steps while not collided:
//!   ① Decide:  both trains pick an Action from the same pre-tick snapshot.
//!   ② Advance: each train builds its next AgentState independently.
//!   ③ Collide: same position after the move → record it and freeze.
//! ```
//!
//! Every tick returns a brand-new [`WorldState`]; the previous one is left as
//! it was, so callers can keep any number of snapshots (history, undo,
//! side-by-side comparisons) without copying defensively.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`survey`] on Rayon's thread pool.                |
//! | `serde`    | `Serialize`/`Deserialize` on `WorldState`, `SurveyRow`.|
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rv_core::RunConfig;
//! use rv_sim::{NoopObserver, Sim};
//!
//! let world = rv_sim::run(5, 100);
//! assert_eq!(world.collision_position, Some(5));
//!
//! let mut sim = Sim::new(RunConfig::new(-5))?;
//! let world = sim.run(&mut NoopObserver)?;
//! ```

pub mod driver;
pub mod error;
pub mod observer;
pub mod sim;
pub mod survey;
pub mod world;

#[cfg(test)]
mod tests;

pub use driver::{run, step, step_with, try_run, try_step, try_step_with};
pub use error::{SimError, SimResult};
pub use observer::{HistoryObserver, NoopObserver, SimObserver};
pub use sim::Sim;
pub use survey::{SurveyRow, survey};
pub use world::{WorldState, create_world};
