//! `rv-core`: foundational types for the two-train rendezvous simulator.
//!
//! This crate is a dependency of every other `rv-*` crate.  It has no `rv-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`agent`]   | `AgentState`, `SweepPhase`                                |
//! | [`ids`]     | `AgentSlot`, `Marker`                                     |
//! | [`time`]    | `Step`, `RunConfig`                                       |
//! | [`error`]   | `RvError`, `RvResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod agent;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{AgentState, SweepPhase};
pub use error::{RvError, RvResult};
pub use ids::{AgentSlot, Marker};
pub use time::{DEFAULT_MAX_STEPS, RunConfig, Step};
