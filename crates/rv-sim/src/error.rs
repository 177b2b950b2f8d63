use rv_core::{AgentSlot, RvError, Step};
use rv_sweep::SweepError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] RvError),

    #[error("train {slot} at {step}: {source}")]
    Sweep {
        slot:   AgentSlot,
        step:   Step,
        #[source]
        source: SweepError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
