//! Many independent runs over a range of separations.

use rv_core::Step;

use crate::{SimResult, try_run};

/// Outcome of one run in a survey.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurveyRow {
    pub separation:         i64,
    /// Steps taken before the run stopped.
    pub steps:              Step,
    /// `None` if the budget ran out first.
    pub collision_position: Option<i64>,
}

impl SurveyRow {
    #[inline]
    pub fn collided(&self) -> bool {
        self.collision_position.is_some()
    }
}

/// Run Sweep & Wait once per separation with the same step budget.
///
/// Rows come back in the order of `separations`.  With the `parallel` Cargo
/// feature the runs execute on Rayon's thread pool; each run is
/// deterministic, so the result is the same either way.
pub fn survey(separations: &[i64], max_steps: u64) -> SimResult<Vec<SurveyRow>> {
    let one = |&separation: &i64| -> SimResult<SurveyRow> {
        let world = try_run(separation, max_steps)?;
        Ok(SurveyRow {
            separation,
            steps:              world.step_count,
            collision_position: world.collision_position,
        })
    };

    #[cfg(not(feature = "parallel"))]
    {
        separations.iter().map(one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        separations.par_iter().map(one).collect()
    }
}
