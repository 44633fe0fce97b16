use super::Ranker;
use crate::model::Cohort;

/// Single linear pass over the cohort. This is the default ranker.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counting;

impl Ranker for Counting {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn count_smaller(&self, target: &str, cohort: &Cohort) -> usize {
        cohort
            .names()
            .iter()
            .filter(|name| name.as_str() < target)
            .count()
    }
}
