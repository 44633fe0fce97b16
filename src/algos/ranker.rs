use crate::model::Cohort;

/// Strategy counting the cohort members which sort strictly before a target.
pub trait Ranker: Send + Sync {
    fn name(&self) -> &'static str;

    fn count_smaller(&self, target: &str, cohort: &Cohort) -> usize;
}
