use super::Ranker;
use crate::model::Cohort;
use std::cmp::Ordering;

/// Byte-level ranker: decides on the first byte whenever it differs from the
/// target's and only compares whole names on a first-byte tie.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scanning;

impl Ranker for Scanning {
    fn name(&self) -> &'static str {
        "scanning"
    }

    fn count_smaller(&self, target: &str, cohort: &Cohort) -> usize {
        let lead = target.as_bytes().first();
        cohort
            .names()
            .iter()
            .filter(|name| match name.as_bytes().first().cmp(&lead) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => name.as_bytes() < target.as_bytes(),
            })
            .count()
    }
}
