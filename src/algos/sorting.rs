use super::Ranker;
use crate::model::Cohort;

/// Reference ranker: sort everyone, then look for the first occurrence of
/// the target. O(n log n), kept to cross-check the other rankers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sorting;

impl Ranker for Sorting {
    fn name(&self) -> &'static str {
        "sorting"
    }

    fn count_smaller(&self, target: &str, cohort: &Cohort) -> usize {
        let mut names = cohort
            .names()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        names.push(target);
        names.sort_unstable();
        // The target takes the first slot among equal names.
        names.partition_point(|&name| name < target)
    }
}

#[test]
fn test_sorting_picks_first_equal_name() {
    let cohort = Cohort::new(["Mike", "Jules", "Adam", "Jules"]);
    assert_eq!(Sorting.count_smaller("Jules", &cohort), 1);
    assert_eq!(Sorting.count_smaller("Zane", &Cohort::default()), 0);
}
