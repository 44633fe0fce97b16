use crate::model::Cohort;
use tracing::warn;

/// Number of cohort entries spelled exactly like the target.
pub fn duplicates_of(target: &str, cohort: &Cohort) -> usize {
    cohort.names().iter().filter(|&name| name == target).count()
}

/// Warn when people share the target's exact name: they are heard after it.
pub fn check_duplicates(target: &str, cohort: &Cohort) {
    let duplicates = duplicates_of(target, cohort);
    if duplicates > 0 {
        warn!(
            target_name = target,
            duplicates,
            "other people share this name, they are assumed to be heard afterwards"
        );
    }
}

#[test]
fn test_duplicates_of() {
    let cohort = Cohort::new(["Jules", "jules", "Jules", "Julesa"]);
    assert_eq!(duplicates_of("Jules", &cohort), 2);
    assert_eq!(duplicates_of("Mike", &cohort), 0);
}
