pub use self::counting::Counting;
pub use self::ranker::Ranker;
pub use self::scanning::Scanning;
pub use self::sorting::Sorting;

use crate::error::ScheduleError;

mod counting;
mod ranker;
mod scanning;
mod sorting;

pub const RANKERS: [&str; 3] = ["counting", "sorting", "scanning"];

pub fn ranker_by_name(name: &str) -> Result<Box<dyn Ranker>, ScheduleError> {
    match name {
        "counting" => Ok(Box::new(Counting)),
        "sorting" => Ok(Box::new(Sorting)),
        "scanning" => Ok(Box::new(Scanning)),
        other => Err(ScheduleError::UnknownRanker(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cohort;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ALPHABET: &[u8] = b"AaBbJjZz";

    fn random_name(rng: &mut StdRng) -> String {
        let len = rng.random_range(0..4);
        (0..len)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }

    #[test]
    fn test_ranker_by_name() {
        for name in RANKERS {
            assert_eq!(ranker_by_name(name).unwrap().name(), name);
        }
        assert_eq!(
            ranker_by_name("hungarian").err(),
            Some(ScheduleError::UnknownRanker("hungarian".into()))
        );
    }

    #[test]
    fn test_rankers_agree() {
        let mut rng = StdRng::seed_from_u64(0x0c0c_7a11);
        let rankers = RANKERS.map(|name| ranker_by_name(name).unwrap());
        for _ in 0..500 {
            let size = rng.random_range(0..12);
            let cohort = (0..size)
                .map(|_| random_name(&mut rng))
                .collect::<Cohort>();
            let target = random_name(&mut rng);
            let expected = Counting.count_smaller(&target, &cohort);
            for ranker in &rankers {
                assert_eq!(
                    ranker.count_smaller(&target, &cohort),
                    expected,
                    "{} disagrees for {target:?} in {cohort:?}",
                    ranker.name()
                );
            }
        }
    }

    #[test]
    fn test_order_of_cohort_is_irrelevant() {
        let mut names = vec!["Mark", "Hank", "Ana", "Vivian", "Zane", "Ana"];
        let before = Counting.count_smaller("Mark", &Cohort::new(names.clone()));
        names.reverse();
        assert_eq!(Counting.count_smaller("Mark", &Cohort::new(names)), before);
    }
}
