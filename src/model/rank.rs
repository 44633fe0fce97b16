/// 1-indexed position of a target among itself and its cohort.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rank(usize);

impl Rank {
    pub fn from_smaller_count(smaller: usize) -> Rank {
        Rank(smaller + 1)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of names served strictly before the target.
    pub fn ahead(self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_rank_is_one_indexed() {
    assert_eq!(Rank::from_smaller_count(0).get(), 1);
    assert_eq!(Rank::from_smaller_count(3).get(), 4);
    assert_eq!(Rank::from_smaller_count(3).ahead(), 3);
    assert!(Rank::from_smaller_count(1) < Rank::from_smaller_count(2));
}
