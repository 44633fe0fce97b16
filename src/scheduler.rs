use crate::algos::{Counting, Ranker};
use crate::error::ScheduleError;
use crate::model::{Capacity, Cohort, Rank, SlotDuration};
use tracing::{debug, instrument};

/// Outcome of scheduling one target against its cohort.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hearing {
    pub rank: Rank,
    pub round: u64,
    pub wait_time: u64,
}

/// Computes when a person's hearing ends, given a fixed number of judges
/// and a fixed duration per round. People are heard in lexicographic order
/// of their names, and a name never yields its slot to an identical one.
pub struct RankScheduler {
    capacity: Capacity,
    slot: SlotDuration,
    ranker: Box<dyn Ranker>,
}

impl RankScheduler {
    pub fn new(capacity: Capacity, slot: SlotDuration) -> RankScheduler {
        RankScheduler::with_ranker(capacity, slot, Box::new(Counting))
    }

    pub fn with_ranker(
        capacity: Capacity,
        slot: SlotDuration,
        ranker: Box<dyn Ranker>,
    ) -> RankScheduler {
        RankScheduler {
            capacity,
            slot,
            ranker,
        }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn slot(&self) -> SlotDuration {
        self.slot
    }

    pub fn ranker(&self) -> &dyn Ranker {
        self.ranker.as_ref()
    }

    pub fn rank(&self, target: &str, cohort: &Cohort) -> Rank {
        Rank::from_smaller_count(self.ranker.count_smaller(target, cohort))
    }

    /// 1-indexed round in which the person at `rank` is heard.
    pub fn round(&self, rank: Rank) -> u64 {
        (rank.get() as u64).div_ceil(self.capacity.get())
    }

    pub fn wait_time(&self, target: &str, cohort: &Cohort) -> u64 {
        self.schedule(target, cohort).wait_time
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(person = target, cohort = cohort.len(), ranker = self.ranker.name())
    )]
    pub fn schedule(&self, target: &str, cohort: &Cohort) -> Hearing {
        let rank = self.rank(target, cohort);
        let round = self.round(rank);
        // Saturates instead of wrapping on absurdly long slots.
        let wait_time = round.saturating_mul(self.slot.get());
        debug!(%rank, round, wait_time, "hearing scheduled");
        Hearing {
            rank,
            round,
            wait_time,
        }
    }
}

/// Boundary form of the computation: validates the number of judges and the
/// slot duration, tokenizes `others` on single spaces, and returns the wait.
pub fn compute_wait_time(
    target: &str,
    judges: i64,
    others: &str,
    slot_duration: u64,
) -> Result<u64, ScheduleError> {
    let capacity = Capacity::new(judges)?;
    let slot = SlotDuration::new(slot_duration)?;
    let cohort = Cohort::parse(others)?;
    Ok(RankScheduler::new(capacity, slot).wait_time(target, &cohort))
}
