use crate::error::ScheduleError;
use std::num::NonZeroU64;
use std::str::FromStr;

pub const DEFAULT_SLOT_DURATION: u64 = 30;
const DEFAULT_SLOT: NonZeroU64 = NonZeroU64::new(DEFAULT_SLOT_DURATION).unwrap();

/// Number of judges hearing cases in parallel, one person each per round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capacity(NonZeroU64);

impl Capacity {
    pub fn new(judges: i64) -> Result<Capacity, ScheduleError> {
        u64::try_from(judges)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Capacity)
            .ok_or_else(|| ScheduleError::InvalidCapacity(judges.to_string()))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl FromStr for Capacity {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let judges = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ScheduleError::InvalidCapacity(s.to_owned()))?;
        Capacity::new(judges)
    }
}

/// Duration of one round, in whatever unit the caller reports time in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlotDuration(NonZeroU64);

impl SlotDuration {
    pub fn new(duration: u64) -> Result<SlotDuration, ScheduleError> {
        NonZeroU64::new(duration)
            .map(SlotDuration)
            .ok_or_else(|| ScheduleError::InvalidSlotDuration(duration.to_string()))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl Default for SlotDuration {
    fn default() -> Self {
        SlotDuration(DEFAULT_SLOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_rejects_non_positive() {
        assert!(Capacity::new(0).unwrap_err().is_invalid_capacity());
        assert!(Capacity::new(-3).unwrap_err().is_invalid_capacity());
        assert_eq!(Capacity::new(4).unwrap().get(), 4);
    }

    #[test]
    fn test_capacity_has_no_upper_bound() {
        let judges = i64::from(u32::MAX) + 1;
        assert_eq!(Capacity::new(judges).unwrap().get(), judges as u64);
        assert_eq!(Capacity::new(i64::MAX).unwrap().get(), i64::MAX as u64);
        assert_eq!("5000000000".parse::<Capacity>().unwrap().get(), 5_000_000_000);
    }

    #[test]
    fn test_capacity_from_str() {
        assert_eq!("3".parse::<Capacity>().unwrap().get(), 3);
        assert_eq!(
            "2.5".parse::<Capacity>(),
            Err(ScheduleError::InvalidCapacity("2.5".into()))
        );
        assert_eq!(
            "-1".parse::<Capacity>(),
            Err(ScheduleError::InvalidCapacity("-1".into()))
        );
        assert!("judges".parse::<Capacity>().is_err());
    }

    #[test]
    fn test_slot_duration() {
        assert_eq!(SlotDuration::default().get(), 30);
        assert_eq!(SlotDuration::new(45).unwrap().get(), 45);
        assert_eq!(
            SlotDuration::new(0),
            Err(ScheduleError::InvalidSlotDuration("0".into()))
        );
    }
}
