pub use self::capacity::{Capacity, DEFAULT_SLOT_DURATION, SlotDuration};
pub use self::cohort::Cohort;
pub use self::rank::Rank;

mod capacity;
mod cohort;
mod rank;
