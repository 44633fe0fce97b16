//! Court hearing wait times.
//!
//! People are heard in lexicographic order of their names by a fixed number
//! of judges, each hearing one person per round. Knowing one's position only
//! requires counting the names sorting before one's own, so the whole list
//! never needs to be sorted.

pub mod algos;
pub mod checks;
pub mod config;
pub mod display;
pub mod error;
pub mod loaders;
pub mod model;
pub mod scheduler;

pub use error::ScheduleError;
pub use scheduler::{Hearing, RankScheduler, compute_wait_time};
