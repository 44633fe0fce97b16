use crate::scheduler::{Hearing, RankScheduler};

pub fn display_wait(hearing: &Hearing) {
    println!("{}", hearing.wait_time);
}

pub fn display_details(
    scheduler: &RankScheduler,
    name: &str,
    cohort_len: usize,
    hearing: &Hearing,
) {
    println!("{name}:");
    println!(
        "  - position {} out of {} (ranked with {})",
        hearing.rank,
        cohort_len + 1,
        scheduler.ranker().name()
    );
    println!("  - {} people heard before you", hearing.rank.ahead());
    println!(
        "  - heard in round {} with {} judge{}",
        hearing.round,
        scheduler.capacity().get(),
        if scheduler.capacity().get() == 1 { "" } else { "s" }
    );
    println!(
        "  - hearing ends after {} ({} per round)",
        hearing.wait_time,
        scheduler.slot().get()
    );
}
