use clap::Parser;
use docket::algos::ranker_by_name;
use docket::checks::check_duplicates;
use docket::config::Config;
use docket::display::{display_details, display_wait};
use docket::loaders::load_roster_file;
use docket::model::{Capacity, Cohort, SlotDuration};
use docket::scheduler::RankScheduler;
use eyre::{Error, WrapErr};
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute when your court hearing ends")]
struct Args {
    /// Use FILE instead of docket.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Duration of one round, overriding the configuration
    #[arg(long, value_name = "DURATION")]
    slot: Option<u64>,

    /// Ranking algorithm (counting, sorting, scanning)
    #[arg(long, value_name = "NAME")]
    ranker: Option<String>,

    /// Also read other people's names from the `name` column of a CSV file
    #[arg(long, value_name = "CSV")]
    roster: Option<PathBuf>,

    /// Show position and round along with the waiting time
    #[arg(short, long)]
    details: bool,

    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Your name
    name: String,

    /// Number of judges
    #[arg(allow_negative_numbers = true)]
    judges: Capacity,

    /// Other people's names, separated by single spaces
    #[arg(default_value = "")]
    others: String,
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = Config::load_or_default(args.config.as_deref())?;
    let slot = SlotDuration::new(args.slot.unwrap_or(config.schedule.slot_duration))?;
    let ranker = ranker_by_name(args.ranker.as_deref().unwrap_or(&config.ranker.algorithm))?;
    let mut cohort = Cohort::parse(&args.others).wrap_err("cannot parse other people's names")?;
    if let Some(roster) = &args.roster {
        cohort.extend(load_roster_file(roster)?.names().iter().cloned());
    }
    info!(
        judges = args.judges.get(),
        slot = slot.get(),
        others = cohort.len(),
        "scheduling hearing"
    );
    check_duplicates(&args.name, &cohort);
    let scheduler = RankScheduler::with_ranker(args.judges, slot, ranker);
    let hearing = scheduler.schedule(&args.name, &cohort);
    if args.details {
        display_details(&scheduler, &args.name, cohort.len(), &hearing);
    } else {
        display_wait(&hearing);
    }
    Ok(())
}
