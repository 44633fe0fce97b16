use crate::model::Cohort;
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

#[derive(Debug, Deserialize)]
struct Record {
    name: String,
}

/// Read the names of a CSV roster with a `name` column. Other columns are
/// ignored and blank names are skipped.
pub fn load_roster<R: Read>(reader: R) -> Result<Cohort, Error> {
    let mut names = Vec::new();
    for (index, record) in csv::Reader::from_reader(reader)
        .deserialize::<Record>()
        .enumerate()
    {
        let record =
            record.wrap_err_with(|| format!("cannot read roster record {}", index + 1))?;
        if record.name.is_empty() {
            trace!(record = index + 1, "skipping blank name");
            continue;
        }
        names.push(record.name);
    }
    debug!(names = names.len(), "roster loaded");
    Ok(Cohort::new(names))
}

pub fn load_roster_file(file_name: &Path) -> Result<Cohort, Error> {
    let file = std::fs::File::open(file_name)
        .wrap_err_with(|| format!("cannot open roster {}", file_name.display()))?;
    load_roster(file).wrap_err_with(|| format!("cannot load roster {}", file_name.display()))
}
