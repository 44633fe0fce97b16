use crate::error::ScheduleError;

/// Everyone else waiting for a hearing. Order is irrelevant.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cohort {
    names: Vec<String>,
}

impl Cohort {
    pub fn new<I, S>(names: I) -> Cohort
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Cohort {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokenize a list of names separated by single ASCII spaces. The empty
    /// line is the empty cohort; any other empty token is rejected.
    pub fn parse(line: &str) -> Result<Cohort, ScheduleError> {
        if line.is_empty() {
            return Ok(Cohort::default());
        }
        let names = line
            .split(' ')
            .enumerate()
            .map(|(position, name)| {
                if name.is_empty() {
                    Err(ScheduleError::MalformedCohort { position })
                } else {
                    Ok(name.to_owned())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Cohort { names })
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Cohort {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Cohort::new(iter)
    }
}
