//! Input collection: one editable time/nickname pair per roster runner.
//!
//! The roster is a declarative list of field definitions (see
//! [`LeaderboardConfig::runners`](crate::config::LeaderboardConfig::runners)).
//! A [`Form`] holds the current value of every field and hands the
//! generator an ordered entry list on save. Values reach the form three
//! ways: `--set` assignments on the command line, a JSON entries file, or
//! the interactive [`Form::prompt`].

use crate::types::Entry;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no runner named {0:?} in the roster")]
    UnknownRunner(String),
    #[error("expected NAME,TIME[,NICKNAME], got {0:?}")]
    BadAssignment(String),
}

/// A command-line edit of one runner's fields: `NAME,TIME[,NICKNAME]`.
///
/// Everything after the second comma is the nickname, commas included.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub time: String,
    pub nickname: Option<String>,
}

impl FromStr for Assignment {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ',');
        let name = parts.next().unwrap_or_default().trim();
        let time = parts.next().map(str::trim);
        let nickname = parts.next().map(str::to_string);
        match time {
            Some(time) if !name.is_empty() => Ok(Assignment {
                name: name.to_string(),
                time: time.to_string(),
                nickname,
            }),
            _ => Err(FormError::BadAssignment(s.to_string())),
        }
    }
}

/// Current values of every runner's fields, in roster order.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Entry>,
}

impl Form {
    /// Seed the form from roster field definitions and their default values.
    pub fn from_roster(runners: &[Entry]) -> Self {
        Self {
            fields: runners.to_vec(),
        }
    }

    /// Seed the form from entries supplied by another collector.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { fields: entries }
    }

    /// Apply one assignment. Every runner carrying that name is updated.
    pub fn apply(&mut self, assignment: &Assignment) -> Result<(), FormError> {
        let mut matched = false;
        for field in self.fields.iter_mut().filter(|f| f.name == assignment.name) {
            field.time.clone_from(&assignment.time);
            if let Some(nickname) = &assignment.nickname {
                field.nickname.clone_from(nickname);
            }
            matched = true;
        }
        if matched {
            Ok(())
        } else {
            Err(FormError::UnknownRunner(assignment.name.clone()))
        }
    }

    pub fn apply_all<'a>(
        &mut self,
        assignments: impl IntoIterator<Item = &'a Assignment>,
    ) -> Result<(), FormError> {
        for assignment in assignments {
            self.apply(assignment)?;
        }
        Ok(())
    }

    /// Walk every runner asking for time then nickname.
    ///
    /// The current value is shown in brackets; an empty answer keeps it.
    /// End of input stops prompting and keeps the remaining values.
    pub fn prompt<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), FormError> {
        for field in &mut self.fields {
            writeln!(output, "{}", field.name)?;
            for (label, value) in [("Time", &mut field.time), ("Nickname", &mut field.nickname)] {
                write!(output, "  {}: [{}] ", label, value)?;
                output.flush()?;
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    writeln!(output)?;
                    return Ok(());
                }
                let answer = line.trim_end_matches(['\r', '\n']);
                if !answer.trim().is_empty() {
                    *value = answer.trim().to_string();
                }
            }
        }
        Ok(())
    }

    /// The collected entries, in roster order.
    pub fn entries(&self) -> Vec<Entry> {
        self.fields.clone()
    }
}
