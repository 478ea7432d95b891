//! Conference filter.
//!
//! Membership is an exact, case-sensitive match on the cleaned college name.
//! Colleges outside the selected conference(s), including ones whose spelling
//! differs from the rosters, are dropped without error.

pub mod members;

use crate::draft::Record;
use clap::ValueEnum;
use members::{BIG_TEN, SEC};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConferenceMode {
    #[value(name = "bigten")]
    BigTen,
    Sec,
    Both,
}

impl ConferenceMode {
    pub fn contains(self, college: &str) -> bool {
        match self {
            ConferenceMode::BigTen => BIG_TEN.contains(college),
            ConferenceMode::Sec => SEC.contains(college),
            ConferenceMode::Both => BIG_TEN.contains(college) || SEC.contains(college),
        }
    }

    /// Display name used in diagram titles.
    pub fn label(self) -> &'static str {
        match self {
            ConferenceMode::BigTen => "Big Ten",
            ConferenceMode::Sec => "SEC",
            ConferenceMode::Both => "Big Ten & SEC",
        }
    }
}

/// Keep records whose origin belongs to the selected conference(s).
pub fn filter_conferences(records: &[Record], mode: ConferenceMode) -> Vec<Record> {
    records
        .iter()
        .filter(|r| mode.contains(&r.origin))
        .cloned()
        .collect()
}
