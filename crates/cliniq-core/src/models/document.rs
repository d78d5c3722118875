use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A clinical narrative record as held by the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub sex: Sex,
    pub age: u32,
    pub text: String,
    /// Dated sub-entries of the record. Not necessarily in date order.
    #[serde(default)]
    pub dated_entries: Vec<DatedEntry>,
}

/// One dated note inside a document's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedEntry {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub text: String,
}

impl DatedEntry {
    /// Composite ordering key: `year*13*50 + month*50 + day`.
    pub fn sort_key(&self) -> i64 {
        i64::from(self.year) * 13 * 50 + i64::from(self.month) * 50 + i64::from(self.day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Both values, in the order buckets are laid out on a chart axis.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(CoreError::InvalidSex(other.to_string())),
        }
    }
}
