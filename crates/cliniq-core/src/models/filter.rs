use std::fmt;

use serde::{Deserialize, Serialize};

use super::document::Sex;

/// An integer age range.
///
/// Ranges parsed from a message (and the default `0..120`) include both
/// ends. Sub-ranges produced for age buckets exclude `high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub low: u32,
    pub high: u32,
    pub high_inclusive: bool,
}

impl AgeRange {
    pub const DEFAULT: AgeRange = AgeRange {
        low: 0,
        high: 120,
        high_inclusive: true,
    };

    /// Inclusive range. The bounds are swapped when given out of order.
    pub fn inclusive(low: u32, high: u32) -> Self {
        let (low, high) = if low > high { (high, low) } else { (low, high) };
        Self {
            low,
            high,
            high_inclusive: true,
        }
    }

    /// Half-open range `[low, high)`.
    pub fn half_open(low: u32, high: u32) -> Self {
        Self {
            low,
            high: high.max(low),
            high_inclusive: false,
        }
    }

    /// First age past the end of the range.
    pub fn end_exclusive(&self) -> u32 {
        if self.high_inclusive {
            self.high.saturating_add(1)
        } else {
            self.high
        }
    }

    /// Number of integer ages covered.
    pub fn len(&self) -> u32 {
        self.end_exclusive() - self.low
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.low && age < self.end_exclusive()
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high_inclusive {
            write!(f, "{}..{}", self.low, self.high)
        } else {
            write!(f, "{}...{}", self.low, self.high)
        }
    }
}

/// The document selection for one request.
///
/// Built fresh from each message and never shared between requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filter {
    pub sex: Option<Sex>,
    #[serde(default)]
    pub age: AgeRange,
    pub keyword: Option<String>,
}

impl Filter {
    pub fn with_sex(mut self, sex: Option<Sex>) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_age(mut self, age: AgeRange) -> Self {
        self.age = age;
        self
    }

    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword;
        self
    }

    /// The selection values only (sex when set, then age), e.g. `["female", "60..70"]`.
    pub fn values(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(2);
        if let Some(sex) = self.sex {
            values.push(sex.to_string());
        }
        values.push(self.age.to_string());
        values
    }

    /// Human-readable rendering used in chart titles,
    /// e.g. `sex: female, age: 60..70, keyword: PO`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(sex) = self.sex {
            parts.push(format!("sex: {sex}"));
        }
        parts.push(format!("age: {}", self.age));
        if let Some(keyword) = &self.keyword {
            parts.push(format!("keyword: {keyword}"));
        }
        parts.join(", ")
    }
}
