use regex::Regex;
use tracing::debug;

use cliniq_core::models::chart::{ChartKind, Grouping};
use cliniq_core::models::document::Sex;
use cliniq_core::models::filter::{AgeRange, Filter};
use cliniq_text::tokenize::tokenize;

use crate::error::IntentError;
use crate::patterns;
use crate::vocabulary::Vocabulary;

/// Message parser bound to one vocabulary.
#[derive(Debug, Clone, Default)]
pub struct IntentParser {
    vocabulary: Vocabulary,
}

impl IntentParser {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The full filter a message asks for: sex, age range, and keyword.
    pub fn parse_filter(&self, message: &str) -> Filter {
        let filter = Filter::default()
            .with_sex(self.parse_sex(message))
            .with_age(parse_age(message))
            .with_keyword(parse_keyword(message));
        debug!(filter = %filter.describe(), "parsed filter");
        filter
    }

    /// Majority vote of male vs female indicator words.
    ///
    /// Returns `None` on a tie, including when neither side is mentioned.
    pub fn parse_sex(&self, message: &str) -> Option<Sex> {
        let mut male = 0usize;
        let mut female = 0usize;
        for word in lowercase_words(message) {
            if contains(&self.vocabulary.male_words, &word) {
                male += 1;
            }
            if contains(&self.vocabulary.female_words, &word) {
                female += 1;
            }
        }
        match male.cmp(&female) {
            std::cmp::Ordering::Greater => Some(Sex::Male),
            std::cmp::Ordering::Less => Some(Sex::Female),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Whether the message asks for term-frequency output, and which chart.
    ///
    /// `None` means the message is not a frequency request at all.
    /// `Some(Err(_))` means it is one, but no chart kind was recognized.
    pub fn parse_chart_request(&self, message: &str) -> Option<Result<ChartKind, IntentError>> {
        let words = lowercase_words(message);
        if !has_prefix(&words, &self.vocabulary.frequency_prefixes) {
            return None;
        }

        let kind = ChartKind::PRIORITY.into_iter().find(|&kind| {
            let keys = self.vocabulary.chart_words(kind);
            words.iter().any(|w| contains(keys, w))
        });

        Some(kind.ok_or(IntentError::MissingChartKind))
    }

    /// The x-axis attribute of a line chart: date or sex.
    pub fn parse_line_axis(&self, message: &str) -> Result<Grouping, IntentError> {
        self.capture_grouping(&patterns::LINE_AXIS, message, &[Grouping::Date, Grouping::Sex])
            .ok_or(IntentError::MissingLineAxis)
    }

    /// The category attribute of a bar chart: sex or age.
    pub fn parse_bar_grouping(&self, message: &str) -> Result<Grouping, IntentError> {
        self.capture_grouping(&patterns::BAR_GROUPING, message, &[Grouping::Sex, Grouping::Age])
            .ok_or(IntentError::MissingBarGrouping)
    }

    /// Map a captured token to a grouping using its first alphabetic run.
    pub fn normalize_grouping(&self, token: &str) -> Option<Grouping> {
        let word = patterns::LETTERS.find(token)?.as_str().to_lowercase();
        self.vocabulary.grouping_for(&word)
    }

    pub fn is_help_request(&self, message: &str) -> bool {
        has_prefix(&lowercase_words(message), &self.vocabulary.help_prefixes)
    }

    pub fn is_effect_request(&self, message: &str) -> bool {
        has_prefix(&lowercase_words(message), &self.vocabulary.effect_prefixes)
    }

    /// Walk every match of `pattern` left to right; the first capture that
    /// normalizes to an accepted grouping wins.
    fn capture_grouping(
        &self,
        pattern: &Regex,
        message: &str,
        accepted: &[Grouping],
    ) -> Option<Grouping> {
        pattern
            .captures_iter(message)
            .filter_map(|caps| caps.get(1))
            .filter_map(|token| self.normalize_grouping(token.as_str()))
            .find(|grouping| accepted.contains(grouping))
    }
}

/// Age range stated in the message, or the default `0..120`.
///
/// A single number yields the degenerate range `[n, n]`; reversed bounds are
/// swapped.
pub fn parse_age(message: &str) -> AgeRange {
    for pattern in patterns::AGE.iter() {
        let Some(caps) = pattern.captures(message) else {
            continue;
        };
        let low = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
        let high = match caps.get(2) {
            Some(m) => m.as_str().parse::<u32>().ok(),
            None => low,
        };
        if let (Some(low), Some(high)) = (low, high) {
            return AgeRange::inclusive(low, high);
        }
    }
    AgeRange::DEFAULT
}

/// Word following `keyword is` / `keyword:`.
pub fn parse_keyword(message: &str) -> Option<String> {
    patterns::KEYWORD
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn lowercase_words(message: &str) -> Vec<String> {
    tokenize(message).map(str::to_lowercase).collect()
}

fn contains(list: &[String], word: &str) -> bool {
    list.iter().any(|w| w == word)
}

fn has_prefix(words: &[String], prefixes: &[String]) -> bool {
    words
        .iter()
        .any(|w| prefixes.iter().any(|p| w.starts_with(p.as_str())))
}
