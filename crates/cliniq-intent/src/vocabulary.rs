use serde::{Deserialize, Serialize};

use cliniq_core::models::chart::{ChartKind, Grouping};

/// Every word list the intent parser matches against.
///
/// These are tuning data, not logic; any list can be replaced from
/// configuration. Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub male_words: Vec<String>,
    pub female_words: Vec<String>,

    pub line_words: Vec<String>,
    pub table_words: Vec<String>,
    pub pie_words: Vec<String>,
    pub bar_words: Vec<String>,

    /// A token starting with one of these marks a term-frequency request.
    pub frequency_prefixes: Vec<String>,
    /// A token starting with one of these marks an outcome question.
    pub effect_prefixes: Vec<String>,
    pub help_prefixes: Vec<String>,

    pub sex_grouping_words: Vec<String>,
    pub age_grouping_words: Vec<String>,
    pub date_grouping_words: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            male_words: words(&["man", "male", "his", "him", "himself", "he", "boy"]),
            female_words: words(&["woman", "female", "her", "herself", "she", "girl"]),
            line_words: words(&[
                "relation", "relates", "relating", "related", "line", "plot", "plots",
            ]),
            table_words: words(&["table", "list", "listed", "lists"]),
            pie_words: words(&[
                "pie", "chart", "charts", "picture", "pictures", "pictured", "picturing",
            ]),
            bar_words: words(&[
                "bar",
                "group",
                "groups",
                "grouped",
                "grouping",
                "categorize",
                "categorizes",
                "categorized",
                "categorizing",
            ]),
            frequency_prefixes: words(&["freq", "tf"]),
            effect_prefixes: words(&["result", "after", "effect"]),
            help_prefixes: words(&["help"]),
            sex_grouping_words: words(&["sex", "gender"]),
            age_grouping_words: words(&["age", "year", "old"]),
            date_grouping_words: words(&["time", "date", "day", "days"]),
        }
    }
}

impl Vocabulary {
    /// Keyword set that selects `kind`.
    pub fn chart_words(&self, kind: ChartKind) -> &[String] {
        match kind {
            ChartKind::Line => &self.line_words,
            ChartKind::Table => &self.table_words,
            ChartKind::Pie => &self.pie_words,
            ChartKind::Bar => &self.bar_words,
        }
    }

    /// Map an attribute word (already lowercased) to a grouping.
    pub fn grouping_for(&self, word: &str) -> Option<Grouping> {
        let has = |list: &[String]| list.iter().any(|w| w == word);
        if has(&self.sex_grouping_words) {
            Some(Grouping::Sex)
        } else if has(&self.age_grouping_words) {
            Some(Grouping::Age)
        } else if has(&self.date_grouping_words) {
            Some(Grouping::Date)
        } else {
            None
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}
