//! Compiled regular expressions used by the parser.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Age patterns, tried in order; the first that matches wins.
///
/// 1. `<low> ... <high> ... year`
/// 2. `<n> ... year`
/// 3. `age ... <low> ... <high>`
/// 4. `age ... <n>`
pub static AGE: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        compile(r"(?i)(\d+)[^\d]{1,20}(\d+)[^\d]{1,20}year"),
        compile(r"(?i)(\d+)[^\d]{1,20}year"),
        compile(r"(?i)age[^\d]{1,20}(\d+)[^\d]{1,20}(\d+)"),
        compile(r"(?i)age[^\d]{1,20}(\d+)"),
    ]
});

/// `keyword is PO`, `keyword: aortic`.
pub static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)keyword.*(?:is|:)\s*([a-z]+)"));

/// Token following an x-axis phrase: `x is date`, `axis: time`, `around sex`.
pub static LINE_AXIS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:x\s*|axis|around)+\s*(?::|-|upon|is|in|on|by|at|for|with|as|\s*)\s*(\S+)")
});

/// Token following a grouping phrase: `group by age`, `bar graph on sex`.
pub static BAR_GROUPING: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?:grouping|grouped|groups|group|bar\s*|categorized|categorize|graph\s*)+\s*(?:by|on|\s*)\s*(\S+)",
    )
});

/// First alphabetic run of a captured token.
pub static LETTERS: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-zA-Z]+"));
