use regex::{NoExpand, Regex, RegexBuilder};
use serde::Serialize;
use std::sync::OnceLock;

/// Vague terms and their concrete replacements, applied top to bottom.
pub const VAGUE_TERMS: &[(&str, &str)] = &[
    ("appropriate", "specified in configuration"),
    ("proper", "correct"),
    ("gracefully", "by catching exceptions and logging errors"),
    (
        "quality",
        "meeting criteria: Domain Authority >30, updated monthly, >500 words, robots.txt allows",
    ),
    ("relevant", "matching user preferences and engagement metrics"),
    ("efficiently", "with response time <2 seconds"),
    ("robust", "with error handling and retry logic"),
    ("comprehensive", "covering all required fields"),
    ("suitable", "matching the specified requirements"),
    ("adequate", "meeting minimum thresholds"),
];

static MATCHERS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Case-insensitive literal matchers. These match inside longer words too,
/// so "appropriately" is rewritten to "specified in configurationly".
fn matchers() -> &'static [Regex] {
    MATCHERS.get_or_init(|| {
        VAGUE_TERMS
            .iter()
            .map(|(term, _)| {
                RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()
                    .expect("escaped literal")
            })
            .collect()
    })
}

pub fn replace_vague_terms(text: &str) -> String {
    let mut current = text.to_string();
    for (re, (_, replacement)) in matchers().iter().zip(VAGUE_TERMS) {
        current = re.replace_all(&current, NoExpand(*replacement)).into_owned();
    }
    current
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: &'static str,
    pub count: usize,
}

/// Occurrences of each vague term in `text`, skipping terms that never occur.
pub fn count_vague_terms(text: &str) -> Vec<TermCount> {
    matchers()
        .iter()
        .zip(VAGUE_TERMS)
        .filter_map(|(re, (term, _))| {
            let count = re.find_iter(text).count();
            (count > 0).then_some(TermCount { term: *term, count })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
