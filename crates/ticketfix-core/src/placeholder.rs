use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Shapes of stub code that mark a ticket's example as unfinished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    /// `return {'success': True ...`
    SuccessStub,
    TodoMarker,
    PlaceholderMarker,
    /// A bare `pass` ending a line.
    BarePass,
}

impl PlaceholderKind {
    pub fn all() -> &'static [PlaceholderKind] {
        &[
            PlaceholderKind::SuccessStub,
            PlaceholderKind::TodoMarker,
            PlaceholderKind::PlaceholderMarker,
            PlaceholderKind::BarePass,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlaceholderKind::SuccessStub => "success_stub",
            PlaceholderKind::TodoMarker => "todo_marker",
            PlaceholderKind::PlaceholderMarker => "placeholder_marker",
            PlaceholderKind::BarePass => "bare_pass",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            PlaceholderKind::SuccessStub => r"return\s*\{\s*'success':\s*True",
            PlaceholderKind::TodoMarker => r"#\s*TODO",
            PlaceholderKind::PlaceholderMarker => r"#\s*Placeholder",
            PlaceholderKind::BarePass => r"(?m)pass\s*$",
        }
    }
}

static PATTERNS: OnceLock<Vec<(PlaceholderKind, Regex)>> = OnceLock::new();

fn patterns() -> &'static [(PlaceholderKind, Regex)] {
    PATTERNS.get_or_init(|| {
        PlaceholderKind::all()
            .iter()
            .map(|k| (*k, Regex::new(k.pattern()).expect("static regex")))
            .collect()
    })
}

pub fn detect_placeholder(text: &str) -> bool {
    patterns().iter().any(|(_, re)| re.is_match(text))
}

/// Every placeholder kind present in `text`.
pub fn placeholder_kinds(text: &str) -> Vec<PlaceholderKind> {
    patterns()
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(k, _)| *k)
        .collect()
}
