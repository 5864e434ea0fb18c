use crate::error::{Result, TicketError};
use crate::paths;
use crate::types::{Complexity, Section};
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// TicketFamily
// ---------------------------------------------------------------------------

/// All tickets sharing one identifier prefix, e.g. `BUXMAX-001`.
#[derive(Debug, Clone)]
pub struct TicketFamily {
    prefix: String,
    header_re: Regex,
}

impl TicketFamily {
    pub fn new(prefix: &str) -> Result<Self> {
        paths::validate_prefix(prefix)?;
        let header_re = Regex::new(&format!(r"## ({}-\d{{3}}):", regex::escape(prefix)))?;
        Ok(Self {
            prefix: prefix.to_string(),
            header_re,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Identifiers of every ticket header, in document order.
    pub fn discover_ids(&self, text: &str) -> Vec<String> {
        self.header_re
            .captures_iter(text)
            .map(|c| c[1].to_string())
            .collect()
    }

    /// The span from `## <id>:` up to the next header of this family.
    ///
    /// Only the first occurrence of the header is considered.
    pub fn extract<'a>(&self, text: &'a str, id: &str) -> Result<Ticket<'a>> {
        let header = format!("## {id}:");
        let start = text
            .find(&header)
            .ok_or_else(|| TicketError::TicketNotFound(id.to_string()))?;
        let body_from = start + header.len();
        let next_header = format!("\n## {}-", self.prefix);
        let end = text[body_from..]
            .find(&next_header)
            .map(|off| body_from + off)
            .unwrap_or(text.len());
        Ok(Ticket {
            id: id.to_string(),
            text: &text[start..end],
        })
    }
}

// ---------------------------------------------------------------------------
// Ticket
// ---------------------------------------------------------------------------

/// Read-only view of one ticket inside the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<'a> {
    pub id: String,
    pub text: &'a str,
}

static COMPLEXITY_RE: OnceLock<Regex> = OnceLock::new();

fn complexity_re() -> &'static Regex {
    COMPLEXITY_RE.get_or_init(|| Regex::new(r"\*\*Complexity\*\*:\s*(\w+)").expect("static regex"))
}

impl<'a> Ticket<'a> {
    pub fn complexity(&self) -> Complexity {
        complexity_of(self.text)
    }

    pub fn has_section(&self, section: Section) -> bool {
        section.is_present(self.text)
    }

    pub fn missing_sections(&self) -> Vec<Section> {
        Section::all()
            .iter()
            .copied()
            .filter(|s| !self.has_section(*s))
            .collect()
    }

    pub fn has_dependencies_field(&self) -> bool {
        self.text.contains("**Dependencies**:")
    }
}

/// Complexity label of ticket text, `Medium` when the field is absent.
pub fn complexity_of(text: &str) -> Complexity {
    complexity_re()
        .captures(text)
        .map(|c| Complexity::from_label(&c[1]))
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
