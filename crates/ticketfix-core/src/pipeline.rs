use crate::io::line_count;
use crate::rules::{self, RuleOutcome};
use crate::ticket::TicketFamily;
use crate::types::Complexity;
use crate::vague;
use serde::Serialize;

/// Appended after every rewritten ticket.
pub const SEPARATOR: &str = "\n---\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub skip_first: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { skip_first: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TicketOutcome {
    Improved {
        id: String,
        complexity: Complexity,
        rules: Vec<RuleOutcome>,
    },
    NotFound {
        id: String,
    },
}

impl TicketOutcome {
    pub fn id(&self) -> &str {
        match self {
            TicketOutcome::Improved { id, .. } | TicketOutcome::NotFound { id } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Ticket headers found in the source, including any skipped one.
    pub discovered: usize,
    pub tickets: Vec<TicketOutcome>,
    pub line_count: usize,
}

impl Report {
    pub fn improved(&self) -> usize {
        self.tickets
            .iter()
            .filter(|t| matches!(t, TicketOutcome::Improved { .. }))
            .count()
    }

    pub fn not_found(&self) -> usize {
        self.tickets.len() - self.improved()
    }
}

#[derive(Debug, Clone)]
pub struct Assembled {
    pub document: String,
    pub report: Report,
}

/// Insert missing sections, then make vague wording concrete.
pub fn improve_ticket(text: &str, complexity: &Complexity) -> (String, Vec<RuleOutcome>) {
    let (with_sections, outcomes) = rules::apply_all(text, complexity);
    (vague::replace_vague_terms(&with_sections), outcomes)
}

/// Rewrite every ticket of `family` in `source` onto `base`.
///
/// `on_ticket` sees each outcome as soon as the ticket is handled.
pub fn assemble<F>(
    source: &str,
    base: &str,
    family: &TicketFamily,
    options: Options,
    on_ticket: F,
) -> Assembled
where
    F: FnMut(&TicketOutcome),
{
    let ids = family.discover_ids(source);
    let mut assembled = assemble_ids(source, base, family, select(&ids, options), on_ticket);
    assembled.report.discovered = ids.len();
    assembled
}

/// The identifiers to rewrite out of everything discovered.
pub fn select(ids: &[String], options: Options) -> &[String] {
    let skip = usize::from(options.skip_first && !ids.is_empty());
    &ids[skip..]
}

/// Rewrite exactly the tickets named in `ids`, in that order.
pub fn assemble_ids<F>(
    source: &str,
    base: &str,
    family: &TicketFamily,
    ids: &[String],
    mut on_ticket: F,
) -> Assembled
where
    F: FnMut(&TicketOutcome),
{
    let mut document = base.to_string();
    let mut tickets = Vec::with_capacity(ids.len());

    for id in ids {
        let outcome = match family.extract(source, id) {
            Ok(ticket) => {
                let complexity = ticket.complexity();
                let (improved, rules) = improve_ticket(ticket.text, &complexity);
                document.push_str(&improved);
                document.push_str(SEPARATOR);
                TicketOutcome::Improved {
                    id: id.clone(),
                    complexity,
                    rules,
                }
            }
            Err(_) => TicketOutcome::NotFound { id: id.clone() },
        };
        on_ticket(&outcome);
        tickets.push(outcome);
    }

    let report = Report {
        discovered: ids.len(),
        line_count: line_count(&document),
        tickets,
    };
    Assembled { document, report }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
