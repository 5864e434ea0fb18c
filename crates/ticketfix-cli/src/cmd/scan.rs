use super::SourceArgs;
use crate::output::{print_json, print_table};
use serde::Serialize;
use std::path::Path;
use ticketfix_core::placeholder::{placeholder_kinds, PlaceholderKind};
use ticketfix_core::vague::{count_vague_terms, TermCount};

#[derive(Serialize)]
struct Finding {
    id: String,
    placeholders: Vec<PlaceholderKind>,
    vague_terms: Vec<TermCount>,
}

impl Finding {
    fn is_clean(&self) -> bool {
        self.placeholders.is_empty() && self.vague_terms.is_empty()
    }
}

/// Diagnostics only; the source document is never touched.
pub fn run(root: &Path, args: SourceArgs, json: bool) -> anyhow::Result<()> {
    let mut config = super::load_config(root)?;
    args.apply(&mut config);
    let family = super::family(&config)?;
    let source = super::read_document(&config.source_path(root))?;

    let mut findings = Vec::new();
    for id in family.discover_ids(&source) {
        let ticket = family.extract(&source, &id)?;
        findings.push(Finding {
            placeholders: placeholder_kinds(ticket.text),
            vague_terms: count_vague_terms(ticket.text),
            id,
        });
    }

    if json {
        return print_json(&findings);
    }

    let total = findings.len();
    let with_placeholders = findings.iter().filter(|f| !f.placeholders.is_empty()).count();
    let flagged: Vec<Vec<String>> = findings
        .iter()
        .filter(|f| !f.is_clean())
        .map(|f| {
            let placeholders = f
                .placeholders
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let terms = f
                .vague_terms
                .iter()
                .map(|t| format!("{}×{}", t.term, t.count))
                .collect::<Vec<_>>()
                .join(", ");
            vec![f.id.clone(), or_dash(placeholders), or_dash(terms)]
        })
        .collect();

    if !flagged.is_empty() {
        print_table(&["ID", "PLACEHOLDERS", "VAGUE TERMS"], flagged);
        println!();
    }
    println!("{with_placeholders} of {total} tickets contain placeholder code");
    Ok(())
}

fn or_dash(s: String) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s
    }
}
