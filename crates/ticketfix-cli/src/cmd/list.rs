use super::SourceArgs;
use crate::output::{print_json, print_table};
use serde::Serialize;
use std::path::Path;
use ticketfix_core::types::{Complexity, Section};

#[derive(Serialize)]
struct TicketRow {
    id: String,
    complexity: Complexity,
    missing: Vec<Section>,
    has_dependencies: bool,
}

pub fn run(root: &Path, args: SourceArgs, json: bool) -> anyhow::Result<()> {
    let mut config = super::load_config(root)?;
    args.apply(&mut config);
    let family = super::family(&config)?;
    let source = super::read_document(&config.source_path(root))?;

    let mut rows = Vec::new();
    for id in family.discover_ids(&source) {
        let ticket = family.extract(&source, &id)?;
        rows.push(TicketRow {
            complexity: ticket.complexity(),
            missing: ticket.missing_sections(),
            has_dependencies: ticket.has_dependencies_field(),
            id,
        });
    }

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!(
            "No {} tickets found in {}.",
            family.prefix(),
            config.source.display()
        );
        return Ok(());
    }

    let table = rows
        .iter()
        .map(|r| {
            let missing = if r.missing.is_empty() {
                "-".to_string()
            } else {
                r.missing
                    .iter()
                    .map(|s| s.title())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            vec![
                r.id.clone(),
                r.complexity.to_string(),
                (if r.has_dependencies { "yes" } else { "no" }).to_string(),
                missing,
            ]
        })
        .collect();
    print_table(&["ID", "COMPLEXITY", "DEPENDENCIES", "MISSING"], table);
    Ok(())
}
