use crate::types::{Complexity, Section};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Boilerplate blocks
// ---------------------------------------------------------------------------

const PREREQUISITES: &[&str] = &[
    "- Previous tickets completed as listed in Dependencies",
    "- Python 3.11+ installed and virtual environment activated",
    "- All required packages from requirements/base.txt installed",
    "- PostgreSQL and Redis running (if applicable)",
];

const STEP_BY_STEP: &[&str] = &[
    "1. Review the Implementation Details section above",
    "2. Create or modify files as specified",
    "3. Add all necessary imports",
    "4. Implement the code following the examples",
    "5. Run tests to verify functionality",
    "6. Check the Verification Checklist",
];

const VERIFICATION_CHECKLIST: &[&str] = &[
    "- [ ] All files created/modified as specified",
    "- [ ] Code runs without syntax errors",
    "- [ ] All tests pass",
    "- [ ] No import errors",
    "- [ ] Follows project code style",
    "- [ ] Documentation strings added",
    "- [ ] No hardcoded values (use settings/config)",
];

const DEPENDENCIES_FIELD: &str = "**Dependencies**:";

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// Where a boilerplate block is spliced into ticket text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Just past the newline ending the first `**Dependencies**:` line.
    AfterDependenciesLine,
    /// Directly in front of the first `### Testing Requirements`.
    BeforeTestingRequirements,
    End,
}

impl Anchor {
    fn locate(self, text: &str) -> Option<usize> {
        match self {
            Anchor::AfterDependenciesLine => {
                let field = text.find(DEPENDENCIES_FIELD)?;
                let from = field + DEPENDENCIES_FIELD.len();
                text[from..].find('\n').map(|nl| from + nl + 1)
            }
            Anchor::BeforeTestingRequirements => {
                text.find(Section::TestingRequirements.header())
            }
            Anchor::End => Some(text.len()),
        }
    }
}

pub struct SectionRule {
    pub section: Section,
    pub anchor: Anchor,
    pub lines: &'static [&'static str],
    pub applies: fn(&Complexity) -> bool,
}

fn always(_: &Complexity) -> bool {
    true
}

fn not_small(c: &Complexity) -> bool {
    !c.is_small()
}

/// Insertion rules in the order they are applied.
pub const RULES: &[SectionRule] = &[
    SectionRule {
        section: Section::Prerequisites,
        anchor: Anchor::AfterDependenciesLine,
        lines: PREREQUISITES,
        applies: always,
    },
    SectionRule {
        section: Section::StepByStep,
        anchor: Anchor::BeforeTestingRequirements,
        lines: STEP_BY_STEP,
        applies: not_small,
    },
    SectionRule {
        section: Section::VerificationChecklist,
        anchor: Anchor::End,
        lines: VERIFICATION_CHECKLIST,
        applies: always,
    },
];

// ---------------------------------------------------------------------------
// Applying rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Insertion {
    Inserted,
    AlreadyPresent,
    /// The rule is gated off for this complexity.
    NotApplicable,
    /// No anchor in the text; the text is returned unchanged.
    AnchorMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub section: Section,
    pub insertion: Insertion,
}

impl SectionRule {
    /// The block spliced in when the section is missing.
    pub fn block(&self) -> String {
        let mut block = format!("\n{}\n\n", self.section.header());
        for line in self.lines {
            block.push_str(line);
            block.push('\n');
        }
        block.push('\n');
        block
    }

    pub fn apply(&self, text: &str, complexity: &Complexity) -> (String, Insertion) {
        if self.section.is_present(text) {
            return (text.to_string(), Insertion::AlreadyPresent);
        }
        if !(self.applies)(complexity) {
            return (text.to_string(), Insertion::NotApplicable);
        }
        let Some(at) = self.anchor.locate(text) else {
            return (text.to_string(), Insertion::AnchorMissing);
        };
        let block = self.block();
        let mut out = String::with_capacity(text.len() + block.len());
        out.push_str(&text[..at]);
        out.push_str(&block);
        out.push_str(&text[at..]);
        (out, Insertion::Inserted)
    }
}

/// Run every insertion rule in order.
pub fn apply_all(text: &str, complexity: &Complexity) -> (String, Vec<RuleOutcome>) {
    let mut current = text.to_string();
    let mut outcomes = Vec::with_capacity(RULES.len());
    for rule in RULES {
        let (next, insertion) = rule.apply(&current, complexity);
        current = next;
        outcomes.push(RuleOutcome {
            section: rule.section,
            insertion,
        });
    }
    (current, outcomes)
}

pub fn add_prerequisites(text: &str) -> String {
    RULES[0].apply(text, &Complexity::default()).0
}

pub fn add_step_by_step(text: &str, complexity: &Complexity) -> String {
    RULES[1].apply(text, complexity).0
}

pub fn add_verification_checklist(text: &str) -> String {
    RULES[2].apply(text, &Complexity::default()).0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TICKET: &str = "## BUXMAX-002: Crawler\n\
**Complexity**: Large\n\
**Dependencies**: BUXMAX-001\n\
**Estimate**: 3d\n\n\
### Implementation Details\n\ncode\n\n\
### Testing Requirements\n\n- unit tests\n";

    fn count(text: &str, needle: &str) -> usize {
        text.matches(needle).count()
    }

    #[test]
    fn prerequisites_follow_dependencies_line() {
        let out = add_prerequisites(TICKET);
        assert!(out.contains(
            "**Dependencies**: BUXMAX-001\n\n### Prerequisites\n\n- Previous tickets completed as listed in Dependencies\n"
        ));
        assert!(out.contains("- PostgreSQL and Redis running (if applicable)\n\n**Estimate**: 3d"));
        assert_eq!(count(&out, "### Prerequisites"), 1);
    }

    #[test]
    fn prerequisites_skipped_without_dependencies_line() {
        let text = "## BUXMAX-004: x\nno deps here\n";
        assert_eq!(add_prerequisites(text), text);
        assert_eq!(
            RULES[0].apply(text, &Complexity::Medium).1,
            Insertion::AnchorMissing
        );
    }

    #[test]
    fn prerequisites_need_a_line_ending() {
        let text = "## BUXMAX-004: x\n**Dependencies**: None";
        assert_eq!(add_prerequisites(text), text);
    }

    #[test]
    fn prerequisites_use_first_dependencies_line() {
        let text = "**Dependencies**: A\n**Dependencies**: B\n";
        let out = add_prerequisites(text);
        assert!(out.starts_with("**Dependencies**: A\n\n### Prerequisites"));
        assert!(out.ends_with("\n**Dependencies**: B\n"));
    }

    #[test]
    fn step_by_step_precedes_testing_requirements() {
        let out = add_step_by_step(TICKET, &Complexity::Large);
        assert!(out.contains(
            "6. Check the Verification Checklist\n\n### Testing Requirements"
        ));
        assert!(out.contains("code\n\n\n### Step-by-Step Implementation\n\n1. Review"));
        assert_eq!(count(&out, "### Step-by-Step Implementation"), 1);
    }

    #[test]
    fn small_tickets_never_get_steps() {
        assert_eq!(add_step_by_step(TICKET, &Complexity::Small), TICKET);
        let (out, outcomes) = apply_all(TICKET, &Complexity::Small);
        assert!(!out.contains("### Step-by-Step Implementation"));
        assert_eq!(outcomes[1].insertion, Insertion::NotApplicable);
    }

    #[test]
    fn unknown_labels_get_steps() {
        let out = add_step_by_step(TICKET, &Complexity::Other("small".into()));
        assert!(out.contains("### Step-by-Step Implementation"));
    }

    #[test]
    fn step_by_step_skipped_without_testing_header() {
        let text = "## BUXMAX-005: x\n**Complexity**: Large\n";
        assert_eq!(add_step_by_step(text, &Complexity::Large), text);
    }

    #[test]
    fn checklist_appended_at_end() {
        let out = add_verification_checklist(TICKET);
        assert!(out.starts_with(TICKET));
        assert!(out.ends_with(
            "- unit tests\n\n### Verification Checklist\n\n- [ ] All files created/modified as specified\n- [ ] Code runs without syntax errors\n- [ ] All tests pass\n- [ ] No import errors\n- [ ] Follows project code style\n- [ ] Documentation strings added\n- [ ] No hardcoded values (use settings/config)\n\n"
        ));
    }

    #[test]
    fn rules_are_idempotent() {
        for complexity in [Complexity::Small, Complexity::Medium, Complexity::Large] {
            let (once, _) = apply_all(TICKET, &complexity);
            let (twice, outcomes) = apply_all(&once, &complexity);
            assert_eq!(once, twice);
            assert!(outcomes
                .iter()
                .all(|o| matches!(o.insertion, Insertion::AlreadyPresent | Insertion::NotApplicable)));
        }
    }

    #[test]
    fn existing_sections_are_left_alone() {
        let text = format!("{TICKET}\n### Verification Checklist\n\n- [ ] custom\n");
        assert_eq!(add_verification_checklist(&text), text);
    }

    #[test]
    fn apply_all_reports_each_rule_in_order() {
        let (out, outcomes) = apply_all(TICKET, &Complexity::Large);
        let sections: Vec<_> = outcomes.iter().map(|o| o.section).collect();
        assert_eq!(
            sections,
            vec![
                Section::Prerequisites,
                Section::StepByStep,
                Section::VerificationChecklist
            ]
        );
        assert!(outcomes.iter().all(|o| o.insertion == Insertion::Inserted));
        let pre = out.find("### Prerequisites").unwrap();
        let steps = out.find("### Step-by-Step Implementation").unwrap();
        let testing = out.find("### Testing Requirements").unwrap();
        let verify = out.find("### Verification Checklist").unwrap();
        assert!(pre < steps && steps < testing && testing < verify);
    }

    #[test]
    fn boilerplate_sizes() {
        let sizes: Vec<_> = RULES.iter().map(|r| r.lines.len()).collect();
        assert_eq!(sizes, vec![4, 6, 7]);
    }
}
