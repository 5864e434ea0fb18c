use serde::{Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Complexity
// ---------------------------------------------------------------------------

/// Size label read from a ticket's `**Complexity**:` field.
///
/// Unrecognised labels are kept verbatim so they can be echoed back; they
/// behave like any non-`Small` size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Complexity {
    Small,
    #[default]
    Medium,
    Large,
    Other(String),
}

impl Complexity {
    /// Exact, case-sensitive match; `small` is not `Small`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Small" => Complexity::Small,
            "Medium" => Complexity::Medium,
            "Large" => Complexity::Large,
            other => Complexity::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Complexity::Small => "Small",
            Complexity::Medium => "Medium",
            Complexity::Large => "Large",
            Complexity::Other(s) => s,
        }
    }

    pub fn is_small(&self) -> bool {
        matches!(self, Complexity::Small)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Complexity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Prerequisites,
    StepByStep,
    VerificationChecklist,
    TestingRequirements,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Prerequisites,
            Section::StepByStep,
            Section::VerificationChecklist,
            Section::TestingRequirements,
        ]
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Prerequisites => "Prerequisites",
            Section::StepByStep => "Step-by-Step Implementation",
            Section::VerificationChecklist => "Verification Checklist",
            Section::TestingRequirements => "Testing Requirements",
        }
    }

    /// Markdown header line as it appears in ticket text.
    pub fn header(self) -> &'static str {
        match self {
            Section::Prerequisites => "### Prerequisites",
            Section::StepByStep => "### Step-by-Step Implementation",
            Section::VerificationChecklist => "### Verification Checklist",
            Section::TestingRequirements => "### Testing Requirements",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Prerequisites => "prerequisites",
            Section::StepByStep => "step_by_step",
            Section::VerificationChecklist => "verification_checklist",
            Section::TestingRequirements => "testing_requirements",
        }
    }

    pub fn is_present(self, text: &str) -> bool {
        text.contains(self.header())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
