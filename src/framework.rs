//! The fixed set of Lean manufacturing frameworks the assistant covers,
//! plus the menu parsing used by both presentation surfaces.

/// Application display name, shown in the console banner.
pub const APP_NAME: &str = "Next-Gen Lean AI Assistant";

/// Industry labels suggested to the user. Free text is still accepted;
/// these only seed the prompt shown by the hosts.
pub const INDUSTRY_EXAMPLES: &[&str] = &[
    "Automotive",
    "Electronics",
    "Pharmaceuticals",
    "Mining & Metals",
    "Aerospace",
    "Food Processing",
    "Textile/Apparel",
    "Medical Devices",
    "Consumer Goods",
    "Renewable Energy",
    "Biotech",
    "Construction Materials",
    "Chemicals",
    "Plastics & Composites",
    "Agriculture Equipment",
    "Defense Manufacturing",
    "Industrial Machinery",
];

/// One of the four supported Lean manufacturing methodologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    ToyotaProductionSystem,
    FordProductionSystem,
    StellantisProductionWay,
    LeanSixSigma,
}

impl Framework {
    /// All frameworks, in menu order.
    pub const ALL: [Framework; 4] = [
        Framework::ToyotaProductionSystem,
        Framework::FordProductionSystem,
        Framework::StellantisProductionWay,
        Framework::LeanSixSigma,
    ];

    /// Full label, as it appears in menus and inside prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::ToyotaProductionSystem => "Toyota Production System (TPS)",
            Self::FordProductionSystem => "Ford Production System (FPS)",
            Self::StellantisProductionWay => "Stellantis Production Way (SPW)",
            Self::LeanSixSigma => "Lean Six Sigma (LSS)",
        }
    }

    /// Short acronym, e.g. `TPS`.
    pub fn acronym(self) -> &'static str {
        match self {
            Self::ToyotaProductionSystem => "TPS",
            Self::FordProductionSystem => "FPS",
            Self::StellantisProductionWay => "SPW",
            Self::LeanSixSigma => "LSS",
        }
    }

    /// Resolve a full label or acronym, case-insensitively. Used by the
    /// web-callable entry point, whose host passes the label it displayed.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL.iter().copied().find(|fw| {
            fw.label().eq_ignore_ascii_case(wanted) || fw.acronym().eq_ignore_ascii_case(wanted)
        })
    }
}

/// A parsed framework menu choice: one concrete framework, or the
/// compare-all sentinel (menu entry 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkChoice {
    Single(Framework),
    CompareAll,
}

impl FrameworkChoice {
    /// Parse a raw menu input (`"1"`–`"5"`). Anything else is `None`.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Single(Framework::ToyotaProductionSystem)),
            "2" => Some(Self::Single(Framework::FordProductionSystem)),
            "3" => Some(Self::Single(Framework::StellantisProductionWay)),
            "4" => Some(Self::Single(Framework::LeanSixSigma)),
            "5" => Some(Self::CompareAll),
            _ => None,
        }
    }
}
