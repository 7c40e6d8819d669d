use regex::Regex;
use std::sync::LazyLock;
use tracing::error;

pub const RULES_VERSION: &str = "lanes-2024.1";

/// Conspiracy topics, in evaluation order. The first group with a hit names the category.
pub const KNOWN_FALSE_GROUPS: &[(&str, &[&str])] = &[
    (
        "flatEarth",
        &[
            r"earth\s+is\s+(flat|disc|not\s+round|not\s+a\s+sphere)",
            r"flat\s+earth",
            r"nasa\s+(lies|lied|fake|hoax)",
            r"ice\s+wall",
        ],
    ),
    (
        "moonLanding",
        &[
            r"moon\s+landing\s+(fake|hoax|staged|filmed)",
            r"never\s+went\s+to\s+(the\s+)?moon",
            r"moon\s+landing.*hollywood",
        ],
    ),
    (
        "antivax",
        &[
            r"vaccines?.*(microchip|tracker|magnet|dna|poison|bioweapon)",
            r"depopulation\s+agenda",
        ],
    ),
    ("chemtrails", &[r"chemtrails?", r"geoengineering.*spray"]),
];

pub const HIGH_IMPACT_PATTERNS: &[&str] = &[
    // titles and generic roles
    r"(president|prime\s+minister|leader|pm)\s+(has\s+been\s+)?(assassinated|killed|murdered|shot\s+dead)",
    r"assassination\s+of",
    // named world leaders with a harm verb
    r"(narendra\s+modi|modi|biden|trump|putin|xi\s+jinping|zelensky).*(assassinated|killed|murdered|shot|dead)",
    r"assassinated\s+by",
    r"has\s+been\s+assassinated",
    // other security-critical events
    r"declared\s+war",
    r"terror.*attack",
    r"nuclear.*(launch|strike|war)",
    r"military\s+coup",
    r"state\s+of\s+emergency",
];

/// A named set of compiled patterns; any single match selects the group.
#[derive(Clone, Debug)]
pub struct PatternGroup {
    pub category: String,
    pub patterns: Vec<Regex>,
}

impl PatternGroup {
    pub fn compile(category: &str, sources: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            patterns: compile_all(sources),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

/// Immutable routing tables. Built once and shared read-only.
#[derive(Clone, Debug)]
pub struct LaneRules {
    pub version: String,
    pub known_false: Vec<PatternGroup>,
    pub extraordinary: Vec<PatternGroup>,
    pub high_impact: Vec<Regex>,
}

impl LaneRules {
    pub fn builtin() -> Self {
        Self {
            version: RULES_VERSION.to_string(),
            known_false: KNOWN_FALSE_GROUPS
                .iter()
                .map(|(category, sources)| PatternGroup::compile(category, sources))
                .collect(),
            extraordinary: Vec::new(),
            high_impact: compile_all(HIGH_IMPACT_PATTERNS),
        }
    }

    pub fn with_extraordinary(mut self, group: PatternGroup) -> Self {
        self.extraordinary.push(group);
        self
    }
}

pub static BUILTIN_RULES: LazyLock<LaneRules> = LazyLock::new(LaneRules::builtin);

fn compile_all(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .filter_map(|src| match Regex::new(&format!("(?i){}", src)) {
            Ok(re) => Some(re),
            Err(e) => {
                error!("Skipping invalid lane pattern {:?}: {}", src, e);
                None
            }
        })
        .collect()
}
