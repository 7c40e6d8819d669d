// src/lanes/mod.rs

pub mod patterns;

pub use patterns::{LaneRules, PatternGroup, BUILTIN_RULES};

use crate::types::{Lane, LaneClassification};

/// Routes claims into lanes against a fixed table. First match wins:
/// known-false groups, then extraordinary groups, then high-impact patterns.
#[derive(Clone, Copy, Debug)]
pub struct LaneClassifier<'r> {
    rules: &'r LaneRules,
}

impl<'r> LaneClassifier<'r> {
    pub fn new(rules: &'r LaneRules) -> Self {
        Self { rules }
    }

    pub fn rules_version(&self) -> &str {
        &self.rules.version
    }

    pub fn classify(&self, text: &str) -> LaneClassification {
        let normalized = text.to_lowercase();

        if let Some(group) = first_match(&self.rules.known_false, &normalized) {
            return LaneClassification {
                lane: Lane::KnownFalse,
                category: group.category.clone(),
                confidence: 0.95,
                reason: "Matches known conspiracy pattern".to_string(),
            };
        }

        if let Some(group) = first_match(&self.rules.extraordinary, &normalized) {
            return LaneClassification {
                lane: Lane::Extraordinary,
                category: group.category.clone(),
                confidence: 0.9,
                reason: "Matches extraordinary claim pattern".to_string(),
            };
        }

        if self.rules.high_impact.iter().any(|re| re.is_match(&normalized)) {
            return LaneClassification {
                lane: Lane::HighImpact,
                category: "security_critical".to_string(),
                confidence: 0.8,
                reason: "High-impact public event detected".to_string(),
            };
        }

        LaneClassification {
            lane: Lane::Normal,
            category: "general".to_string(),
            confidence: 1.0,
            reason: "Standard claim analysis".to_string(),
        }
    }
}

impl Default for LaneClassifier<'static> {
    fn default() -> Self {
        Self::new(&BUILTIN_RULES)
    }
}

/// Classify against the built-in tables.
pub fn classify(text: &str) -> LaneClassification {
    LaneClassifier::default().classify(text)
}

fn first_match<'a>(groups: &'a [PatternGroup], text: &str) -> Option<&'a PatternGroup> {
    groups.iter().find(|group| group.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_earth_any_casing() {
        for text in [
            "The earth is flat and NASA lied",
            "THE EARTH IS FLAT",
            "the Earth Is Flat, wake up",
        ] {
            let result = classify(text);
            assert_eq!(result.lane, Lane::KnownFalse, "{}", text);
            assert_eq!(result.category, "flatEarth");
            assert_eq!(result.confidence, 0.95);
        }
    }

    #[test]
    fn test_each_conspiracy_group() {
        assert_eq!(classify("The moon landing hoax finally exposed").category, "moonLanding");
        assert_eq!(classify("Vaccines contain a microchip to track you").category, "antivax");
        assert_eq!(classify("Look up, CHEMTRAILS everywhere today").category, "chemtrails");
    }

    #[test]
    fn test_first_declared_group_wins() {
        // hits both flatEarth and chemtrails
        let result = classify("flat earth people also believe in chemtrails");
        assert_eq!(result.category, "flatEarth");
    }

    #[test]
    fn test_known_false_beats_high_impact() {
        let result = classify("NASA lied: president has been assassinated");
        assert_eq!(result.lane, Lane::KnownFalse);
    }

    #[test]
    fn test_high_impact_leaders() {
        for text in [
            "Putin was shot at a rally today",
            "The prime minister has been assassinated",
            "Country X declared war on its neighbour",
            "Military coup reported in the capital",
        ] {
            let result = classify(text);
            assert_eq!(result.lane, Lane::HighImpact, "{}", text);
            assert_eq!(result.category, "security_critical");
            assert_eq!(result.confidence, 0.8);
        }
    }

    #[test]
    fn test_normal_lane() {
        let result = classify("BREAKING!!! SHARE NOW!!! Aliens landed in Ohio!!!");
        assert_eq!(result.lane, Lane::Normal);
        assert_eq!(result.category, "general");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_custom_extraordinary_group() {
        let rules = LaneRules::builtin()
            .with_extraordinary(PatternGroup::compile("apocalypse", &[r"world\s+ends\s+tomorrow"]));
        let classifier = LaneClassifier::new(&rules);

        let result = classifier.classify("Scientists confirm the WORLD ENDS TOMORROW");
        assert_eq!(result.lane, Lane::Extraordinary);
        assert_eq!(result.category, "apocalypse");
        assert!(result.lane.is_fast());

        // known-false still takes priority
        assert_eq!(classifier.classify("flat earth: world ends tomorrow").lane, Lane::KnownFalse);
    }
}
