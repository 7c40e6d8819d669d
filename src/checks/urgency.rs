use regex::Regex;
use std::sync::LazyLock;

use super::{weights, RuleHit};

static URGENCY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)share\s+now|viral|urgent|before\s+it's\s+too\s+late").ok()
});

pub fn check_urgency_language(text: &str) -> Option<RuleHit> {
    let re = URGENCY.as_ref()?;
    if !re.is_match(text) {
        return None;
    }

    Some(RuleHit::new(
        "tone",
        weights::URGENCY_LANGUAGE,
        "Uses manipulative urgency language",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_phrases() {
        for text in ["SHARE NOW with everyone", "This is going viral", "Read before it's too late"] {
            let hit = check_urgency_language(text).unwrap();
            assert_eq!(hit.key, "tone");
            assert_eq!(hit.weight, -15);
        }
    }

    #[test]
    fn test_calm_text_passes() {
        assert!(check_urgency_language("The library extends its opening hours").is_none());
    }
}
