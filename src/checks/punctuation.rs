use super::{weights, RuleHit};

const EXCLAMATION_THRESHOLD: usize = 3;

pub fn check_sensational_punctuation(text: &str) -> Option<RuleHit> {
    let count = text.matches('!').count();
    if count < EXCLAMATION_THRESHOLD {
        return None;
    }

    Some(RuleHit::new(
        "punctuation",
        weights::SENSATIONAL_PUNCTUATION,
        format!("Excessive exclamation marks ({})", count),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_exclamations_trigger() {
        let hit = check_sensational_punctuation("Wow! Really! No way!").unwrap();
        assert_eq!(hit.weight, -15);
        assert_eq!(hit.reason, "Excessive exclamation marks (3)");
    }

    #[test]
    fn test_two_exclamations_pass() {
        assert!(check_sensational_punctuation("Wow! Really!").is_none());
    }
}
