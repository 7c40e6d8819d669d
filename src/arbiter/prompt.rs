use crate::types::AggregatedEvidence;

/// Build the arbiter prompt. The claim is embedded verbatim and evidence is
/// listed one item per line; the model is told evidence outranks its own
/// background knowledge.
pub fn build_prompt(claim: &str, evidence: &AggregatedEvidence) -> String {
    let evidence_block = if evidence.is_empty() {
        "(no articles were found for this claim)".to_string()
    } else {
        evidence
            .lines()
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let knowledge_rule = if evidence.is_empty() {
        "No evidence is available. Rely on your general background knowledge and state \
         explicitly in the assessment that no sources were found and the verdict is based on \
         background knowledge only."
    } else {
        "The evidence above takes precedence over your background knowledge. Cite the \
         bracketed source labels of the articles you relied on in the assessment."
    };

    format!(
        r#"You are a fact-checking arbiter. Judge the user's claim against the evidence.

User claim: "{claim}"

--- EVIDENCE START ---
{evidence_block}
--- EVIDENCE END ---

Instructions:
1. Decide whether the evidence confirms, contradicts, or does not address the claim.
2. {knowledge_rule}
3. Choose one verdict:
   - "TRUE" when the evidence supports the claim.
   - "FALSE" when the evidence contradicts the claim.
   - "MISLEADING" when the claim distorts what the evidence says.
   - "UNVERIFIED" when nothing supports or refutes it.
4. Set is_scientifically_possible to false only if the claim breaks known laws of nature.

Respond with JSON only, no prose:
{{
  "verdict": "TRUE | FALSE | MISLEADING | UNVERIFIED",
  "credibility_score": <number 0-100>,
  "assessment": "<short explanation citing sources>",
  "is_scientifically_possible": <true | false>
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EvidenceItem;

    #[test]
    fn test_prompt_embeds_claim_and_evidence() {
        let evidence = AggregatedEvidence {
            items: vec![
                EvidenceItem::new("AP", "2024-10-14", "Dam inspection passed"),
                EvidenceItem::new("NPR", "2024-10-15", "Dam reopened"),
            ],
        };

        let prompt = build_prompt("The dam will burst tonight", &evidence);

        assert!(prompt.contains("User claim: \"The dam will burst tonight\""));
        assert!(prompt.contains("1. [AP] (2024-10-14): Dam inspection passed"));
        assert!(prompt.contains("2. [NPR] (2024-10-15): Dam reopened"));
        assert!(prompt.contains("Cite the"));
    }

    #[test]
    fn test_empty_evidence_asks_for_flag() {
        let prompt = build_prompt("Some claim", &AggregatedEvidence::empty());

        assert!(prompt.contains("no articles were found"));
        assert!(prompt.contains("background knowledge only"));
    }
}
