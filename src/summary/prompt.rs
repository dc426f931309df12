const FRAMING: &str = "You are a helpful AI assistant analyzing personal journal entries. \
Your task is to provide insightful analysis of these journal entries.";

const DEFAULT_ANALYSIS: &str = r#"Please analyze these journal entries and provide insights about:
1. Emotional patterns and mood trends
2. Common themes or topics
3. Any notable observations
4. Gentle suggestions for reflection or improvement

Keep your response conversational, empathetic, and focused on the journal content. Format your response in a clear, readable way."#;

/// Build the inference prompt around a rendered digest.
///
/// An empty or absent `query` asks for the default four-point analysis.
pub fn build_prompt(digest: &str, query: Option<&str>) -> String {
    let mut prompt = format!(
        "{}\n\nHere's a summary of the journal data:\n{}\n\n",
        FRAMING, digest
    );

    match query.filter(|q| !q.is_empty()) {
        Some(q) => prompt.push_str(&format!(
            "The user is asking: \"{}\"\n\n\
             Please provide a thoughtful response to this question based on the journal data. \
             Be empathetic, insightful, and helpful.",
            q
        )),
        None => prompt.push_str(DEFAULT_ANALYSIS),
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "Total journal entries: 2\n";

    #[test]
    fn default_analysis_without_query() {
        let prompt = build_prompt(DIGEST, None);
        assert!(prompt.starts_with("You are a helpful AI assistant analyzing personal journal entries."));
        assert!(prompt.contains("Here's a summary of the journal data:\nTotal journal entries: 2\n"));
        assert!(prompt.contains("1. Emotional patterns and mood trends"));
        assert!(prompt.contains("4. Gentle suggestions for reflection or improvement"));
        assert!(prompt.ends_with("Format your response in a clear, readable way."));
        assert!(!prompt.contains("The user is asking"));
    }

    #[test]
    fn empty_query_counts_as_absent() {
        assert_eq!(build_prompt(DIGEST, Some("")), build_prompt(DIGEST, None));
    }

    #[test]
    fn query_replaces_default_instructions() {
        let prompt = build_prompt(DIGEST, Some("Why am I tired?"));
        assert!(prompt.contains(DIGEST));
        assert!(prompt.contains("The user is asking: \"Why am I tired?\""));
        assert!(prompt.ends_with("Be empathetic, insightful, and helpful."));
        assert!(!prompt.contains("Emotional patterns and mood trends"));
    }

    #[test]
    fn same_inputs_same_prompt() {
        assert_eq!(
            build_prompt(DIGEST, Some("how was my week?")),
            build_prompt(DIGEST, Some("how was my week?"))
        );
    }
}
