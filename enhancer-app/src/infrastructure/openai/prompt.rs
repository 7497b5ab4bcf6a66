use crate::domain::PromptInput;

/// Pure template interpolation: identical inputs always yield identical
/// output, and the three fields are embedded verbatim.
pub fn build_enhancement_prompt(input: &PromptInput) -> String {
    format!(
        r#"Based on the following inputs, create an enhanced AI prompt:

ROLE: {role}
CONTEXT: {context}
TASK: {task}

Your goal is to create a comprehensive and clear prompt that includes:
1. The role definition (expanded and clarified)
2. Relevant context (enhanced with any necessary assumptions)
3. Clear task instructions
4. Specific format for the answer
5. A requirement that the AI must clarify assumptions before responding

Make the prompt detailed but concise. Format it nicely with clear sections."#,
        role = input.role,
        context = input.context,
        task = input.task
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> PromptInput {
        PromptInput::new(
            "You are a data scientist".to_string(),
            "churn analysis project".to_string(),
            "build an analysis plan".to_string(),
        )
    }

    #[test]
    fn test_embeds_inputs_verbatim() {
        let prompt = build_enhancement_prompt(&sample_input());
        assert!(prompt.contains("ROLE: You are a data scientist"));
        assert!(prompt.contains("CONTEXT: churn analysis project"));
        assert!(prompt.contains("TASK: build an analysis plan"));
    }

    #[test]
    fn test_is_deterministic() {
        let input = sample_input();
        assert_eq!(
            build_enhancement_prompt(&input),
            build_enhancement_prompt(&input)
        );
    }

    #[test]
    fn test_lists_the_five_required_elements() {
        let prompt = build_enhancement_prompt(&sample_input());
        assert!(prompt.contains("1. The role definition"));
        assert!(prompt.contains("2. Relevant context"));
        assert!(prompt.contains("3. Clear task instructions"));
        assert!(prompt.contains("4. Specific format for the answer"));
        assert!(prompt.contains("5. A requirement that the AI must clarify assumptions"));
    }
}
