use super::TranslationDirection;

pub const PROMPT_TEMPLATE: &str =
    "Translate this from {source} to {target}:\n{source}: {text}\n{target}:";

/// Instantiates the completion prompt for one sentence.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(direction: TranslationDirection, text: &str) -> String {
    // {source}/{target}/{text} are placeholders for string replacement, not format arguments.
    // `text` is substituted last so braces in user input are left alone.
    PROMPT_TEMPLATE
        .replace("{source}", direction.source().code())
        .replace("{target}", direction.target().code())
        .replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_english_to_balinese() {
        let prompt = build_prompt(TranslationDirection::EnglishToBalinese, "Good morning");
        assert_eq!(
            prompt,
            "Translate this from en to ban:\nen: Good morning\nban:"
        );
    }

    #[test]
    fn test_build_prompt_balinese_to_english() {
        let prompt = build_prompt(TranslationDirection::BalineseToEnglish, "Rahajeng semeng");
        assert_eq!(
            prompt,
            "Translate this from ban to en:\nban: Rahajeng semeng\nen:"
        );
    }

    #[test]
    fn test_build_prompt_keeps_placeholder_like_input() {
        let prompt = build_prompt(TranslationDirection::EnglishToBalinese, "{target} {source}");
        assert!(prompt.ends_with("en: {target} {source}\nban:"));
    }

    #[test]
    fn test_prompt_template_has_placeholders() {
        assert!(PROMPT_TEMPLATE.contains("{source}"));
        assert!(PROMPT_TEMPLATE.contains("{target}"));
        assert!(PROMPT_TEMPLATE.contains("{text}"));
    }
}
