//! Prompt templates and the per-variant diversification used to coax distinct
//! captions out of the same topic.

pub const CAPTION_SYSTEM: &str = include_str!("../data/prompts/caption_system.txt");
pub const CAPTION_USER: &str = include_str!("../data/prompts/caption_user.txt");

/// Style cues cycled per variant index so each post gets a different voice.
pub const STYLE_CUES: &[&str] = &[
    "upbeat and witty tone",
    "informative and value-focused tone",
    "playful with emoji",
    "urgent, limited-time offer tone",
    "community-focused, inclusive tone",
    "minimalist, sleek tone",
    "friendly conversational tone",
    "trend-savvy, Gen Z tone",
    "professional, concise tone",
    "storytelling hook in first sentence",
];

/// Angles cycled per retry attempt when a provider repeats itself.
pub const RETRY_ANGLES: &[&str] = &[
    "vary hashtags and CTA",
    "avoid repeating earlier wording",
    "use a different angle or benefit",
    "use different emoji (max 2)",
];

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Render the user prompt for variant `index`, diversified by `attempt`.
pub fn caption_prompt(topic: &str, index: usize, attempt: usize) -> String {
    let style = STYLE_CUES[index % STYLE_CUES.len()];
    let angle = RETRY_ANGLES[attempt % RETRY_ANGLES.len()];
    render(
        CAPTION_USER,
        &[("topic", topic.trim()), ("style", style), ("angle", angle)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!CAPTION_SYSTEM.is_empty());
        assert!(!CAPTION_USER.is_empty());
    }

    #[test]
    fn test_caption_user_has_placeholders() {
        assert!(CAPTION_USER.contains("{{topic}}"));
        assert!(CAPTION_USER.contains("{{style}}"));
        assert!(CAPTION_USER.contains("{{angle}}"));
    }

    #[test]
    fn test_caption_prompt_varies_by_index_and_attempt() {
        let base = caption_prompt("launch sale", 0, 0);
        assert!(base.contains("launch sale"));
        assert_ne!(base, caption_prompt("launch sale", 1, 0));
        assert_ne!(base, caption_prompt("launch sale", 0, 1));
    }

    #[test]
    fn test_caption_prompt_trims_topic() {
        let prompt = caption_prompt("  launch sale  ", 0, 0);
        assert!(prompt.contains("'launch sale'"));
    }
}
