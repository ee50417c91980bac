// Prompt constants and the prompt builder for email generation.

use crate::generation::tone::{Length, Tone};

/// Email generation prompt template.
/// Replace: {sender_name}, {receiver_name}, {intent}, {tone}, {tone_guidance},
///          {length_guidance}
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"You are an expert email writer. Write a professional email with the following specifications:

SENDER: {sender_name}
RECIPIENT: {receiver_name}
TOPIC: {intent}
TONE: {tone} - {tone_guidance}
LENGTH: {length_guidance}

REQUIREMENTS:
- Start with an appropriate greeting
- Clearly state the purpose in the first paragraph
- Use proper email formatting and structure
- End with a professional closing
- Ensure the email is grammatically correct and well-structured
- Make it engaging and appropriate for the specified tone

Write the email now:"#;

/// Builds the instruction prompt for one email request.
///
/// Pure and deterministic. Unknown tone/length values leave their guidance
/// segments empty without touching the rest of the skeleton; the raw tone
/// string is still restated on the TONE line.
pub fn build_prompt(
    intent: &str,
    tone: &str,
    length: &str,
    sender_name: &str,
    receiver_name: &str,
) -> String {
    EMAIL_PROMPT_TEMPLATE
        .replace("{sender_name}", sender_name)
        .replace("{receiver_name}", receiver_name)
        .replace("{intent}", intent)
        .replace("{tone}", tone)
        .replace("{tone_guidance}", Tone::parse(tone).guidance())
        .replace("{length_guidance}", Length::parse(length).guidance())
}
