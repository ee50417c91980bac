//! Tone and length vocabulary — closed enums with guidance tables, shared by
//! the prompt builder and the sampling policy selector.
//!
//! Parsing is total: every input string maps to exactly one variant, with
//! `Unspecified` as the explicit default arm. An unrecognized value is not an
//! error; it contributes no guidance text and takes the default policy tier.

/// Recognized email tones. Matching is exact: clients send the lowercase
/// vocabulary; anything else is `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Formal,
    Casual,
    Professional,
    Friendly,
    Urgent,
    Apologetic,
    Enthusiastic,
    Unspecified,
}

impl Tone {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "formal" => Tone::Formal,
            "casual" => Tone::Casual,
            "professional" => Tone::Professional,
            "friendly" => Tone::Friendly,
            "urgent" => Tone::Urgent,
            "apologetic" => Tone::Apologetic,
            "enthusiastic" => Tone::Enthusiastic,
            _ => Tone::Unspecified,
        }
    }

    /// Tone-specific writing instructions injected into the prompt.
    /// `Unspecified` contributes nothing; the prompt skeleton stays intact.
    pub fn guidance(self) -> &'static str {
        match self {
            Tone::Formal => {
                "Use formal language, proper grammar, and professional vocabulary. \
                 Avoid contractions and slang."
            }
            Tone::Casual => {
                "Use conversational language, contractions, and friendly expressions. \
                 Keep it relaxed and approachable."
            }
            Tone::Professional => {
                "Use business-appropriate language with clear structure. \
                 Be respectful and courteous."
            }
            Tone::Friendly => {
                "Use warm, welcoming language with positive expressions. \
                 Show genuine interest and care."
            }
            Tone::Urgent => {
                "Use direct, action-oriented language. \
                 Emphasize time sensitivity and importance."
            }
            Tone::Apologetic => {
                "Use humble, regretful language. \
                 Acknowledge the issue and show commitment to resolution."
            }
            Tone::Enthusiastic => {
                "Use energetic, positive language with exclamation marks where appropriate. \
                 Show excitement and passion."
            }
            Tone::Unspecified => "",
        }
    }
}

/// Recognized email lengths. Unrecognized values parse to `Unspecified`,
/// which carries no guidance and the medium token budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Short,
    Medium,
    Long,
    Unspecified,
}

impl Length {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "short" => Length::Short,
            "medium" => Length::Medium,
            "long" => Length::Long,
            _ => Length::Unspecified,
        }
    }

    /// Length constraint injected into the prompt.
    pub fn guidance(self) -> &'static str {
        match self {
            Length::Short => "Keep the email concise (2-3 sentences). Get straight to the point.",
            Length::Medium => {
                "Write a balanced email (4-6 sentences). \
                 Include necessary details without being verbose."
            }
            Length::Long => {
                "Write a comprehensive email (7-10 sentences). \
                 Provide detailed explanations and context."
            }
            Length::Unspecified => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECOGNIZED_TONES: &[(&str, Tone)] = &[
        ("formal", Tone::Formal),
        ("casual", Tone::Casual),
        ("professional", Tone::Professional),
        ("friendly", Tone::Friendly),
        ("urgent", Tone::Urgent),
        ("apologetic", Tone::Apologetic),
        ("enthusiastic", Tone::Enthusiastic),
    ];

    #[test]
    fn test_every_recognized_tone_parses() {
        for (raw, expected) in RECOGNIZED_TONES {
            assert_eq!(Tone::parse(raw), *expected, "tone {raw}");
        }
    }

    #[test]
    fn test_unknown_tone_parses_to_unspecified() {
        for raw in ["sarcastic", "FORMAL", "Professional", "", " urgent "] {
            assert_eq!(Tone::parse(raw), Tone::Unspecified, "input {raw:?}");
        }
    }

    #[test]
    fn test_recognized_tones_have_nonempty_guidance() {
        for (raw, _) in RECOGNIZED_TONES {
            assert!(!Tone::parse(raw).guidance().is_empty(), "tone {raw}");
        }
    }

    #[test]
    fn test_unspecified_tone_guidance_is_empty() {
        assert_eq!(Tone::Unspecified.guidance(), "");
    }

    #[test]
    fn test_urgent_guidance_mentions_time_sensitivity() {
        assert!(Tone::Urgent.guidance().contains("time sensitivity"));
    }

    #[test]
    fn test_formal_guidance_forbids_contractions() {
        assert!(Tone::Formal.guidance().contains("Avoid contractions"));
    }

    #[test]
    fn test_every_length_parses() {
        assert_eq!(Length::parse("short"), Length::Short);
        assert_eq!(Length::parse("medium"), Length::Medium);
        assert_eq!(Length::parse("long"), Length::Long);
    }

    #[test]
    fn test_unknown_length_parses_to_unspecified() {
        for raw in ["tiny", "LONG", "", "very long"] {
            assert_eq!(Length::parse(raw), Length::Unspecified, "input {raw:?}");
        }
    }

    #[test]
    fn test_short_guidance_names_sentence_range() {
        assert!(Length::Short.guidance().contains("2-3 sentences"));
    }

    #[test]
    fn test_unspecified_length_guidance_is_empty() {
        assert_eq!(Length::Unspecified.guidance(), "");
    }
}
