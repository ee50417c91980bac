//! Sampling policy selection — maps (tone, length) to generation parameters.
//!
//! Total over the closed enums: every pair yields a policy, no error paths.

use crate::engine::SamplingPolicy;
use crate::generation::tone::{Length, Tone};

/// Expressive tones sample hotter, reserved tones colder.
const TEMP_EXPRESSIVE: f32 = 0.8;
const TEMP_RESERVED: f32 = 0.6;
const TEMP_DEFAULT: f32 = 0.7;

const MAX_TOKENS_SHORT: u32 = 150;
const MAX_TOKENS_MEDIUM: u32 = 300;
const MAX_TOKENS_LONG: u32 = 500;

pub fn select_policy(tone: Tone, length: Length) -> SamplingPolicy {
    let temperature = match tone {
        Tone::Casual | Tone::Enthusiastic => TEMP_EXPRESSIVE,
        Tone::Formal | Tone::Professional => TEMP_RESERVED,
        Tone::Friendly | Tone::Urgent | Tone::Apologetic | Tone::Unspecified => TEMP_DEFAULT,
    };

    let max_tokens = match length {
        Length::Short => MAX_TOKENS_SHORT,
        Length::Medium | Length::Unspecified => MAX_TOKENS_MEDIUM,
        Length::Long => MAX_TOKENS_LONG,
    };

    SamplingPolicy {
        temperature,
        top_p: 0.9,
        top_k: 50,
        max_tokens,
        repetition_penalty: 1.1,
        presence_penalty: 0.1,
        frequency_penalty: 0.1,
    }
}
