use rand::seq::SliceRandom;

/// Returned by the generator when the upstream call fails or comes back empty.
pub const FALLBACK_RESPONSES: [&str; 4] = [
    "I hear you, and I want you to know that your feelings are completely valid. Sometimes it helps to take a deep breath and remember that difficult moments are temporary.",
    "Thank you for sharing with me. It takes courage to reach out. What you're feeling is important, and you deserve support and understanding.",
    "I'm here to listen and support you. While I'm having a moment of technical difficulty, please know that whatever you're going through, you're not alone in this.",
    "Your mental health matters, and reaching out shows real strength. Take things one step at a time, and be gentle with yourself.",
];

/// Returned by the chat endpoint when the generator itself fails unexpectedly.
pub const SERVICE_ISSUE_RESPONSES: [&str; 3] = [
    "I understand you're reaching out for support. While I'm having technical difficulties, please know that your feelings are valid and you're not alone.",
    "I'm experiencing some technical issues right now, but I want you to know that seeking support shows strength. Please try again in a moment.",
    "I'm sorry, I'm having trouble responding right now. In the meantime, remember that it's okay to take things one step at a time.",
];

/// Sent with the 503 when no generator could be built at startup.
pub const UNAVAILABLE_RESPONSE: &str =
    "I'm sorry, but I'm having trouble connecting right now. Please try again later.";

/// Uniform pick over a non-empty set.
pub fn pick(responses: &[&'static str]) -> &'static str {
    responses
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(UNAVAILABLE_RESPONSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_stays_inside_the_set() {
        for _ in 0..50 {
            assert!(FALLBACK_RESPONSES.contains(&pick(&FALLBACK_RESPONSES)));
            assert!(SERVICE_ISSUE_RESPONSES.contains(&pick(&SERVICE_ISSUE_RESPONSES)));
        }
    }

    #[test]
    fn pick_from_empty_set_still_answers() {
        assert_eq!(pick(&[]), UNAVAILABLE_RESPONSE);
    }
}
