//! Transcript normalization.

use recipe_chat_model::{Role, Turn};

/// The chronological list of turns of one conversation.
pub type Transcript = Vec<Turn>;

/// Returns `true` if the first turn of `transcript` is a `system` turn.
#[inline]
pub fn starts_with_system(transcript: &[Turn]) -> bool {
    transcript
        .first()
        .is_some_and(|turn| turn.role() == Role::System)
}

/// Returns a copy of `transcript` that is guaranteed to start with a
/// `system` turn.
///
/// If the transcript is empty or doesn't start with a `system` turn, a new
/// one holding `instruction` is prepended. An existing leading `system`
/// turn is kept as is, whatever its content.
///
/// The returned vector has room for one more turn.
pub fn normalize(transcript: &[Turn], instruction: &str) -> Transcript {
    let mut normalized = Vec::with_capacity(transcript.len() + 2);
    if !starts_with_system(transcript) {
        normalized.push(Turn::system(instruction));
    }
    normalized.extend_from_slice(transcript);
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_on_empty() {
        let normalized = normalize(&[], "Be a chef.");
        assert_eq!(normalized, vec![Turn::system("Be a chef.")]);
    }

    #[test]
    fn test_prepend_before_user_turns() {
        let transcript = vec![Turn::user("Hi"), Turn::assistant("Hello")];
        let normalized = normalize(&transcript, "Be a chef.");
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0], Turn::system("Be a chef."));
        assert_eq!(&normalized[1..], transcript.as_slice());
    }

    #[test]
    fn test_system_not_first_is_prepended() {
        let transcript = vec![Turn::user("Hi"), Turn::system("X")];
        let normalized = normalize(&transcript, "Be a chef.");
        assert_eq!(normalized[0], Turn::system("Be a chef."));
        assert_eq!(normalized.len(), 3);
    }

    #[test]
    fn test_existing_system_is_kept() {
        let transcript = vec![Turn::system("X"), Turn::user("Hi")];
        let normalized = normalize(&transcript, "Be a chef.");
        assert_eq!(normalized, transcript);
    }

    #[test]
    fn test_idempotent() {
        let once = normalize(&[Turn::user("Hi")], "Be a chef.");
        let twice = normalize(&once, "Be a chef.");
        assert_eq!(once, twice);
        assert!(starts_with_system(&twice));
        assert!(!starts_with_system(&[]));
    }
}
