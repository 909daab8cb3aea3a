//! Ambient key-sequence detector for the hidden organ.
//!
//! Pure logic: the DOM layer feeds it one character per keystroke and
//! acts when [`SecretSequence::push`] reports a match. Keeping it free
//! of browser types lets the host test suite drive it directly.

/// Typing this anywhere in the app unlocks the ninth organ.
pub const SECRET_WORD: &str = "injera";

/// Trailing buffer over the keystroke stream, matching case-insensitively
/// against [`SECRET_WORD`]. Holds at most as many characters as the word
/// itself; on a match the buffer clears so the word can be typed again.
#[derive(Debug, Default)]
pub struct SecretSequence {
    buf: String,
}

impl SecretSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one keystroke character. Returns true when the trailing
    /// buffer now spells the secret word.
    pub fn push(&mut self, key: char) -> bool {
        for c in key.to_lowercase() {
            self.buf.push(c);
        }
        let cap = SECRET_WORD.chars().count();
        while self.buf.chars().count() > cap {
            let lead = self.buf.chars().next().map(char::len_utf8).unwrap_or(0);
            if lead == 0 {
                break;
            }
            self.buf.drain(..lead);
        }
        if self.buf == SECRET_WORD {
            self.buf.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(seq: &mut SecretSequence, text: &str) -> usize {
        text.chars().filter(|c| seq.push(*c)).count()
    }

    #[test]
    fn exact_word_matches() {
        let mut seq = SecretSequence::new();
        assert_eq!(feed(&mut seq, "injera"), 1);
    }

    #[test]
    fn match_is_case_insensitive() {
        let mut seq = SecretSequence::new();
        assert_eq!(feed(&mut seq, "InJeRA"), 1);
    }

    #[test]
    fn word_embedded_in_noise_matches_once() {
        let mut seq = SecretSequence::new();
        assert_eq!(feed(&mut seq, "xxqinjeraqq"), 1);
    }

    #[test]
    fn interrupted_word_does_not_match() {
        let mut seq = SecretSequence::new();
        assert_eq!(feed(&mut seq, "inje ra"), 0);
    }

    #[test]
    fn buffer_clears_so_word_can_retrigger() {
        let mut seq = SecretSequence::new();
        assert_eq!(feed(&mut seq, "injerainjera"), 2);
    }

    #[test]
    fn partial_suffix_after_match_needs_full_word_again() {
        let mut seq = SecretSequence::new();
        assert_eq!(feed(&mut seq, "injera"), 1);
        // "ra" alone must not count toward a second match
        assert_eq!(feed(&mut seq, "ra"), 0);
        assert_eq!(feed(&mut seq, "injera"), 1);
    }

    #[test]
    fn non_ascii_keystrokes_flow_through_harmlessly() {
        let mut seq = SecretSequence::new();
        assert_eq!(feed(&mut seq, "汉字éinjera"), 1);
    }
}
