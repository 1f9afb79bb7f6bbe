/// Word characters for boundary detection: alphanumerics and underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive substring containment, the bare-term semantics.
pub(crate) fn contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Case-insensitive phrase match requiring word boundaries at both ends.
///
/// A boundary is the start/end of the text or a transition between a word
/// character and a non-word character, never plain substring containment:
/// "eat food" matches "I eat food." but not "beat foods".
pub(crate) fn contains_phrase(text: &str, phrase: &str) -> bool {
    let text = text.to_lowercase();
    let phrase = phrase.to_lowercase();
    if phrase.is_empty() {
        return true;
    }

    // Unwraps are safe: the phrase was just checked to be non-empty.
    let first = phrase.chars().next().unwrap();
    let last = phrase.chars().next_back().unwrap();

    let mut from = 0;
    while let Some(offset) = text[from..].find(&phrase) {
        let begin = from + offset;
        let end = begin + phrase.len();

        let boundary_before = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |prev| is_word_char(prev) != is_word_char(first));
        let boundary_after = text[end..]
            .chars()
            .next()
            .map_or(true, |next| is_word_char(next) != is_word_char(last));

        if boundary_before && boundary_after {
            return true;
        }
        from = begin + first.len_utf8();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_containment_ignores_case() {
        assert!(contains_term("Guard, Keep", "guard"));
        assert!(contains_term("guard", "UAR"));
        assert!(!contains_term("guard", "watch"));
    }

    #[test]
    fn phrase_needs_boundaries_on_both_sides() {
        assert!(contains_phrase("I eat food.", "eat food"));
        assert!(contains_phrase("eat food", "eat food"));
        assert!(!contains_phrase("beat foods", "eat food"));
        assert!(!contains_phrase("eaten foodstuff", "eat food"));
    }

    #[test]
    fn phrase_match_ignores_case() {
        assert!(contains_phrase("They EAT FOOD daily", "eat food"));
    }

    #[test]
    fn later_occurrence_can_satisfy_the_boundary() {
        // First hit ("beat") fails the left boundary, second one matches.
        assert!(contains_phrase("beat it, then eat it", "eat it"));
    }

    #[test]
    fn underscore_counts_as_a_word_character() {
        assert!(!contains_phrase("pre_eat food", "eat food"));
    }
}
