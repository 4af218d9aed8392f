// Word segmentation for compound phrases.
//
// Boundaries come from three sources: the delimiters `-`, `_` and ` `,
// a lowercase -> uppercase transition (`camelCase`), and the end of an
// uppercase run followed by lowercase (`XMLParser`), where the last capital
// of the run opens the next word.

/// Returns true for the characters that always separate words.
pub fn is_delimiter(ch: char) -> bool {
    matches!(ch, '-' | '_' | ' ')
}

/// A scalar is uppercase-class when uppercasing leaves it unchanged and
/// lowercasing does not. Digits, symbols and caseless letters fall on the
/// lowercase side and never open a word by themselves.
pub fn is_upper_class(ch: char) -> bool {
    let mut upper = ch.to_uppercase();
    let upper_is_self = upper.next() == Some(ch) && upper.next().is_none();
    let mut lower = ch.to_lowercase();
    let lower_is_self = lower.next() == Some(ch) && lower.next().is_none();

    upper_is_self && !lower_is_self
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    AfterDelimiter,
    InLowerRun,
    InUpperRun,
}

/// Split a phrase into lowercase words.
///
/// Never fails: an empty phrase, or one made only of delimiters, yields no
/// words. Consecutive delimiters never produce empty words.
pub fn segment(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut state = ScanState::AfterDelimiter;
    let mut start = 0;
    // byte offset of the previous scalar, needed when a capital is donated
    let mut prev = 0;

    for (i, ch) in input.char_indices() {
        if is_delimiter(ch) {
            push_word(&mut words, &input[start..i]);
            start = i + ch.len_utf8();
            state = ScanState::AfterDelimiter;
        } else if is_upper_class(ch) {
            if state == ScanState::InLowerRun {
                push_word(&mut words, &input[start..i]);
                start = i;
            }
            state = ScanState::InUpperRun;
        } else {
            if state == ScanState::InUpperRun {
                // The last capital of the run starts the next word.
                push_word(&mut words, &input[start..prev]);
                start = prev;
            }
            state = ScanState::InLowerRun;
        }
        prev = i;
    }

    push_word(&mut words, &input[start..]);
    words
}

fn push_word(words: &mut Vec<String>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    words.push(raw.chars().flat_map(char::to_lowercase).collect());
}
