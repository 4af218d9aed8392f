use super::transform::WordCase;

/// How transformed words are put back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// No separator: `camelSnakeKebab`.
    Bare,
    /// A single space, never padded: `camel snake kebab`.
    Spaced,
    /// The family delimiter between words, plus the leading and trailing
    /// runs of that delimiter found in the original phrase.
    Wrapped(char),
}

/// Length of the runs of one delimiter at the very start and end of a phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub head: usize,
    pub tail: usize,
}

impl Padding {
    /// Count `delimiter` at both ends of `input`. Any other character,
    /// including the other delimiters, ends a run.
    ///
    /// A phrase made only of `delimiter` is a single run, counted as head.
    pub fn measure(input: &str, delimiter: char) -> Self {
        let head = input.chars().take_while(|&c| c == delimiter).count();
        if head == input.chars().count() {
            return Self { head, tail: 0 };
        }
        let tail = input.chars().rev().take_while(|&c| c == delimiter).count();
        Self { head, tail }
    }
}

/// Render words with `first` applied to word 0 and `rest` to the others.
///
/// `input` is the raw phrase, used only for `Join::Wrapped` padding.
pub fn render(
    words: &[String],
    join: Join,
    first: WordCase,
    rest: WordCase,
    input: &str,
) -> String {
    let cased = words.iter().enumerate().map(|(i, word)| {
        if i == 0 {
            first.apply(word)
        } else {
            rest.apply(word)
        }
    });

    match join {
        Join::Bare => cased.collect(),
        Join::Spaced => cased.collect::<Vec<_>>().join(" "),
        Join::Wrapped(delimiter) => {
            let padding = Padding::measure(input, delimiter);
            let mut buf = [0; 4];
            let body = cased.collect::<Vec<_>>().join(delimiter.encode_utf8(&mut buf));

            let mut out = String::with_capacity(body.len() + padding.head + padding.tail);
            out.extend(std::iter::repeat(delimiter).take(padding.head));
            out.push_str(&body);
            out.extend(std::iter::repeat(delimiter).take(padding.tail));
            out
        }
    }
}
