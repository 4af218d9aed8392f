/// How a single word is cased before it is joined.
///
/// Words arrive lowercase from the tokenizer; every transform returns a new
/// `String` and leaves the input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    Identity,
    Capitalize,
    Scream,
}

impl WordCase {
    pub fn apply(self, word: &str) -> String {
        match self {
            WordCase::Identity => word.to_string(),
            WordCase::Capitalize => capitalize(word),
            WordCase::Scream => word.chars().flat_map(char::to_uppercase).collect(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
