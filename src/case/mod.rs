pub mod render;
pub mod tokenizer;
pub mod transform;

use render::{render, Join};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use transform::WordCase;

pub use tokenizer::segment;

/// Target representation of a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Camel,
    Pascal,
    Snake,
    CamelSnake,
    ScreamingSnake,
    Kebab,
    CamelKebab,
    ScreamingKebab,
    Lower,
    Title,
    Screaming,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style `{0}`")]
pub struct ParseStyleError(pub String);

impl Style {
    pub const ALL: [Style; 11] = [
        Style::Camel,
        Style::Pascal,
        Style::Snake,
        Style::CamelSnake,
        Style::ScreamingSnake,
        Style::Kebab,
        Style::CamelKebab,
        Style::ScreamingKebab,
        Style::Lower,
        Style::Title,
        Style::Screaming,
    ];

    /// Canonical name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Style::Camel => "camel",
            Style::Pascal => "pascal",
            Style::Snake => "snake",
            Style::CamelSnake => "camel-snake",
            Style::ScreamingSnake => "screaming-snake",
            Style::Kebab => "kebab",
            Style::CamelKebab => "camel-kebab",
            Style::ScreamingKebab => "screaming-kebab",
            Style::Lower => "lower",
            Style::Title => "title",
            Style::Screaming => "screaming",
        }
    }

    /// `camel snake kebab` written in this style.
    pub fn example(self) -> &'static str {
        match self {
            Style::Camel => "camelSnakeKebab",
            Style::Pascal => "CamelSnakeKebab",
            Style::Snake => "camel_snake_kebab",
            Style::CamelSnake => "Camel_Snake_Kebab",
            Style::ScreamingSnake => "CAMEL_SNAKE_KEBAB",
            Style::Kebab => "camel-snake-kebab",
            Style::CamelKebab => "Camel-Snake-Kebab",
            Style::ScreamingKebab => "CAMEL-SNAKE-KEBAB",
            Style::Lower => "camel snake kebab",
            Style::Title => "Camel Snake Kebab",
            Style::Screaming => "CAMEL SNAKE KEBAB",
        }
    }

    /// Join strategy and the casing of the first and remaining words.
    fn layout(self) -> (Join, WordCase, WordCase) {
        use WordCase::*;
        match self {
            Style::Camel => (Join::Bare, Identity, Capitalize),
            Style::Pascal => (Join::Bare, Capitalize, Capitalize),
            Style::Snake => (Join::Wrapped('_'), Identity, Identity),
            Style::CamelSnake => (Join::Wrapped('_'), Capitalize, Capitalize),
            Style::ScreamingSnake => (Join::Wrapped('_'), Scream, Scream),
            Style::Kebab => (Join::Wrapped('-'), Identity, Identity),
            Style::CamelKebab => (Join::Wrapped('-'), Capitalize, Capitalize),
            Style::ScreamingKebab => (Join::Wrapped('-'), Scream, Scream),
            Style::Lower => (Join::Spaced, Identity, Identity),
            Style::Title => (Join::Spaced, Capitalize, Capitalize),
            Style::Screaming => (Join::Spaced, Scream, Scream),
        }
    }

    /// Rewrite `input` in this style.
    pub fn convert(self, input: &str) -> String {
        let (join, first, rest) = self.layout();
        render(&segment(input), join, first, rest, input)
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `camelSnakeKebab`
pub fn camel(input: &str) -> String {
    Style::Camel.convert(input)
}

/// `CamelSnakeKebab`
pub fn pascal(input: &str) -> String {
    Style::Pascal.convert(input)
}

/// `camel_snake_kebab`, keeping leading and trailing underscores.
pub fn snake(input: &str) -> String {
    Style::Snake.convert(input)
}

/// `Camel_Snake_Kebab`, keeping leading and trailing underscores.
pub fn camel_snake(input: &str) -> String {
    Style::CamelSnake.convert(input)
}

/// `CAMEL_SNAKE_KEBAB`, keeping leading and trailing underscores.
pub fn screaming_snake(input: &str) -> String {
    Style::ScreamingSnake.convert(input)
}

/// `camel-snake-kebab`, keeping leading and trailing hyphens.
pub fn kebab(input: &str) -> String {
    Style::Kebab.convert(input)
}

/// `Camel-Snake-Kebab`, keeping leading and trailing hyphens.
pub fn camel_kebab(input: &str) -> String {
    Style::CamelKebab.convert(input)
}

/// `CAMEL-SNAKE-KEBAB`, keeping leading and trailing hyphens.
pub fn screaming_kebab(input: &str) -> String {
    Style::ScreamingKebab.convert(input)
}

/// `camel snake kebab`
pub fn lower(input: &str) -> String {
    Style::Lower.convert(input)
}

/// `Camel Snake Kebab`
pub fn title(input: &str) -> String {
    Style::Title.convert(input)
}

/// `CAMEL SNAKE KEBAB`
pub fn screaming(input: &str) -> String {
    Style::Screaming.convert(input)
}
