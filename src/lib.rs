//! Convert compound words and phrases between naming styles.
//!
//! ```
//! assert_eq!(wordcase::kebab("camel_snake_kebab"), "camel-snake-kebab");
//! assert_eq!(wordcase::screaming_snake("camelSnakeKebab"), "CAMEL_SNAKE_KEBAB");
//! assert_eq!(wordcase::pascal("XMLHttpRequest"), "XmlHttpRequest");
//! ```
//!
//! Leading and trailing separators survive only within their own family:
//! underscores within the snake styles, hyphens within the kebab styles.
//!
//! ```
//! assert_eq!(wordcase::camel_snake("__camel_snake_kebab__"), "__Camel_Snake_Kebab__");
//! assert_eq!(wordcase::kebab("__camel_snake_kebab"), "camel-snake-kebab");
//! ```

pub mod case;
pub mod cli;
pub mod config;

pub use case::{
    camel, camel_kebab, camel_snake, kebab, lower, pascal, screaming, screaming_kebab,
    screaming_snake, segment, snake, title, ParseStyleError, Style,
};
pub use config::Config;

/// One phrase and its rendering in the requested style.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

impl Conversion {
    pub fn new(style: Style, input: impl Into<String>) -> Self {
        let input = input.into();
        let output = style.convert(&input);
        Self { input, output }
    }
}
