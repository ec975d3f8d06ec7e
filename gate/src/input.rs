//! Input line classification

use crate::DEFAULT_KEYWORDS;

/// What a single line of input means to the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A completion keyword, uppercased
    Completion(String),
    /// Blank or whitespace-only line
    Empty,
    /// Free text forwarded verbatim (trimmed)
    SubPrompt(String),
}

/// Completion keywords, kept in their display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    display: Vec<String>,
}

impl Keywords {
    /// Build from display forms; blank entries are dropped, and an empty
    /// result falls back to the defaults
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let display: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if display.is_empty() {
            return Self::default();
        }
        Self { display }
    }

    /// Case-insensitive match against an already trimmed input
    pub fn matches(&self, input: &str) -> bool {
        let upper = input.to_uppercase();
        self.display.iter().any(|k| k.to_uppercase() == upper)
    }

    /// Keywords as listed in the startup banner: `'A', 'B', 'C'`
    pub fn banner_list(&self) -> String {
        self.display
            .iter()
            .map(|k| format!("'{}'", k))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.display
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            display: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Classify a raw input line (trailing newline included or not)
pub fn classify(line: &str, keywords: &Keywords) -> Input {
    let input = line.trim();

    if keywords.matches(input) {
        Input::Completion(input.to_uppercase())
    } else if input.is_empty() {
        Input::Empty
    } else {
        Input::SubPrompt(input.to_string())
    }
}
