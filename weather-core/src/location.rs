use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// City, state and country codes are purely alphabetic (ISO3166 style).
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[A-Za-z]*$").unwrap());

const MAX_TOKENS: usize = 3;
const DEFAULT_COUNTRY: &str = "US";

/// A validated "City [STATE [COUNTRY]]" location.
///
/// Constructed once per run from user input and consumed to build the API
/// query; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    tokens: Vec<String>,
}

impl Location {
    /// Validate raw user input and normalize it into query tokens.
    ///
    /// Input is split on whitespace into 1–3 alphabetic tokens. A two-token
    /// "City STATE" input gets "US" appended as the country.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut tokens: Vec<String> = input.split_whitespace().map(str::to_owned).collect();

        if tokens.is_empty() {
            return Err(Error::EmptyLocation);
        }
        if tokens.len() > MAX_TOKENS {
            return Err(Error::TooManyTokens);
        }
        if tokens.iter().any(|token| !TOKEN_RE.is_match(token)) {
            return Err(Error::InvalidToken(input.trim().to_owned()));
        }

        if tokens.len() == 2 {
            tokens.push(DEFAULT_COUNTRY.to_owned());
        }

        Ok(Self { tokens })
    }

    /// First token, used to head the printed report.
    pub fn display_name(&self) -> &str {
        &self.tokens[0]
    }

    /// Comma-joined form expected by the API's `q` parameter.
    pub fn query(&self) -> String {
        self.tokens.join(",")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
