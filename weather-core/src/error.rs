use thiserror::Error;

/// Everything that can go wrong between reading the flags and printing the
/// temperature. Variants carry the exact user-facing wording.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key missing! Either fill out a .env file or use -k with your key")]
    MissingApiKey,

    #[error("A location is required.")]
    EmptyLocation,

    #[error("The location provided has too many items")]
    TooManyTokens,

    #[error("{0} is not a valid location.")]
    InvalidToken(String),

    #[error("Could not find any location for {0}")]
    LocationNotFound(String),

    #[error("An unknown error has occurred with the OpenWeather API: {0}")]
    Upstream(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse the OpenWeather response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// True for the location failures that should also surface the CLI help text.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyLocation | Error::TooManyTokens | Error::InvalidToken(_)
        )
    }

    /// Process exit status for this error.
    ///
    /// Not-found and upstream failures are reported but do not fail the run.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingApiKey
            | Error::EmptyLocation
            | Error::TooManyTokens
            | Error::InvalidToken(_) => 1,
            Error::LocationNotFound(_) | Error::Upstream(_) => 0,
            Error::Http(_) | Error::Parse(_) => 1,
        }
    }
}
