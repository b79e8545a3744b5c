use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    // -- Config
    ConfigMissingEnv(&'static str),
    ConfigWrongFormat(&'static str),
    Io(std::io::Error),

    // -- Webhooks
    RequestFailed(reqwest::Error),
    Status(reqwest::StatusCode),
    EmptyResponse,
    Json(serde_json::Error),
    Timeout { service: &'static str, secs: u64 },
    NotAcknowledged,
}

// region:    ---From

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::RequestFailed(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(value)
    }
}

// endregion: ---From

// region:    --- Error boilerplate
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Status(code) => write!(f, "Webhook answered with HTTP {code}"),
            Error::EmptyResponse => write!(f, "No response data."),
            Error::NotAcknowledged => write!(f, "Server did not return a Project ID."),
            Error::Timeout { service, secs } => {
                write!(f, "{service} did not answer within {secs}s")
            }
            _ => write!(f, "{:?}", self),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error boilerplate
