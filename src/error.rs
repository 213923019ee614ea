pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "no-wasm")]
impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Error {
        Error::new(ErrorKind::WsError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::ParseError(e.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Error {
        Error::new(ErrorKind::HexError(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::new(ErrorKind::StdIoError(e))
    }
}

pub enum ErrorKind {
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "no-wasm")]
    WsError(tokio_tungstenite::tungstenite::Error),
    SerdeJsonError(serde_json::Error),
    HexError(hex::FromHexError),
    StdIoError(std::io::Error),
    ParseError(String),
    /// Wallet authorization yielded zero extensions.
    NoExtensionFound,
    /// Authorization succeeded but the extension holds zero accounts.
    NoAccountsFound,
    /// The contract reported an error result for a read-only query.
    QueryFailed(String),
    /// A query succeeded but the decoded output was not the expected shape.
    UnexpectedOutputShape(String),
    /// A state-changing call failed on submission or execution.
    TransactionFailed(String),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "no-wasm")]
            ErrorKind::WsError(ref e) => write!(f, "WsError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::HexError(ref e) => write!(f, "HexError: {e:?}"),
            ErrorKind::StdIoError(ref e) => write!(f, "StdIoError: {e:?}"),
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e:?}"),
            ErrorKind::NoExtensionFound => write!(f, "NoExtensionFound"),
            ErrorKind::NoAccountsFound => write!(f, "NoAccountsFound"),
            ErrorKind::QueryFailed(ref e) => write!(f, "QueryFailed: {e:?}"),
            ErrorKind::UnexpectedOutputShape(ref e) => write!(f, "UnexpectedOutputShape: {e:?}"),
            ErrorKind::TransactionFailed(ref e) => write!(f, "TransactionFailed: {e:?}"),
        }
    }
}

// Display is what reaches the user: the workflow layer flattens errors to
// strings, so every kind must render a non-empty, distinguishable message.
impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "Network error: {e}"),
            #[cfg(feature = "no-wasm")]
            ErrorKind::WsError(ref e) => write!(f, "WebSocket error: {e}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "Decode error: {e}"),
            ErrorKind::HexError(ref e) => write!(f, "Hex error: {e}"),
            ErrorKind::StdIoError(ref e) => write!(f, "IO error: {e}"),
            ErrorKind::ParseError(ref e) => write!(f, "Parse error: {e}"),
            ErrorKind::NoExtensionFound => write!(f, "No extension found"),
            ErrorKind::NoAccountsFound => write!(f, "No accounts found"),
            ErrorKind::QueryFailed(ref e) => write!(f, "{e}"),
            ErrorKind::UnexpectedOutputShape(ref e) => write!(f, "{e}"),
            ErrorKind::TransactionFailed(ref e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages_are_distinct_and_non_empty() {
        let kinds = [
            ErrorKind::NoExtensionFound,
            ErrorKind::NoAccountsFound,
            ErrorKind::QueryFailed("Failed to load courses".to_string()),
            ErrorKind::UnexpectedOutputShape("Unexpected output format".to_string()),
            ErrorKind::TransactionFailed(
                "Failed to enroll in course. Please try again.".to_string(),
            ),
            ErrorKind::ParseError("bad selector".to_string()),
        ];

        let messages: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
        for (i, msg) in messages.iter().enumerate() {
            assert!(!msg.is_empty());
            for other in &messages[i + 1..] {
                assert_ne!(msg, other);
            }
        }
    }

    #[test]
    fn wallet_failures_render_the_exact_ui_strings() {
        assert_eq!(ErrorKind::NoExtensionFound.to_string(), "No extension found");
        assert_eq!(ErrorKind::NoAccountsFound.to_string(), "No accounts found");
    }

    #[test]
    fn error_wraps_kind_in_display_and_debug() {
        let err = Error::new(ErrorKind::QueryFailed("Failed to load courses".to_string()));
        assert_eq!(err.to_string(), "Failed to load courses");
        assert!(format!("{err:?}").contains("QueryFailed"));
    }
}
