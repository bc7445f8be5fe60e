//! UUID errors

/// The error type for UUID parsing and conversion
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    message: String,
}

impl Error {
    pub(crate) fn new(
        kind: ErrorKind,
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
        message: String,
    ) -> Self {
        Error { kind, source, message }
    }

    pub(crate) fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error::new(kind, None, message.into())
    }

    /// Returns the corresponding [ErrorKind] for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message for this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.message.is_empty(), &self.source) {
            (true, None) => write!(f, "{}", &self.kind),
            (false, None) => write!(f, "{}: {}", &self.kind, &self.message),
            (true, Some(err)) => write!(f, "{}: {}", &self.kind, err),
            (false, Some(err)) => write!(f, "{}: {} ({})", &self.kind, &self.message, err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|x| {
            let x: &(dyn std::error::Error + 'static) = &**x;
            x
        })
    }
}

/// A list of general categories of UUID error.
#[non_exhaustive]
#[derive(Debug, displaydoc::Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// malformed UUID string
    MalformedInput,
    /// invalid parameter
    InvalidParameter,
    /// UUID is not derived from the Bluetooth base UUID
    NotRepresentable,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind,
            source: None,
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = Error::with_message(ErrorKind::MalformedInput, "expected '-' at offset 8");
        assert_eq!(err.to_string(), "malformed UUID string: expected '-' at offset 8");
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(err.message(), "expected '-' at offset 8");
    }

    #[test]
    fn display_kind_only() {
        let err = Error::from(ErrorKind::NotRepresentable);
        assert_eq!(err.to_string(), "UUID is not derived from the Bluetooth base UUID");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn source_is_exposed() {
        let inner: Result<[u8; 16], _> = <[u8; 16]>::try_from(&[0u8; 3][..]);
        let inner = inner.unwrap_err();
        let err = Error::new(ErrorKind::InvalidParameter, Some(Box::new(inner)), String::new());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid parameter: "));
    }
}
