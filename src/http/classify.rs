use std::error::Error as StdError;

use crate::error::{TransportError, TransportErrorKind};

pub(crate) fn classify_error(err: &reqwest::Error) -> TransportError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if is_connection_refused(err) {
        TransportErrorKind::ConnectionRefused
    } else {
        TransportErrorKind::Other
    };
    TransportError::new(kind, error_chain(err))
}

fn is_connection_refused(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(inner) = source {
        if let Some(io_err) = inner.downcast_ref::<std::io::Error>()
            && io_err.kind() == std::io::ErrorKind::ConnectionRefused
        {
            return true;
        }
        source = inner.source();
    }
    // Some resolvers hide the io::Error behind their own type.
    err.is_connect() && error_chain(err).to_ascii_lowercase().contains("refused")
}

fn error_chain(err: &reqwest::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if parts.last().is_none_or(|last| !last.contains(&text)) {
            parts.push(text);
        }
        source = inner.source();
    }
    parts.join(": ")
}
