//! Crate-level error types.

use std::fmt;

/// Errors produced by the viso-tilt crate.
#[derive(Debug)]
pub enum TiltError {
    /// No global `window` / `document` to bind against.
    NoDocument,
    /// The container selector matched no element.
    ContainerNotFound {
        /// Selector that was queried.
        selector: String,
    },
    /// The visual selector matched no element.
    VisualNotFound {
        /// Selector that was queried.
        selector: String,
    },
    /// The DOM rejected a selector as syntactically invalid.
    InvalidSelector {
        /// Selector that was queried.
        selector: String,
        /// Message reported by the DOM.
        reason: String,
    },
    /// The visual element has no inline style to mutate.
    NotHtmlElement {
        /// Selector that matched the element.
        selector: String,
    },
    /// Registering or removing an event listener failed.
    Listener(String),
    /// TOML / JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Options parsed but hold unusable values.
    InvalidOptions(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for TiltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "no document available"),
            Self::ContainerNotFound { selector } => {
                write!(f, "container not found: `{selector}`")
            }
            Self::VisualNotFound { selector } => {
                write!(f, "visual not found: `{selector}`")
            }
            Self::InvalidSelector { selector, reason } => {
                write!(f, "invalid selector `{selector}`: {reason}")
            }
            Self::NotHtmlElement { selector } => {
                write!(f, "`{selector}` is not an HTML element")
            }
            Self::Listener(msg) => write!(f, "event listener error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for TiltError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TiltError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
