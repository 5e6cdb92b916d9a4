//! Out-of-bounds policy
//!
//! Decides what a request gets when its page starts past the end of the
//! source.

use super::types::Page;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Behavior when the requested page starts past the last element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsStrategy {
    /// Fail with [`Error::OutOfBounds`]
    #[default]
    Fail,
    /// Return the last existing page, with its own page number
    ReturnLast,
    /// Return an empty final page carrying the requested page number
    ReturnEmpty,
}

impl OutOfBoundsStrategy {
    /// Whether skipped elements of the current partial page must be kept
    pub(crate) fn keeps_trailing_page(self) -> bool {
        matches!(self, Self::ReturnLast)
    }

    /// Resolve an out-of-bounds request
    ///
    /// `available` is the total number of elements the source produced and
    /// `trailing` holds the elements of its last page, when kept.
    pub(crate) fn resolve<T>(
        self,
        page_number: usize,
        page_size: usize,
        available: usize,
        trailing: Vec<T>,
    ) -> Result<Page<T>> {
        match self {
            Self::Fail => Err(Error::out_of_bounds(page_number, page_size, available)),
            Self::ReturnEmpty => Ok(Page::new(Vec::new(), page_number, true)),
            Self::ReturnLast => {
                let last_page = available.div_ceil(page_size).max(1);
                Ok(Page::new(trailing, last_page, true))
            }
        }
    }
}

impl std::fmt::Display for OutOfBoundsStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::ReturnLast => write!(f, "return_last"),
            Self::ReturnEmpty => write!(f, "return_empty"),
        }
    }
}

impl std::str::FromStr for OutOfBoundsStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "return_last" => Ok(Self::ReturnLast),
            "return_empty" => Ok(Self::ReturnEmpty),
            other => Err(Error::config(format!(
                "Unknown out-of-bounds strategy '{other}' (expected fail, return_last or return_empty)"
            ))),
        }
    }
}
