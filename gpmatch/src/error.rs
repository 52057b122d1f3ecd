//! Common error type.

use crate::assignment::Error as AssignmentError;
use core::fmt::{self, Display};

/// Common error type.
///
/// All errors signal a caller that does not respect the matching protocol,
/// such as reading a variable at the wrong type or
/// removing mappings that were never added.
/// A failed match is not an error.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Assignment(AssignmentError),
}

impl From<AssignmentError> for Error {
    fn from(err: AssignmentError) -> Self {
        Self::Assignment(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Assignment(e) => e.fmt(f),
        }
    }
}
