use std::{fmt, io, result};

use thiserror::Error;

use crate::ElementKind;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for polyvec operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] io::Error),
    #[error(transparent)]
    Format(#[from] fmt::Error),

    // Growth errors
    #[error("Couldn't allocate {requested} more bytes")]
    Allocation { requested: usize },

    // Kind errors
    #[error("Element kind is not specified")]
    UnspecifiedKind,

    #[error("Kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
}

impl Error {
    /// Returns true if the error was caused by denied or failed growth.
    #[inline]
    pub fn is_allocation(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}
