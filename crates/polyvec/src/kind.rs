use std::fmt;

use crate::Printable;

/// Identifies which concrete type a [`TaggedVec`](crate::TaggedVec) stores.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Stores `i32` values.
    Integer,
    /// Stores `f64` values.
    FloatingPoint,
    /// No kind declared yet; appends are refused.
    #[default]
    Unset,
}

impl ElementKind {
    #[inline]
    pub fn is_unset(self) -> bool {
        self == Self::Unset
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::FloatingPoint => "floating point",
            Self::Unset => "unset",
        })
    }
}

/// A single value of one of the kinds a [`TaggedVec`](crate::TaggedVec) can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Integer(i32),
    FloatingPoint(f64),
}

impl Element {
    #[inline]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Integer(_) => ElementKind::Integer,
            Self::FloatingPoint(_) => ElementKind::FloatingPoint,
        }
    }
}

impl From<i32> for Element {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Element {
    #[inline]
    fn from(value: f64) -> Self {
        Self::FloatingPoint(value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::new();
        match self {
            Self::Integer(v) => v.fmt_line(&mut line)?,
            Self::FloatingPoint(v) => v.fmt_line(&mut line)?,
        }
        f.write_str(&line)
    }
}
