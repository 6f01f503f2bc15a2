use std::{fmt, iter::FusedIterator, slice};

use crate::{
    AllocPolicy, Element, ElementKind, Error, PolyVec, PrintableVec, Result, Unbounded, VecOptions,
};

#[derive(Debug)]
enum Storage<P>
where
    P: AllocPolicy,
{
    Unset,
    Integer(PolyVec<i32, P>),
    FloatingPoint(PolyVec<f64, P>),
}

impl<P> Storage<P>
where
    P: AllocPolicy,
{
    fn new(kind: ElementKind, options: VecOptions, policy: P) -> Self {
        match kind {
            ElementKind::Integer => Self::Integer(PolyVec::with_policy(options, policy)),
            ElementKind::FloatingPoint => Self::FloatingPoint(PolyVec::with_policy(options, policy)),
            ElementKind::Unset => Self::Unset,
        }
    }

    fn kind(&self) -> ElementKind {
        match self {
            Self::Unset => ElementKind::Unset,
            Self::Integer(_) => ElementKind::Integer,
            Self::FloatingPoint(_) => ElementKind::FloatingPoint,
        }
    }
}

/// Vector holding either integers or floating point values behind one non-generic handle.
///
/// The element kind is chosen at construction and only changes through
/// [`reinitialize`](TaggedVec::reinitialize). Each kind owns its own typed
/// [`PolyVec`], so values are never reinterpreted as another kind: appending a value
/// of the wrong kind is an error, as is appending while the kind is [`ElementKind::Unset`].
#[derive(Debug)]
#[must_use = "Vector should be stored to keep its values"]
pub struct TaggedVec<P = Unbounded>
where
    P: AllocPolicy + Clone,
{
    storage: Storage<P>,
    options: VecOptions,
    policy: P,
}

impl<P> TaggedVec<P>
where
    P: AllocPolicy + Clone,
{
    pub fn new(kind: ElementKind) -> Self
    where
        P: Default,
    {
        Self::with_options(kind, VecOptions::default())
    }

    pub fn with_options(kind: ElementKind, options: VecOptions) -> Self
    where
        P: Default,
    {
        Self::with_policy(kind, options, P::default())
    }

    pub fn with_policy(kind: ElementKind, options: VecOptions, policy: P) -> Self {
        Self {
            storage: Storage::new(kind, options, policy.clone()),
            options,
            policy,
        }
    }

    /// Drops the current storage and starts over, empty, with `kind`.
    pub fn reinitialize(&mut self, kind: ElementKind) {
        self.storage = Storage::new(kind, self.options, self.policy.clone());
    }

    /// Appends `value` at the end.
    ///
    /// Fails without touching the vector if the kind is unset, if `value` is of
    /// another kind, or if storage can't grow.
    pub fn append(&mut self, value: impl Into<Element>) -> Result<()> {
        match (&mut self.storage, value.into()) {
            (Storage::Integer(vec), Element::Integer(v)) => vec.push(v),
            (Storage::FloatingPoint(vec), Element::FloatingPoint(v)) => vec.push(v),
            (Storage::Unset, _) => Err(Error::UnspecifiedKind),
            (storage, element) => Err(Error::KindMismatch {
                expected: storage.kind(),
                found: element.kind(),
            }),
        }
    }

    /// Releases storage and resets the length to zero, keeping the kind.
    pub fn clear(&mut self) {
        match &mut self.storage {
            Storage::Unset => {}
            Storage::Integer(vec) => vec.clear(),
            Storage::FloatingPoint(vec) => vec.clear(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.storage.kind()
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Unset => 0,
            Storage::Integer(vec) => vec.len(),
            Storage::FloatingPoint(vec) => vec.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Unset => 0,
            Storage::Integer(vec) => vec.capacity(),
            Storage::FloatingPoint(vec) => vec.capacity(),
        }
    }

    /// Returns the stored integers, or `None` if the kind isn't [`ElementKind::Integer`].
    pub fn as_integers(&self) -> Option<&[i32]> {
        match &self.storage {
            Storage::Integer(vec) => Some(vec.as_slice()),
            _ => None,
        }
    }

    /// Returns the stored floats, or `None` if the kind isn't [`ElementKind::FloatingPoint`].
    pub fn as_floats(&self) -> Option<&[f64]> {
        match &self.storage {
            Storage::FloatingPoint(vec) => Some(vec.as_slice()),
            _ => None,
        }
    }

    pub fn iter(&self) -> ElementIter<'_> {
        match &self.storage {
            Storage::Unset => ElementIter::Empty,
            Storage::Integer(vec) => ElementIter::Integer(vec.iter()),
            Storage::FloatingPoint(vec) => ElementIter::FloatingPoint(vec.iter()),
        }
    }

    #[inline]
    pub fn options(&self) -> &VecOptions {
        &self.options
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P> Default for TaggedVec<P>
where
    P: AllocPolicy + Clone + Default,
{
    fn default() -> Self {
        Self::new(ElementKind::Unset)
    }
}

impl<P> PrintableVec for TaggedVec<P>
where
    P: AllocPolicy + Clone,
{
    #[inline]
    fn has_printable(&self) -> bool {
        !self.kind().is_unset() && !self.is_empty()
    }

    fn fmt_lines(&self, out: &mut String) -> fmt::Result {
        match &self.storage {
            Storage::Unset => Ok(()),
            Storage::Integer(vec) => vec.fmt_lines(out),
            Storage::FloatingPoint(vec) => vec.fmt_lines(out),
        }
    }
}

impl<'a, P> IntoIterator for &'a TaggedVec<P>
where
    P: AllocPolicy + Clone,
{
    type Item = Element;
    type IntoIter = ElementIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`TaggedVec`], in insertion order.
#[derive(Debug, Clone)]
pub enum ElementIter<'a> {
    Empty,
    Integer(slice::Iter<'a, i32>),
    FloatingPoint(slice::Iter<'a, f64>),
}

impl Iterator for ElementIter<'_> {
    type Item = Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Empty => None,
            Self::Integer(iter) => iter.next().copied().map(Element::Integer),
            Self::FloatingPoint(iter) => iter.next().copied().map(Element::FloatingPoint),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Empty => (0, Some(0)),
            Self::Integer(iter) => iter.size_hint(),
            Self::FloatingPoint(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for ElementIter<'_> {}

impl FusedIterator for ElementIter<'_> {}
