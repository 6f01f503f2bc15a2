use std::{fmt, slice};

use log::{debug, warn};

use crate::{AllocPolicy, Error, Printable, PrintableVec, Result, Unbounded, VecOptions, VecValue};

/// Growable vector generic over its element type.
///
/// Appends are fallible: growth goes through the vector's [`AllocPolicy`] and then
/// through a fallible reservation on the global allocator. A failed append leaves
/// the vector exactly as it was.
///
/// With [`Growth::Exact`](crate::Growth::Exact) (the default) storage is resized to the exact
/// element count on every append. [`Growth::Doubling`](crate::Growth::Doubling) trades spare
/// capacity for fewer reallocations. Contents and print output are the same either way.
#[derive(Debug)]
#[must_use = "Vector should be stored to keep its values"]
pub struct PolyVec<T, P = Unbounded>
where
    P: AllocPolicy,
{
    values: Vec<T>,
    /// Slots charged to `policy`, always >= `values.len()`.
    reserved: usize,
    options: VecOptions,
    policy: P,
}

impl<T, P> PolyVec<T, P>
where
    T: VecValue,
    P: AllocPolicy,
{
    /// The size of T in bytes.
    pub const SIZE_OF_T: usize = size_of::<T>();

    /// Creates an empty vector with default options.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::with_options(VecOptions::default())
    }

    pub fn with_options(options: VecOptions) -> Self
    where
        P: Default,
    {
        Self::with_policy(options, P::default())
    }

    /// Creates an empty vector drawing its storage through `policy`.
    pub fn with_policy(options: VecOptions, policy: P) -> Self {
        Self {
            values: Vec::new(),
            reserved: 0,
            options,
            policy,
        }
    }

    /// Appends `value` at the end.
    ///
    /// On error the vector is left unchanged.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.values.len() == self.reserved {
            self.grow()?;
        }
        self.values.push(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let len = self.values.len();

        let Some(target) = self.options.target_capacity(self.reserved, len) else {
            return Err(Error::Allocation {
                requested: usize::MAX,
            });
        };

        let requested = (target - self.reserved)
            .checked_mul(Self::SIZE_OF_T)
            .ok_or(Error::Allocation {
                requested: usize::MAX,
            })?;

        if !self.policy.reserve(requested) {
            warn!("Growth to {target} slots denied by policy");
            return Err(Error::Allocation { requested });
        }

        if let Err(e) = self.values.try_reserve_exact(target - len) {
            self.policy.release(requested);
            warn!("Growth to {target} slots failed: {e}");
            return Err(Error::Allocation { requested });
        }

        debug!("Grew from {} to {target} slots", self.reserved);
        self.reserved = target;
        Ok(())
    }

    /// Releases storage and resets the length to zero.
    ///
    /// Calling it on an empty vector does nothing. The vector stays usable.
    pub fn clear(&mut self) {
        self.values = Vec::new();
        self.release_reserved();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of slots reserved for elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.reserved
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.values.last()
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

impl<T, P> Default for PolyVec<T, P>
where
    T: VecValue,
    P: AllocPolicy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> PolyVec<T, P>
where
    P: AllocPolicy,
{
    fn release_reserved(&mut self) {
        if self.reserved == 0 {
            return;
        }
        self.policy.release(self.reserved * size_of::<T>());
        self.reserved = 0;
    }
}

impl<T, P> Drop for PolyVec<T, P>
where
    P: AllocPolicy,
{
    fn drop(&mut self) {
        self.release_reserved();
    }
}

impl<'a, T, P> IntoIterator for &'a PolyVec<T, P>
where
    T: VecValue,
    P: AllocPolicy,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P> PrintableVec for PolyVec<T, P>
where
    T: VecValue + Printable,
    P: AllocPolicy,
{
    #[inline]
    fn has_printable(&self) -> bool {
        !self.is_empty()
    }

    fn fmt_lines(&self, out: &mut String) -> fmt::Result {
        for value in self.iter() {
            value.fmt_line(out)?;
            out.push('\n');
        }
        Ok(())
    }
}
