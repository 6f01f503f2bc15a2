use std::{fmt::Debug, sync::Arc};

use log::warn;
use parking_lot::Mutex;

/// Decides whether a vector may grow its storage.
///
/// Every byte granted through [`reserve`](AllocPolicy::reserve) is handed back
/// through [`release`](AllocPolicy::release) when the vector shrinks, is cleared or is dropped.
pub trait AllocPolicy: Debug {
    /// Asks for `bytes` more. Returns false to deny the growth.
    fn reserve(&self, bytes: usize) -> bool;

    /// Returns `bytes` previously granted by [`reserve`](AllocPolicy::reserve).
    fn release(&self, bytes: usize);
}

/// Grants every request; growth is only limited by the global allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unbounded;

impl AllocPolicy for Unbounded {
    #[inline(always)]
    fn reserve(&self, _bytes: usize) -> bool {
        true
    }

    #[inline(always)]
    fn release(&self, _bytes: usize) {}
}

/// Byte budget shared by every vector holding a clone of it.
///
/// Useful to cap the memory of a group of vectors, or to make growth fail on purpose.
#[derive(Debug, Clone)]
#[must_use = "Budget should be handed to a vector"]
pub struct Budget(Arc<Mutex<BudgetInner>>);
#[derive(Debug)]
struct BudgetInner {
    limit: usize,
    used: usize,
}

impl Budget {
    pub fn new(limit: usize) -> Self {
        Self(Arc::new(Mutex::new(BudgetInner { limit, used: 0 })))
    }

    /// A budget that denies any growth.
    pub fn exhausted() -> Self {
        Self::new(0)
    }

    pub fn limit(&self) -> usize {
        self.0.lock().limit
    }

    /// Changes the limit. Bytes already granted stay granted even above the new limit.
    pub fn set_limit(&self, limit: usize) {
        self.0.lock().limit = limit;
    }

    /// Bytes currently granted to vectors.
    pub fn used(&self) -> usize {
        self.0.lock().used
    }

    pub fn remaining(&self) -> usize {
        let inner = self.0.lock();
        inner.limit.saturating_sub(inner.used)
    }
}

impl AllocPolicy for Budget {
    fn reserve(&self, bytes: usize) -> bool {
        let mut inner = self.0.lock();
        match inner.used.checked_add(bytes) {
            Some(used) if used <= inner.limit => {
                inner.used = used;
                true
            }
            _ => {
                warn!(
                    "Budget denied {bytes} bytes ({} used of {})",
                    inner.used, inner.limit
                );
                false
            }
        }
    }

    fn release(&self, bytes: usize) {
        let mut inner = self.0.lock();
        inner.used = inner.used.saturating_sub(bytes);
    }
}
