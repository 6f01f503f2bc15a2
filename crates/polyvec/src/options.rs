/// How a vector sizes its storage when an append needs more room.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// Reserve exactly one more slot per append, leaving no spare capacity.
    #[default]
    Exact,
    /// Double the reserved slots (starting at one) whenever storage is full.
    Doubling,
}

impl Growth {
    /// Returns the number of slots to reserve so that `len + 1` elements fit,
    /// given `reserved` slots already held.
    #[inline]
    pub fn next_capacity(self, reserved: usize, len: usize) -> Option<usize> {
        let required = len.checked_add(1)?;
        if required <= reserved {
            return Some(reserved);
        }
        match self {
            Self::Exact => Some(required),
            Self::Doubling => Some(reserved.checked_mul(2)?.max(required)),
        }
    }
}

/// Options for creating a vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VecOptions {
    /// Growth strategy used by appends.
    pub growth: Growth,
    /// Number of slots reserved by the first append, if larger than what growth asks for.
    pub initial_capacity: usize,
}

impl VecOptions {
    pub fn new(growth: Growth) -> Self {
        Self {
            growth,
            initial_capacity: 0,
        }
    }

    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Slot count to reserve before appending to a vector of `len` elements holding `reserved` slots.
    #[inline]
    pub(crate) fn target_capacity(&self, reserved: usize, len: usize) -> Option<usize> {
        let next = self.growth.next_capacity(reserved, len)?;
        if reserved == 0 {
            Some(next.max(self.initial_capacity))
        } else {
            Some(next)
        }
    }
}

impl From<Growth> for VecOptions {
    fn from(growth: Growth) -> Self {
        Self::new(growth)
    }
}
