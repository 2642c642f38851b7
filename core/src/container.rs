//! Container: a growable indexed container over a fixed-size backing block.
//!
//! Container provides:
//! - One exclusively owned block of slots ([`RawSlots`]) plus a live count
//! - Slots `[0, len)` hold elements in positional order; the rest are
//!   uninitialized and never read
//! - Growth by a factor of 1.5 (see [`growth::next_capacity`]); capacity never
//!   shrinks, not even on [`Container::clear`]
//! - Index errors reported as values ([`ContainerError`]) and never as panics
//!
//! Search and value-based removal use the element type's `PartialEq`. The "no
//! value" marker is whatever the element type uses for it (`None`,
//! [`Value::Nil`](crate::Value::Nil)), and it compares equal to itself like any
//! other value.
//!
//! # Example
//!
//! ```
//! use dyncontainer_core::Container;
//!
//! let mut words = Container::with_capacity(2)?;
//! words.add("Hello");
//! words.add("!");
//! words.insert(1, "World")?;
//!
//! assert_eq!(words.as_slice(), &["Hello", "World", "!"]);
//! assert_eq!(words.remove_at(2)?, "!");
//! assert!(words.remove(&"Hello"));
//! assert_eq!(&*words.to_array(), &["World"]);
//! # Ok::<(), dyncontainer_core::ContainerError>(())
//! ```

use core::ptr;

use dyncontainer_raw_slots::RawSlots;

use crate::{
    Box,
    error::{ContainerError, IndexOp},
    fmt,
    growth::{self, DEFAULT_CAPACITY},
};

pub struct Container<T> {
    slots: RawSlots<T>,
    len: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(Container<u64>, [usize; 3]);
static_assertions::assert_impl_all!(Container<crate::String>: Send, Sync);
static_assertions::assert_not_impl_any!(Container<alloc::rc::Rc<u8>>: Send, Sync);

impl<T> Container<T> {
    /// Creates an empty container with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            slots: RawSlots::allocate(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Creates an empty container with exactly `capacity` slots.
    ///
    /// Fails with [`ContainerError::InvalidCapacity`] when `capacity` is zero,
    /// and with `CapacityOverflow`/`AllocationFailed` when the block cannot be
    /// obtained.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        if capacity == 0 {
            return Err(ContainerError::InvalidCapacity { capacity });
        }
        let slots = RawSlots::try_allocate(capacity)?;
        Ok(Self { slots, len: 0 })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Always at least `len()`.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized.
        unsafe { self.slots.prefix(self.len) }
    }

    /// Appends `element`, growing the storage if it is full. Always returns `true`.
    pub fn add(&mut self, element: T) -> bool {
        self.reserve_one();
        unsafe {
            ptr::write(self.slots.as_mut_ptr().add(self.len), element);
        }
        self.len += 1;
        true
    }

    /// Inserts `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` appends. Any `index > len()` fails and leaves the
    /// container untouched.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), ContainerError> {
        if index > self.len {
            return Err(ContainerError::out_of_bounds(index, self.len, IndexOp::Insert));
        }
        self.reserve_one();
        unsafe {
            let slot = self.slots.as_mut_ptr().add(index);
            // Overlapping move; equivalent to copying from the back.
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, element);
        }
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| ContainerError::out_of_bounds(index, self.len, IndexOp::Access))
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::out_of_bounds(index, self.len, IndexOp::Access));
        }
        unsafe {
            let slot = self.slots.as_mut_ptr().add(index);
            let removed = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            // The vacated last slot now counts as uninitialized.
            self.len -= 1;
            Ok(removed)
        }
    }

    /// Removes the first element equal to `element`.
    ///
    /// Returns `false`, leaving the container unchanged, if there is none.
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Index of the first element equal to `element`, scanning from the front.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|item| element == item)
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        let live = self.len;
        // Zero the count first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        unsafe { ptr::drop_in_place(self.slots.prefix_mut(live)) }
    }

    /// Copies the live elements into a new boxed slice.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        Box::from(self.as_slice())
    }

    /// Makes room for at least `additional` more elements without aborting on
    /// allocation failure. On error the container is unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ContainerError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(ContainerError::CapacityOverflow)?;
        self.try_grow_to(required).inspect_err(|err| {
            tracing::warn!(error = %err, len = self.len, additional, "failed to reserve container storage");
        })
    }

    fn try_grow_to(&mut self, required: usize) -> Result<(), ContainerError> {
        let old_capacity = self.slots.capacity();
        let Some(new_capacity) = growth::next_capacity(old_capacity, required)? else {
            return Ok(());
        };
        tracing::debug!(old_capacity, new_capacity, len = self.len, "growing container storage");
        self.slots.try_grow(new_capacity, self.len)?;
        Ok(())
    }

    #[inline(always)]
    fn reserve_one(&mut self) {
        if self.len == self.slots.capacity() {
            self.grow_for_one();
        }
    }

    #[cold]
    fn grow_for_one(&mut self) {
        debug_assert_eq!(self.len, self.slots.capacity());
        let old_capacity = self.slots.capacity();
        let new_capacity = match self
            .len
            .checked_add(1)
            .map(|required| growth::next_capacity(old_capacity, required))
        {
            Some(Ok(Some(new_capacity))) => new_capacity,
            Some(Ok(None)) => return,
            _ => panic!("capacity overflow"),
        };
        tracing::debug!(old_capacity, new_capacity, len = self.len, "growing container storage");
        self.slots.grow(new_capacity, self.len);
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Container<T> {
    fn drop(&mut self) {
        // RawSlots releases the block afterwards.
        unsafe { ptr::drop_in_place(self.slots.prefix_mut(self.len)) }
    }
}

impl<T: Clone> Clone for Container<T> {
    fn clone(&self) -> Self {
        let mut copy = Self {
            slots: RawSlots::allocate(self.capacity()),
            len: 0,
        };
        for item in self.as_slice() {
            copy.add(item.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Container<T> {}

impl<T: fmt::Debug> fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
