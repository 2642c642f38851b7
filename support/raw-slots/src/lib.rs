#![allow(unsafe_code)]
#![cfg_attr(not(test), no_std)]

//! RawSlots: a fixed-length block of uninitialized `T` slots.
//!
//! RawSlots is the storage underneath `dyncontainer`'s `Container`:
//! - Owns exactly one heap allocation of `capacity` slots (or none at all for
//!   zero-sized layouts)
//! - Never tracks which slots are initialized; the owner does
//! - Never drops elements, only releases the block
//! - Grows by allocate, copy prefix, release (the old block is untouched until
//!   the new one exists)

extern crate alloc;

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{
    marker::PhantomData,
    ptr::{self, NonNull},
    slice,
};

use thiserror::Error;

/// Failure to obtain a block from the allocator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The byte size of the requested block does not fit in `isize`.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The global allocator returned null.
    #[error("memory allocation of {capacity} slots failed")]
    AllocFailed { capacity: usize },
}

pub struct RawSlots<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// Same rules as `Box<[T]>`: the block is never aliased.
unsafe impl<T: Send> Send for RawSlots<T> {}
unsafe impl<T: Sync> Sync for RawSlots<T> {}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(RawSlots<u64>, [usize; 2]);

impl<T> RawSlots<T> {
    /// Allocates `capacity` uninitialized slots.
    pub fn try_allocate(capacity: usize) -> Result<Self, AllocError> {
        let ptr = Self::alloc_block(capacity)?;
        Ok(Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        })
    }

    /// Like [`RawSlots::try_allocate`], but aborts on allocator failure and
    /// panics on capacity overflow.
    pub fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(slots) => slots,
            Err(err) => Self::fail(err, capacity),
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Views the first `len` slots.
    ///
    /// # Safety
    ///
    /// `len <= capacity()` and slots `[0, len)` must be initialized.
    #[inline(always)]
    pub unsafe fn prefix(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.cap);
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Mutable view of the first `len` slots.
    ///
    /// # Safety
    ///
    /// Same as [`RawSlots::prefix`].
    #[inline(always)]
    pub unsafe fn prefix_mut(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.cap);
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }

    /// Moves to a block of `new_capacity` slots, carrying over the first `live`
    /// slots bitwise. On error `self` is left exactly as it was.
    pub fn try_grow(&mut self, new_capacity: usize, live: usize) -> Result<(), AllocError> {
        assert!(live <= self.cap, "live prefix exceeds capacity");
        assert!(new_capacity >= self.cap, "raw slots never shrink");

        let new_ptr = Self::alloc_block(new_capacity)?;
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live);
            self.release();
        }
        self.ptr = new_ptr;
        self.cap = new_capacity;
        Ok(())
    }

    /// Like [`RawSlots::try_grow`], but aborts on allocator failure.
    pub fn grow(&mut self, new_capacity: usize, live: usize) {
        if let Err(err) = self.try_grow(new_capacity, live) {
            Self::fail(err, new_capacity)
        }
    }

    fn layout(capacity: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)
    }

    fn alloc_block(capacity: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Self::layout(capacity)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr.cast::<T>()).ok_or(AllocError::AllocFailed { capacity })
    }

    /// Frees the current block without touching its contents.
    ///
    /// # Safety
    ///
    /// The block must not be used afterwards until `ptr` is replaced.
    unsafe fn release(&mut self) {
        if let Ok(layout) = Self::layout(self.cap) {
            if layout.size() != 0 {
                unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
            }
        }
    }

    #[cold]
    fn fail(err: AllocError, capacity: usize) -> ! {
        match (err, Self::layout(capacity)) {
            (AllocError::AllocFailed { .. }, Ok(layout)) => handle_alloc_error(layout),
            _ => panic!("capacity overflow"),
        }
    }
}

impl<T> Drop for RawSlots<T> {
    fn drop(&mut self) {
        // Slots are plain memory here; whoever initialized them drops them.
        unsafe { self.release() }
    }
}
