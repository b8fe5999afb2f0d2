//! Shared ownership for composite values.
//!
//! `Heap<T>` wraps `Arc<T>` and is the only way composite values are
//! allocated. The constructor is visible only inside the value module, so
//! every tuple is created through `TupleTable::alloc` and counted.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// The contents, if this was the last handle.
    #[inline]
    pub(super) fn into_inner(this: Self) -> Option<T> {
        Arc::into_inner(this.0)
    }
}

impl<T: ?Sized> Heap<T> {
    /// Number of live handles to this allocation.
    #[inline]
    pub fn handle_count(this: &Self) -> usize {
        Arc::strong_count(&this.0)
    }

    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Address of the allocation, for identity comparisons.
    #[inline]
    pub fn as_ptr(this: &Self) -> *const T {
        Arc::as_ptr(&this.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
