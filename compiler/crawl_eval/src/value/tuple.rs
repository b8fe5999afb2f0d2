//! Tuple storage and the per-run live table.

use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crawl_stack::ensure_sufficient_stack;

use super::{Heap, Value};

/// Immutable tuple contents.
pub struct TupleData {
    items: Vec<Value>,
    _live: LiveGuard,
}

impl TupleData {
    #[inline]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Children are released through a worklist, so dropping a tuple nested
/// arbitrarily deep uses constant native stack.
impl Drop for TupleData {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.items);
        while let Some(value) = pending.pop() {
            if let Value::Tuple(tuple) = value {
                if let Some(mut last) = Heap::into_inner(tuple) {
                    pending.append(&mut last.items);
                }
            }
        }
    }
}

impl PartialEq for TupleData {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.items == other.items)
    }
}

impl fmt::Debug for TupleData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| f.debug_tuple("Tuple").field(&self.items).finish())
    }
}

/// Counts one live tuple for as long as it exists.
struct LiveGuard(Arc<AtomicUsize>);

impl LiveGuard {
    fn new(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::Relaxed);
        LiveGuard(Arc::clone(counter))
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Allocation point and live count for every tuple of a run.
///
/// Each tuple is freed exactly when its last `Value` handle is dropped;
/// `live()` reports how many are still allocated.
#[derive(Clone, Default)]
pub struct TupleTable {
    live: Arc<AtomicUsize>,
    created: Arc<AtomicUsize>,
}

impl TupleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `items` as a new tuple value.
    pub fn alloc(&self, items: Vec<Value>) -> Value {
        self.created.fetch_add(1, Ordering::Relaxed);
        Value::Tuple(Heap::new(TupleData {
            items,
            _live: LiveGuard::new(&self.live),
        }))
    }

    /// Tuples currently allocated.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Tuples allocated since the table was created.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for TupleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TupleTable")
            .field("live", &self.live())
            .field("created", &self.created())
            .finish()
    }
}
