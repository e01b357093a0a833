//! Scratch buffer providers for the index-addressed sorters.
//!
//! A provider hands out zero-valued buffers of a requested length. The
//! capacity hint only pre-reserves room for later pushes and never changes
//! the initial contents. Sorters return every buffer through the `recycle_*`
//! hooks before they exit, on success and on failure alike.

use parking_lot::Mutex;

/// Source of scratch memory for one sort call.
pub trait ScratchBuffers {
    /// A buffer of `len` zeros with room for at least `capacity_hint` entries.
    fn int_buffer(&self, len: usize, capacity_hint: usize) -> Vec<usize>;

    /// A buffer of `len` `false`s with room for at least `capacity_hint` entries.
    fn bool_buffer(&self, len: usize, capacity_hint: usize) -> Vec<bool>;

    /// Take back a buffer obtained from [`int_buffer`](Self::int_buffer).
    fn recycle_int(&self, _buf: Vec<usize>) {}

    /// Take back a buffer obtained from [`bool_buffer`](Self::bool_buffer).
    fn recycle_bool(&self, _buf: Vec<bool>) {}
}

/// Allocates fresh buffers on every request. The default provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreshBuffers;

impl ScratchBuffers for FreshBuffers {
    fn int_buffer(&self, len: usize, capacity_hint: usize) -> Vec<usize> {
        zeroed(Vec::new(), len, capacity_hint, 0)
    }

    fn bool_buffer(&self, len: usize, capacity_hint: usize) -> Vec<bool> {
        zeroed(Vec::new(), len, capacity_hint, false)
    }
}

/// Recycling provider: buffers handed back are kept and reused.
///
/// The pool is `Sync`, so one instance can back concurrent sorts on distinct
/// inputs. At most `max_retained` buffers of each kind are kept.
#[derive(Debug)]
pub struct BufferPool {
    ints: Mutex<Vec<Vec<usize>>>,
    bools: Mutex<Vec<Vec<bool>>>,
    max_retained: usize,
}

impl BufferPool {
    /// Default number of retained buffers per kind; the DFS sorter holds
    /// four buffers at once.
    pub const DEFAULT_RETAINED: usize = 8;

    /// An empty pool with the default retention limit.
    pub fn new() -> Self {
        Self::with_retained(Self::DEFAULT_RETAINED)
    }

    /// An empty pool keeping at most `max_retained` buffers of each kind.
    pub fn with_retained(max_retained: usize) -> Self {
        Self {
            ints: Mutex::new(Vec::new()),
            bools: Mutex::new(Vec::new()),
            max_retained,
        }
    }

    /// Number of idle buffers currently held, as `(ints, bools)`.
    pub fn idle(&self) -> (usize, usize) {
        (self.ints.lock().len(), self.bools.lock().len())
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ScratchBuffers for BufferPool {
    fn int_buffer(&self, len: usize, capacity_hint: usize) -> Vec<usize> {
        let reused = self.ints.lock().pop().unwrap_or_default();
        zeroed(reused, len, capacity_hint, 0)
    }

    fn bool_buffer(&self, len: usize, capacity_hint: usize) -> Vec<bool> {
        let reused = self.bools.lock().pop().unwrap_or_default();
        zeroed(reused, len, capacity_hint, false)
    }

    fn recycle_int(&self, buf: Vec<usize>) {
        let mut ints = self.ints.lock();
        if ints.len() < self.max_retained {
            ints.push(buf);
        }
    }

    fn recycle_bool(&self, buf: Vec<bool>) {
        let mut bools = self.bools.lock();
        if bools.len() < self.max_retained {
            bools.push(buf);
        }
    }
}

fn zeroed<T: Clone>(mut buf: Vec<T>, len: usize, capacity_hint: usize, zero: T) -> Vec<T> {
    buf.clear();
    buf.reserve(len.max(capacity_hint));
    buf.resize(len, zero);
    buf
}
