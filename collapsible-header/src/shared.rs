use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

/// A subscriber replayed on every write to a [`ValueWriter`].
pub type Subscriber = Arc<dyn Fn(f32) + Send + Sync>;

/// A read handle to a continuously updating value.
///
/// Handles are cheap to clone and safe to read from any thread. They never write: the only way
/// to change the value is through the [`ValueWriter`] that created them.
#[derive(Clone)]
pub struct SharedValue {
    bits: Arc<AtomicU32>,
}

impl SharedValue {
    fn new(value: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(value.to_bits())),
        }
    }

    /// A handle that is not connected to any writer and always reads `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(value)
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Whether both handles observe the same underlying cell.
    pub fn same_cell(&self, other: &SharedValue) -> bool {
        Arc::ptr_eq(&self.bits, &other.bits)
    }
}

impl fmt::Debug for SharedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedValue").field(&self.get()).finish()
    }
}

/// The unique writer of a shared value.
///
/// `ValueWriter` is intentionally not `Clone`: whoever owns it is the single writer, and every
/// other party observes the value through [`SharedValue`] handles.
pub struct ValueWriter {
    cell: SharedValue,
    subscribers: Vec<Subscriber>,
}

impl ValueWriter {
    pub fn new(initial: f32) -> Self {
        Self {
            cell: SharedValue::new(initial),
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> f32 {
        self.cell.get()
    }

    /// Stores `value` and replays it to every subscriber.
    ///
    /// Subscribers run synchronously, in registration order, within the same update step.
    pub fn set(&mut self, value: f32) {
        self.cell.bits.store(value.to_bits(), Ordering::Release);
        for sub in &self.subscribers {
            sub(value);
        }
    }

    /// Same as `set`, but skips the store and the subscribers when the value is unchanged.
    ///
    /// Returns `true` if the value changed.
    pub fn set_if_changed(&mut self, value: f32) -> bool {
        if self.get().to_bits() == value.to_bits() {
            return false;
        }
        self.set(value);
        true
    }

    pub fn reader(&self) -> SharedValue {
        self.cell.clone()
    }

    pub fn subscribe(&mut self, f: impl Fn(f32) + Send + Sync + 'static) {
        self.subscribers.push(Arc::new(f));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for ValueWriter {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for ValueWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueWriter")
            .field("value", &self.get())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
