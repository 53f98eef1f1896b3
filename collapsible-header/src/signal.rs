use crate::{ScrollAxis, ScrollEvent, SharedValue, ValueWriter};

/// Turns native scroll callbacks (or a polled offset) into a single live scroll offset.
///
/// The signal owns the offset's [`ValueWriter`]; readers get [`SharedValue`] handles via
/// [`ScrollSignal::offset`]. Writes happen synchronously inside the call that delivers the
/// event: there is no buffering or coalescing.
#[derive(Debug)]
pub struct ScrollSignal {
    axis: ScrollAxis,
    offset: ValueWriter,
}

impl ScrollSignal {
    pub fn new(axis: ScrollAxis) -> Self {
        Self {
            axis,
            offset: ValueWriter::new(0.0),
        }
    }

    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    pub fn offset(&self) -> SharedValue {
        self.offset.reader()
    }

    pub fn current(&self) -> f32 {
        self.offset.get()
    }

    /// Captures `content_offset` along the primary axis from a native scroll event.
    pub fn apply_event(&mut self, event: &ScrollEvent) -> f32 {
        let value = self.axis.pick(event.content_offset);
        self.mirror(value);
        value
    }

    /// Mirrors an offset read from a pollable offset source.
    ///
    /// `None` (no primitive attached yet) leaves the current value untouched, which is `0.0`
    /// before the first event.
    pub fn apply_polled(&mut self, polled: Option<f32>) -> Option<f32> {
        let value = polled?;
        self.mirror(value);
        Some(value)
    }

    /// Writes `value` unconditionally.
    pub fn mirror(&mut self, value: f32) {
        htrace!(value, "ScrollSignal::mirror");
        self.offset.set(value);
    }

    pub fn subscribe(&mut self, f: impl Fn(f32) + Send + Sync + 'static) {
        self.offset.subscribe(f);
    }
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new(ScrollAxis::Vertical)
    }
}
