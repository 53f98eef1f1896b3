use crate::ContainerKind;

/// The host's scrollable primitive, as seen by a header container.
///
/// Implement this for whatever scroll view / list widget your UI layer provides. The container
/// owns the primitive and exposes it through `primitive()`/`primitive_mut()` so the consumer can
/// still drive it imperatively.
pub trait ScrollPrimitive {
    fn kind(&self) -> ContainerKind;

    /// Imperatively scrolls to `offset` along the primary axis.
    fn scroll_to(&mut self, offset: f32, animated: bool);

    /// The current offset, for primitives with a pollable offset.
    ///
    /// `None` means "not mounted yet" or "not pollable"; the container then relies on native
    /// scroll events.
    fn polled_offset(&self) -> Option<f32> {
        None
    }
}

impl<T: ScrollPrimitive + ?Sized> ScrollPrimitive for &mut T {
    fn kind(&self) -> ContainerKind {
        (**self).kind()
    }

    fn scroll_to(&mut self, offset: f32, animated: bool) {
        (**self).scroll_to(offset, animated);
    }

    fn polled_offset(&self) -> Option<f32> {
        (**self).polled_offset()
    }
}
