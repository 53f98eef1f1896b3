use collapsible_header::SharedValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvents {
    Auto,
    None,
}

/// A resolved fade for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeStyle {
    pub opacity: f32,
    pub pointer_events: PointerEvents,
}

/// Fades its content with a shared opacity value.
///
/// Touches only reach the content once the opacity reaches the pointer-events threshold, so a
/// half-faded header cannot be tapped.
#[derive(Clone, Debug)]
pub struct FadingView {
    opacity: SharedValue,
    opacity_threshold_to_enable_pointer_events: f32,
}

impl FadingView {
    pub fn new(opacity: SharedValue) -> Self {
        Self {
            opacity,
            opacity_threshold_to_enable_pointer_events: 1.0,
        }
    }

    pub fn with_pointer_events_threshold(mut self, threshold: f32) -> Self {
        self.opacity_threshold_to_enable_pointer_events = threshold;
        self
    }

    pub fn opacity(&self) -> &SharedValue {
        &self.opacity
    }

    pub fn style(&self) -> FadeStyle {
        let opacity = self.opacity.get();
        let pointer_events = if opacity >= self.opacity_threshold_to_enable_pointer_events {
            PointerEvents::Auto
        } else {
            PointerEvents::None
        };
        FadeStyle {
            opacity,
            pointer_events,
        }
    }
}
