use collapsible_header::{Extrapolation, LayoutRect, SharedValue, ValueWriter, interpolate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TranslationDirection {
    #[default]
    Right,
    /// Not supported yet: produces no transform.
    Left,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTransform {
    pub scale: f32,
    pub translate_x: f32,
}

/// Scales (and optionally shifts) content as the user over-scrolls past the top, like the iOS
/// large title.
#[derive(Debug)]
pub struct ScalingView {
    scroll_y: SharedValue,
    width: ValueWriter,
    pub start_range: f32,
    pub start_scale: f32,
    pub end_range: f32,
    pub end_scale: f32,
    pub translation: TranslationDirection,
}

impl ScalingView {
    /// `end_range` defaults to 10% of `window_height`.
    pub fn new(scroll_y: SharedValue, window_height: f32) -> Self {
        Self {
            scroll_y,
            width: ValueWriter::new(0.0),
            start_range: 0.0,
            start_scale: 1.0,
            end_range: window_height * 0.1,
            end_scale: 1.05,
            translation: TranslationDirection::Right,
        }
    }

    pub fn with_range(mut self, start_range: f32, end_range: f32) -> Self {
        self.start_range = start_range;
        self.end_range = end_range;
        self
    }

    pub fn with_scale(mut self, start_scale: f32, end_scale: f32) -> Self {
        self.start_scale = start_scale;
        self.end_scale = end_scale;
        self
    }

    pub fn with_translation(mut self, translation: TranslationDirection) -> Self {
        self.translation = translation;
        self
    }

    pub fn on_layout(&mut self, rect: LayoutRect) {
        self.width.set_if_changed(rect.width);
    }

    /// The transform for the current scroll offset; `None` when no transform applies.
    pub fn transform(&self) -> Option<ScaleTransform> {
        let scale = interpolate(
            -self.scroll_y.get(),
            (self.start_range, self.end_range),
            (self.start_scale, self.end_scale),
            Extrapolation::Clamp,
        );
        match self.translation {
            TranslationDirection::None => Some(ScaleTransform {
                scale,
                translate_x: 0.0,
            }),
            TranslationDirection::Right => {
                let max_shift = self.width.get() * (self.end_scale - self.start_scale) / 2.0;
                let translate_x = interpolate(
                    scale,
                    (self.start_scale, self.end_scale),
                    (0.0, max_shift),
                    Extrapolation::Clamp,
                );
                Some(ScaleTransform { scale, translate_x })
            }
            TranslationDirection::Left => None,
        }
    }
}
