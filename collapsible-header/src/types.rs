/// A measured layout box, as delivered by the host's layout callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

/// Edge insets (safe areas, content padding, scroll indicator insets).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Insets {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl ScrollAxis {
    pub fn pick(self, point: Point) -> f32 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }
}

/// A native scroll callback payload.
///
/// Only `content_offset` is consumed by the engine; the remaining fields are forwarded
/// untouched to scroll worklets and lifecycle callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub content_offset: Point,
    pub content_size: LayoutRect,
    pub layout_measurement: LayoutRect,
}

impl ScrollEvent {
    /// An event at vertical offset `y`.
    pub fn at(y: f32) -> Self {
        Self {
            content_offset: Point { x: 0.0, y },
            ..Self::default()
        }
    }
}

/// An imperative "scroll to offset" request for the host's scrollable primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub offset: f32,
    pub animated: bool,
}

/// Per-mount header state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderPhase {
    /// The large header has not been measured yet (height below `adjustment_offset`).
    Unmeasured,
    /// Offset at or below the fade-in threshold; the large header is shown.
    Expanded,
    /// Offset above the fade-in threshold; the small header is shown.
    Collapsed,
}

/// Content padding and scroll indicator insets that keep list content clear of a floating header.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollViewAdjustments {
    pub content_padding: Insets,
    pub scroll_indicator_insets: Insets,
}

/// A lightweight, serializable snapshot of the engine state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderSnapshot {
    pub scroll_offset: f32,
    pub large_header_height: f32,
    pub absolute_header_height: f32,
    pub nav_bar_visibility: f32,
    pub large_header_opacity: f32,
    pub phase: HeaderPhase,
}
