use crate::{Easing, HeaderError, ScrollAxis};

/// Default duration of the nav-bar / large-header fade.
pub const DEFAULT_FADE_DURATION_MS: u64 = 250;
/// Default settle delay before the auto-snap corrector inspects the scroll offset.
pub const DEFAULT_FIX_SCROLL_DELAY_MS: u64 = 50;
/// Default epsilon guarding the fade threshold against sub-pixel measurement noise.
pub const DEFAULT_ADJUSTMENT_OFFSET: f32 = 4.0;

/// Configuration for [`crate::HeaderEngine`].
///
/// Options are read once when the engine is created and stay fixed for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeaderOptions {
    pub large_header_exists: bool,
    pub disable_auto_fix_scroll: bool,
    /// Fraction of the large header height at which the small header starts to appear.
    ///
    /// `1.0` means "only once the large header has fully scrolled away".
    pub header_fade_in_threshold: f32,
    pub absolute_header: bool,
    /// Absolute header height used until the first layout measurement arrives.
    pub initial_absolute_header_height: f32,
    /// Bottom-anchored (chat-style) list: absolute-header insets go to the bottom edge.
    pub inverted: bool,
    pub adjustment_offset: f32,
    pub fade_duration_ms: u64,
    pub fade_easing: Easing,
    pub fix_scroll_delay_ms: u64,
    pub axis: ScrollAxis,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            large_header_exists: false,
            disable_auto_fix_scroll: false,
            header_fade_in_threshold: 1.0,
            absolute_header: false,
            initial_absolute_header_height: 0.0,
            inverted: false,
            adjustment_offset: DEFAULT_ADJUSTMENT_OFFSET,
            fade_duration_ms: DEFAULT_FADE_DURATION_MS,
            fade_easing: Easing::default(),
            fix_scroll_delay_ms: DEFAULT_FIX_SCROLL_DELAY_MS,
            axis: ScrollAxis::Vertical,
        }
    }
}

impl HeaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_large_header_exists(mut self, exists: bool) -> Self {
        self.large_header_exists = exists;
        self
    }

    pub fn with_disable_auto_fix_scroll(mut self, disable: bool) -> Self {
        self.disable_auto_fix_scroll = disable;
        self
    }

    pub fn with_header_fade_in_threshold(mut self, threshold: f32) -> Self {
        self.header_fade_in_threshold = threshold;
        self
    }

    pub fn with_absolute_header(mut self, absolute_header: bool) -> Self {
        self.absolute_header = absolute_header;
        self
    }

    pub fn with_initial_absolute_header_height(mut self, height: f32) -> Self {
        self.initial_absolute_header_height = height;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn with_adjustment_offset(mut self, adjustment_offset: f32) -> Self {
        self.adjustment_offset = adjustment_offset;
        self
    }

    pub fn with_fade(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.fade_duration_ms = duration_ms;
        self.fade_easing = easing;
        self
    }

    pub fn with_fix_scroll_delay_ms(mut self, delay_ms: u64) -> Self {
        self.fix_scroll_delay_ms = delay_ms;
        self
    }

    pub fn with_axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Rejects values that would make the fade threshold or insets meaningless.
    pub fn validate(&self) -> Result<(), HeaderError> {
        check_non_negative("header_fade_in_threshold", self.header_fade_in_threshold)?;
        check_non_negative("adjustment_offset", self.adjustment_offset)?;
        check_non_negative(
            "initial_absolute_header_height",
            self.initial_absolute_header_height,
        )?;
        Ok(())
    }

    /// The scroll offset above which the small header is shown, once the large header is
    /// measured at `large_header_height`.
    pub fn fade_in_offset(&self, large_header_height: f32) -> f32 {
        large_header_height * self.header_fade_in_threshold - self.adjustment_offset
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), HeaderError> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    hwarn!(name, value, "HeaderOptions: rejected option");
    Err(HeaderError::InvalidOption { name, value })
}
