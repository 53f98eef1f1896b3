use alloc::sync::Arc;
use core::fmt;

use crate::{
    AnimatedValue, AutoSnapCorrector, HeaderOptions, HeaderPhase, HeaderSnapshot, Insets,
    LayoutRect, ScrollCommand, ScrollEvent, ScrollSignal, ScrollViewAdjustments, SharedValue,
    SnapState, ValueWriter,
};

/// A caller-supplied low-level scroll observer, invoked on every native scroll event.
pub type ScrollWorklet = Arc<dyn Fn(&ScrollEvent) + Send + Sync>;

/// The header state engine.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by forwarding scroll events, layout measurements, gesture
///   lifecycle events, and frame ticks.
/// - Derived values are published through [`SharedValue`] handles that renderers read.
///
/// Scroll offset and large header height are written only here, each by a single entry point
/// (`on_scroll`/`set_scroll_offset` and `on_large_header_layout`). Every write recomputes the
/// derived state in the same call, so a new measurement is visible to the very next offset
/// update.
pub struct HeaderEngine {
    options: HeaderOptions,
    scroll: ScrollSignal,
    large_header_height: ValueWriter,
    absolute_header_height: ValueWriter,
    nav_bar: AnimatedValue,
    show_nav_bar: ValueWriter,
    large_header_opacity: ValueWriter,
    large_header_shown: Option<ValueWriter>,
    worklet: Option<ScrollWorklet>,
    corrector: AutoSnapCorrector,
    phase: HeaderPhase,
}

impl HeaderEngine {
    pub fn new(options: HeaderOptions) -> Self {
        hdebug!(
            large_header_exists = options.large_header_exists,
            absolute_header = options.absolute_header,
            inverted = options.inverted,
            threshold = options.header_fade_in_threshold,
            "HeaderEngine::new"
        );
        let phase = if options.large_header_exists {
            HeaderPhase::Unmeasured
        } else {
            HeaderPhase::Expanded
        };
        Self {
            scroll: ScrollSignal::new(options.axis),
            large_header_height: ValueWriter::new(0.0),
            absolute_header_height: ValueWriter::new(options.initial_absolute_header_height),
            nav_bar: AnimatedValue::new(0.0, options.fade_duration_ms, options.fade_easing),
            show_nav_bar: ValueWriter::new(0.0),
            large_header_opacity: ValueWriter::new(1.0),
            large_header_shown: None,
            worklet: None,
            corrector: AutoSnapCorrector::new(
                options.fix_scroll_delay_ms,
                options.disable_auto_fix_scroll,
            ),
            phase,
            options,
        }
    }

    /// Attaches an externally observed "large header shown" value.
    ///
    /// The engine becomes its single writer and mirrors the eased nav-bar visibility into it
    /// while a measured large header exists. Keep a [`SharedValue`] from
    /// [`ValueWriter::reader`] before handing the writer over.
    pub fn with_large_header_shown(mut self, writer: ValueWriter) -> Self {
        self.large_header_shown = Some(writer);
        self
    }

    pub fn with_scroll_worklet(
        mut self,
        worklet: Option<impl Fn(&ScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.worklet = worklet.map(|f| Arc::new(f) as _);
        self
    }

    pub fn set_scroll_worklet(&mut self, worklet: Option<ScrollWorklet>) {
        self.worklet = worklet;
    }

    pub fn options(&self) -> &HeaderOptions {
        &self.options
    }

    pub fn scroll_y(&self) -> SharedValue {
        self.scroll.offset()
    }

    pub fn show_nav_bar(&self) -> SharedValue {
        self.show_nav_bar.reader()
    }

    pub fn large_header_opacity(&self) -> SharedValue {
        self.large_header_opacity.reader()
    }

    pub fn large_header_height(&self) -> SharedValue {
        self.large_header_height.reader()
    }

    pub fn absolute_header_height(&self) -> SharedValue {
        self.absolute_header_height.reader()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.current()
    }

    pub fn nav_bar_visibility(&self) -> f32 {
        self.show_nav_bar.get()
    }

    pub fn large_header_opacity_value(&self) -> f32 {
        self.large_header_opacity.get()
    }

    pub fn phase(&self) -> HeaderPhase {
        self.phase
    }

    pub fn snap_state(&self) -> SnapState {
        self.corrector.state()
    }

    /// Whether the nav-bar fade is still running.
    pub fn is_animating(&self) -> bool {
        self.nav_bar.is_animating()
    }

    /// The visibility the nav bar is easing toward.
    pub fn target_nav_bar_visibility(&self) -> f32 {
        self.nav_bar.target()
    }

    /// Native scroll callback entry point.
    pub fn on_scroll(&mut self, event: &ScrollEvent, now_ms: u64) {
        self.scroll.apply_event(event);
        if let Some(worklet) = &self.worklet {
            worklet(event);
        }
        self.after_offset_write(now_ms);
    }

    /// Mirrors an offset from a pollable source (no worklet involvement).
    pub fn set_scroll_offset(&mut self, offset: f32, now_ms: u64) {
        self.scroll.mirror(offset);
        self.after_offset_write(now_ms);
    }

    /// Large header layout callback entry point.
    pub fn on_large_header_layout(&mut self, rect: LayoutRect, now_ms: u64) {
        hdebug!(height = rect.height, "HeaderEngine: large header measured");
        self.large_header_height.set(rect.height);
        self.recompute(now_ms);
    }

    /// Absolute (floating) small header layout callback entry point.
    pub fn on_absolute_header_layout(&mut self, rect: LayoutRect) {
        hdebug!(height = rect.height, "HeaderEngine: absolute header measured");
        self.absolute_header_height.set_if_changed(rect.height);
    }

    pub fn on_scroll_begin_drag(&mut self) {
        self.corrector.cancel();
    }

    pub fn on_scroll_end_drag(&mut self, now_ms: u64) {
        self.corrector.schedule(now_ms);
    }

    pub fn on_momentum_scroll_begin(&mut self) {
        self.corrector.cancel();
    }

    pub fn on_momentum_scroll_end(&mut self, now_ms: u64) {
        self.corrector.schedule(now_ms);
    }

    /// Advances the fade and the auto-snap corrector to `now_ms`.
    ///
    /// Returns a command the adapter must forward to the scrollable primitive's imperative
    /// "scroll to offset" operation.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        let visibility = self.nav_bar.tick(now_ms);
        self.publish(visibility);
        self.corrector.poll(
            now_ms,
            self.scroll.current(),
            self.large_header_height.get(),
        )
    }

    /// Padding and scroll indicator insets for an absolutely positioned small header.
    ///
    /// Without `absolute_header` both are zero. Inverted lists get the inset on the bottom edge.
    pub fn scroll_view_adjustments(&self) -> ScrollViewAdjustments {
        if !self.options.absolute_header {
            return ScrollViewAdjustments::default();
        }
        let height = self.absolute_header_height.get();
        let mut inset = Insets::ZERO;
        if self.options.inverted {
            inset.bottom = height;
        } else {
            inset.top = height;
        }
        ScrollViewAdjustments {
            content_padding: inset,
            scroll_indicator_insets: inset,
        }
    }

    pub fn snapshot(&self) -> HeaderSnapshot {
        HeaderSnapshot {
            scroll_offset: self.scroll.current(),
            large_header_height: self.large_header_height.get(),
            absolute_header_height: self.absolute_header_height.get(),
            nav_bar_visibility: self.show_nav_bar.get(),
            large_header_opacity: self.large_header_opacity.get(),
            phase: self.phase,
        }
    }

    fn after_offset_write(&mut self, now_ms: u64) {
        self.corrector.observe_offset(self.scroll.current());
        self.recompute(now_ms);
    }

    fn recompute(&mut self, now_ms: u64) {
        let offset = self.scroll.current();
        let phase = self.derive_phase(offset);
        if phase != self.phase {
            hdebug!(?phase, offset, "HeaderEngine: phase change");
            self.phase = phase;
        }

        match phase {
            HeaderPhase::Unmeasured => self.nav_bar.set_immediate(0.0),
            HeaderPhase::Expanded => {
                self.nav_bar.animate_to(0.0, now_ms);
            }
            HeaderPhase::Collapsed => {
                self.nav_bar.animate_to(1.0, now_ms);
            }
        }
        let visibility = self.nav_bar.tick(now_ms);
        self.publish(visibility);
    }

    fn derive_phase(&self, offset: f32) -> HeaderPhase {
        if !self.options.large_header_exists {
            return if offset <= 0.0 {
                HeaderPhase::Expanded
            } else {
                HeaderPhase::Collapsed
            };
        }
        let height = self.large_header_height.get();
        if height < self.options.adjustment_offset {
            return HeaderPhase::Unmeasured;
        }
        // At exactly the threshold the large header still counts as shown.
        if offset <= self.options.fade_in_offset(height) {
            HeaderPhase::Expanded
        } else {
            HeaderPhase::Collapsed
        }
    }

    fn publish(&mut self, visibility: f32) {
        self.show_nav_bar.set_if_changed(visibility);
        self.large_header_opacity.set_if_changed(1.0 - visibility);
        if self.options.large_header_exists && self.phase != HeaderPhase::Unmeasured {
            if let Some(shown) = &mut self.large_header_shown {
                shown.set_if_changed(visibility);
            }
        }
    }
}

impl fmt::Debug for HeaderEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderEngine")
            .field("options", &self.options)
            .field("snapshot", &self.snapshot())
            .field("snap_state", &self.corrector.state())
            .field("has_large_header_shown", &self.large_header_shown.is_some())
            .field("has_worklet", &self.worklet.is_some())
            .finish_non_exhaustive()
    }
}
