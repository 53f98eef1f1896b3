use alloc::sync::Arc;
use core::fmt;

use collapsible_header::{Insets, LayoutRect, ScrollEvent, ScrollWorklet, SharedValue, ValueWriter};

/// What header renderers receive.
#[derive(Clone, Debug)]
pub struct HeaderRenderProps {
    /// Eased value in `[0, 1]`: how visible the small header's content should be.
    pub show_nav_bar: SharedValue,
    /// The live scroll offset.
    pub scroll_y: SharedValue,
}

/// Renders a header slot into the host's node type `N`.
pub type HeaderRenderer<N> = Arc<dyn Fn(&HeaderRenderProps) -> N + Send + Sync>;

/// A pass-through scroll lifecycle callback.
pub type ScrollCallback = Arc<dyn Fn(&ScrollEvent) + Send + Sync>;

/// A pass-through layout callback.
pub type LayoutCallback = Arc<dyn Fn(LayoutRect) + Send + Sync>;

/// Per-edge overrides layered on top of computed insets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeOverrides {
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
}

impl EdgeOverrides {
    pub fn apply(&self, base: Insets) -> Insets {
        Insets {
            top: self.top.unwrap_or(base.top),
            bottom: self.bottom.unwrap_or(base.bottom),
            left: self.left.unwrap_or(base.left),
            right: self.right.unwrap_or(base.right),
        }
    }
}

/// Props shared by every header container.
///
/// Built with [`ContainerProps::new`] and the `with_*` setters. Read once when the container is
/// created.
pub struct ContainerProps<N> {
    pub header: HeaderRenderer<N>,
    pub large_header: Option<HeaderRenderer<N>>,
    /// Rendered right after the large header, outside its fade.
    pub large_header_subtitle: Option<HeaderRenderer<N>>,
    pub ignore_left_safe_area: bool,
    pub ignore_right_safe_area: bool,
    pub absolute_header: bool,
    pub initial_absolute_header_height: f32,
    pub header_fade_in_threshold: f32,
    pub disable_large_header_fade_anim: bool,
    pub disable_auto_fix_scroll: bool,
    pub inverted: bool,
    /// Defaults to `!absolute_header` when unset.
    pub automatically_adjusts_scroll_indicator_insets: Option<bool>,
    pub scroll_indicator_insets: EdgeOverrides,
    pub on_scroll_begin_drag: Option<ScrollCallback>,
    pub on_scroll_end_drag: Option<ScrollCallback>,
    pub on_momentum_scroll_begin: Option<ScrollCallback>,
    pub on_momentum_scroll_end: Option<ScrollCallback>,
    pub on_scroll_worklet: Option<ScrollWorklet>,
    /// Not supported: the container owns the scroll handler. Setting this makes container
    /// construction fail with [`collapsible_header::HeaderError::ScrollHandlerOverride`].
    pub on_scroll: Option<ScrollCallback>,
    pub on_large_header_layout: Option<LayoutCallback>,
    pub large_header_shown: Option<ValueWriter>,
}

impl<N> ContainerProps<N> {
    pub fn new(header: impl Fn(&HeaderRenderProps) -> N + Send + Sync + 'static) -> Self {
        Self {
            header: Arc::new(header),
            large_header: None,
            large_header_subtitle: None,
            ignore_left_safe_area: false,
            ignore_right_safe_area: false,
            absolute_header: false,
            initial_absolute_header_height: 0.0,
            header_fade_in_threshold: 1.0,
            disable_large_header_fade_anim: false,
            disable_auto_fix_scroll: false,
            inverted: false,
            automatically_adjusts_scroll_indicator_insets: None,
            scroll_indicator_insets: EdgeOverrides::default(),
            on_scroll_begin_drag: None,
            on_scroll_end_drag: None,
            on_momentum_scroll_begin: None,
            on_momentum_scroll_end: None,
            on_scroll_worklet: None,
            on_scroll: None,
            on_large_header_layout: None,
            large_header_shown: None,
        }
    }

    pub fn with_large_header(
        mut self,
        large_header: impl Fn(&HeaderRenderProps) -> N + Send + Sync + 'static,
    ) -> Self {
        self.large_header = Some(Arc::new(large_header));
        self
    }

    pub fn with_large_header_subtitle(
        mut self,
        subtitle: impl Fn(&HeaderRenderProps) -> N + Send + Sync + 'static,
    ) -> Self {
        self.large_header_subtitle = Some(Arc::new(subtitle));
        self
    }

    pub fn with_ignore_safe_area(mut self, left: bool, right: bool) -> Self {
        self.ignore_left_safe_area = left;
        self.ignore_right_safe_area = right;
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

    pub fn with_header_fade_in_threshold(mut self, threshold: f32) -> Self {
        self.header_fade_in_threshold = threshold;
        self
    }

    pub fn with_disable_large_header_fade_anim(mut self, disable: bool) -> Self {
        self.disable_large_header_fade_anim = disable;
        self
    }

    pub fn with_disable_auto_fix_scroll(mut self, disable: bool) -> Self {
        self.disable_auto_fix_scroll = disable;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn with_automatically_adjusts_scroll_indicator_insets(mut self, adjusts: bool) -> Self {
        self.automatically_adjusts_scroll_indicator_insets = Some(adjusts);
        self
    }

    pub fn with_scroll_indicator_insets(mut self, overrides: EdgeOverrides) -> Self {
        self.scroll_indicator_insets = overrides;
        self
    }

    pub fn with_on_scroll_begin_drag(
        mut self,
        f: impl Fn(&ScrollEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_scroll_begin_drag = Some(Arc::new(f));
        self
    }

    pub fn with_on_scroll_end_drag(
        mut self,
        f: impl Fn(&ScrollEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_scroll_end_drag = Some(Arc::new(f));
        self
    }

    pub fn with_on_momentum_scroll_begin(
        mut self,
        f: impl Fn(&ScrollEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_momentum_scroll_begin = Some(Arc::new(f));
        self
    }

    pub fn with_on_momentum_scroll_end(
        mut self,
        f: impl Fn(&ScrollEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_momentum_scroll_end = Some(Arc::new(f));
        self
    }

    pub fn with_on_scroll_worklet(
        mut self,
        f: impl Fn(&ScrollEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_scroll_worklet = Some(Arc::new(f));
        self
    }

    /// See [`ContainerProps::on_scroll`].
    pub fn with_on_scroll(mut self, f: impl Fn(&ScrollEvent) + Send + Sync + 'static) -> Self {
        self.on_scroll = Some(Arc::new(f));
        self
    }

    pub fn with_on_large_header_layout(
        mut self,
        f: impl Fn(LayoutRect) + Send + Sync + 'static,
    ) -> Self {
        self.on_large_header_layout = Some(Arc::new(f));
        self
    }

    /// Hands the writer of an externally observed "large header shown" value to the container.
    pub fn with_large_header_shown(mut self, writer: ValueWriter) -> Self {
        self.large_header_shown = Some(writer);
        self
    }
}

impl<N> fmt::Debug for ContainerProps<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerProps")
            .field("large_header", &self.large_header.is_some())
            .field("large_header_subtitle", &self.large_header_subtitle.is_some())
            .field("ignore_left_safe_area", &self.ignore_left_safe_area)
            .field("ignore_right_safe_area", &self.ignore_right_safe_area)
            .field("absolute_header", &self.absolute_header)
            .field(
                "initial_absolute_header_height",
                &self.initial_absolute_header_height,
            )
            .field("header_fade_in_threshold", &self.header_fade_in_threshold)
            .field(
                "disable_large_header_fade_anim",
                &self.disable_large_header_fade_anim,
            )
            .field("disable_auto_fix_scroll", &self.disable_auto_fix_scroll)
            .field("inverted", &self.inverted)
            .field("scroll_indicator_insets", &self.scroll_indicator_insets)
            .finish_non_exhaustive()
    }
}
