use core::fmt;

use collapsible_header::{
    HeaderEngine, HeaderError, HeaderOptions, Insets, LayoutRect, ScrollCommand, ScrollEvent,
};

use crate::{
    ContainerFrame, ContainerKind, ContainerProps, FadingView, HeaderRenderProps, HeaderSlot,
    LargeHeaderNode, LeadingContent, ScrollPrimitive, ScrollSource,
};

/// A scrollable primitive wired to a [`HeaderEngine`].
///
/// One generic container serves every [`ContainerKind`]; the differences between kinds (where
/// the large header goes, how the offset is observed, whether inversion applies) come from the
/// primitive's kind.
///
/// Adapters drive it by calling:
/// - `on_scroll` for native scroll callbacks
/// - the four gesture lifecycle methods (`on_scroll_begin_drag`, ...)
/// - `on_large_header_layout` / `on_absolute_header_layout` from layout callbacks
/// - `tick(now_ms)` each frame (fades, polled offsets, auto-snap)
/// - `render(safe_area)` to obtain the frame to draw
pub struct ScrollContainerWithHeaders<P, N> {
    primitive: P,
    kind: ContainerKind,
    engine: HeaderEngine,
    props: ContainerProps<N>,
}

impl<P: ScrollPrimitive, N> ScrollContainerWithHeaders<P, N> {
    /// Mounts the container.
    ///
    /// Fails when `props.on_scroll` is set (the engine must own the scroll handler) or when the
    /// header options are invalid.
    pub fn new(primitive: P, mut props: ContainerProps<N>) -> Result<Self, HeaderError> {
        let kind = primitive.kind();
        if props.on_scroll.is_some() {
            awarn!(kind = kind.name(), "rejected direct on_scroll callback");
            return Err(HeaderError::ScrollHandlerOverride);
        }

        let options = HeaderOptions::new()
            .with_large_header_exists(props.large_header.is_some())
            .with_disable_auto_fix_scroll(props.disable_auto_fix_scroll)
            .with_header_fade_in_threshold(props.header_fade_in_threshold)
            .with_absolute_header(props.absolute_header)
            .with_initial_absolute_header_height(props.initial_absolute_header_height)
            .with_inverted(props.inverted && kind.supports_inverted());
        options.validate()?;

        let mut engine = HeaderEngine::new(options);
        if let Some(shown) = props.large_header_shown.take() {
            engine = engine.with_large_header_shown(shown);
        }
        engine.set_scroll_worklet(props.on_scroll_worklet.clone());

        adebug!(
            kind = kind.name(),
            large_header = props.large_header.is_some(),
            absolute_header = props.absolute_header,
            "ScrollContainerWithHeaders::new"
        );
        Ok(Self {
            primitive,
            kind,
            engine,
            props,
        })
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn engine(&self) -> &HeaderEngine {
        &self.engine
    }

    pub fn props(&self) -> &ContainerProps<N> {
        &self.props
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// The underlying primitive, for imperative control by the consumer.
    pub fn primitive_mut(&mut self) -> &mut P {
        &mut self.primitive
    }

    pub fn into_primitive(self) -> P {
        self.primitive
    }

    pub fn render_props(&self) -> HeaderRenderProps {
        HeaderRenderProps {
            show_nav_bar: self.engine.show_nav_bar(),
            scroll_y: self.engine.scroll_y(),
        }
    }

    /// The canonical scroll handler.
    pub fn on_scroll(&mut self, event: &ScrollEvent, now_ms: u64) {
        self.engine.on_scroll(event, now_ms);
    }

    pub fn on_scroll_begin_drag(&mut self, event: &ScrollEvent) {
        self.engine.on_scroll_begin_drag();
        if let Some(cb) = &self.props.on_scroll_begin_drag {
            cb(event);
        }
    }

    pub fn on_scroll_end_drag(&mut self, event: &ScrollEvent, now_ms: u64) {
        self.engine.on_scroll_end_drag(now_ms);
        if let Some(cb) = &self.props.on_scroll_end_drag {
            cb(event);
        }
    }

    pub fn on_momentum_scroll_begin(&mut self, event: &ScrollEvent) {
        self.engine.on_momentum_scroll_begin();
        if let Some(cb) = &self.props.on_momentum_scroll_begin {
            cb(event);
        }
    }

    pub fn on_momentum_scroll_end(&mut self, event: &ScrollEvent, now_ms: u64) {
        self.engine.on_momentum_scroll_end(now_ms);
        if let Some(cb) = &self.props.on_momentum_scroll_end {
            cb(event);
        }
    }

    /// Layout callback of the leading-slot wrapper around the large header.
    pub fn on_large_header_layout(&mut self, rect: LayoutRect, now_ms: u64) {
        self.engine.on_large_header_layout(rect, now_ms);
        if let Some(cb) = &self.props.on_large_header_layout {
            cb(rect);
        }
    }

    /// Layout callback of the floating small header. Ignored for inline headers.
    pub fn on_absolute_header_layout(&mut self, rect: LayoutRect) {
        if !self.props.absolute_header {
            atrace!("on_absolute_header_layout ignored for inline header");
            return;
        }
        self.engine.on_absolute_header_layout(rect);
    }

    /// Advances the container to `now_ms`.
    ///
    /// Polled kinds mirror the primitive's offset first. A snap correction, if one fires, is
    /// forwarded to [`ScrollPrimitive::scroll_to`] and also returned.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if self.kind.scroll_source() == ScrollSource::Polled {
            if let Some(offset) = self.primitive.polled_offset() {
                if offset != self.engine.scroll_offset() {
                    self.engine.set_scroll_offset(offset, now_ms);
                }
            }
        }

        let cmd = self.engine.tick(now_ms)?;
        adebug!(
            kind = self.kind.name(),
            offset = cmd.offset,
            "dispatching snap scroll"
        );
        self.primitive.scroll_to(cmd.offset, cmd.animated);
        Some(cmd)
    }

    /// Builds the frame to draw, invoking the header renderers.
    pub fn render(&self, safe_area: Insets) -> ContainerFrame<N> {
        let render_props = self.render_props();
        let small = (self.props.header)(&render_props);
        let header = if self.props.absolute_header {
            HeaderSlot::Absolute(small)
        } else {
            HeaderSlot::Inline(small)
        };

        let large_header = self.props.large_header.as_ref().map(|render| {
            let node = render(&render_props);
            if self.props.disable_large_header_fade_anim {
                LargeHeaderNode::Plain(node)
            } else {
                LargeHeaderNode::Faded {
                    node,
                    fade: FadingView::new(self.engine.large_header_opacity()),
                }
            }
        });
        let subtitle = self
            .props
            .large_header_subtitle
            .as_ref()
            .map(|render| render(&render_props));

        let mut adjustments = self.engine.scroll_view_adjustments();
        adjustments.scroll_indicator_insets = self
            .props
            .scroll_indicator_insets
            .apply(adjustments.scroll_indicator_insets);

        ContainerFrame {
            kind: self.kind,
            container_padding: Insets {
                left: if self.props.ignore_left_safe_area {
                    0.0
                } else {
                    safe_area.left
                },
                right: if self.props.ignore_right_safe_area {
                    0.0
                } else {
                    safe_area.right
                },
                ..Insets::ZERO
            },
            header,
            leading_slot: self.kind.leading_slot(),
            leading: LeadingContent {
                large_header,
                subtitle,
            },
            adjustments,
            automatically_adjusts_scroll_indicator_insets: self
                .props
                .automatically_adjusts_scroll_indicator_insets
                .unwrap_or(!self.props.absolute_header),
            inverted: self.engine.options().inverted,
        }
    }
}

impl<P: fmt::Debug, N> fmt::Debug for ScrollContainerWithHeaders<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollContainerWithHeaders")
            .field("kind", &self.kind)
            .field("primitive", &self.primitive)
            .field("engine", &self.engine)
            .field("props", &self.props)
            .finish()
    }
}
