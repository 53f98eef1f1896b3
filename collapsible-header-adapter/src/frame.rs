use collapsible_header::{Insets, ScrollViewAdjustments};

use crate::{ContainerKind, FadingView, LeadingSlot};

/// The small header, placed inline above the scroll content or floating over it.
#[derive(Clone, Debug)]
pub enum HeaderSlot<N> {
    Inline(N),
    /// Positioned at the top of the container; its layout feeds the absolute header height.
    Absolute(N),
}

impl<N> HeaderSlot<N> {
    pub fn node(&self) -> &N {
        match self {
            Self::Inline(n) | Self::Absolute(n) => n,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }
}

/// The large header, wrapped in a fade unless the fade is disabled.
#[derive(Clone, Debug)]
pub enum LargeHeaderNode<N> {
    Faded { node: N, fade: FadingView },
    Plain(N),
}

impl<N> LargeHeaderNode<N> {
    pub fn node(&self) -> &N {
        match self {
            Self::Faded { node, .. } | Self::Plain(node) => node,
        }
    }
}

/// Content rendered in the scrollable's leading slot.
#[derive(Clone, Debug)]
pub struct LeadingContent<N> {
    /// Its layout must be reported through `on_large_header_layout`.
    pub large_header: Option<LargeHeaderNode<N>>,
    pub subtitle: Option<N>,
}

impl<N> LeadingContent<N> {
    pub fn is_empty(&self) -> bool {
        self.large_header.is_none() && self.subtitle.is_none()
    }
}

/// Everything a UI layer needs to lay out one header container for a frame.
#[derive(Clone, Debug)]
pub struct ContainerFrame<N> {
    pub kind: ContainerKind,
    /// Left/right safe-area padding of the root container.
    pub container_padding: Insets,
    pub header: HeaderSlot<N>,
    pub leading_slot: LeadingSlot,
    pub leading: LeadingContent<N>,
    /// Content padding and scroll indicator insets (caller overrides already applied).
    pub adjustments: ScrollViewAdjustments,
    pub automatically_adjusts_scroll_indicator_insets: bool,
    pub inverted: bool,
}
