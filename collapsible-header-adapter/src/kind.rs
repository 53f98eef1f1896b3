/// The scrollable primitives a header container can wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerKind {
    ScrollView,
    FlatList,
    SectionList,
    FlashList,
    MasonryFlashList,
}

/// Where the large header goes inside the scrollable content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadingSlot {
    /// Rendered as the first child of the scroll content.
    FirstChild,
    /// Rendered through the list's header component slot.
    ListHeader,
}

/// How the primitive reports its scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollSource {
    /// The primitive exposes an offset the container mirrors on every tick.
    Polled,
    /// The offset arrives through native scroll callbacks only.
    NativeEvents,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 5] = [
        Self::ScrollView,
        Self::FlatList,
        Self::SectionList,
        Self::FlashList,
        Self::MasonryFlashList,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ScrollView => "ScrollView",
            Self::FlatList => "FlatList",
            Self::SectionList => "SectionList",
            Self::FlashList => "FlashList",
            Self::MasonryFlashList => "MasonryFlashList",
        }
    }

    pub fn leading_slot(self) -> LeadingSlot {
        match self {
            Self::ScrollView => LeadingSlot::FirstChild,
            _ => LeadingSlot::ListHeader,
        }
    }

    pub fn scroll_source(self) -> ScrollSource {
        match self {
            Self::ScrollView | Self::FlatList => ScrollSource::Polled,
            Self::SectionList | Self::FlashList | Self::MasonryFlashList => {
                ScrollSource::NativeEvents
            }
        }
    }

    /// Whether the primitive can render bottom-anchored (inverted) content.
    pub fn supports_inverted(self) -> bool {
        matches!(self, Self::FlatList | Self::SectionList | Self::FlashList)
    }
}
