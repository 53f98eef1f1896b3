use collapsible_header::SharedValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// `0xRRGGBBAA`.
    pub const fn from_u32(rgba: u32) -> Self {
        Self {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
            a: rgba as u8,
        }
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t + 0.5) as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

pub const DEFAULT_BORDER_COLOR: Rgba = Rgba::from_u32(0xE5E5_E5FF);

/// The hairline under the small header; its color follows nav-bar visibility.
#[derive(Clone, Debug)]
pub struct HeaderBottomBorder {
    opacity: SharedValue,
    pub initial_border_color: Rgba,
    pub border_color: Rgba,
    pub border_width: f32,
}

impl HeaderBottomBorder {
    pub fn new(opacity: SharedValue) -> Self {
        Self {
            opacity,
            initial_border_color: DEFAULT_BORDER_COLOR,
            border_color: DEFAULT_BORDER_COLOR,
            border_width: 1.0,
        }
    }

    pub fn with_colors(mut self, initial: Rgba, collapsed: Rgba) -> Self {
        self.initial_border_color = initial;
        self.border_color = collapsed;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn color(&self) -> Rgba {
        self.initial_border_color.lerp(self.border_color, self.opacity.get())
    }
}
