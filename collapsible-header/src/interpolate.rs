/// What happens to inputs outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extrapolation {
    /// Continue the edge segment's slope.
    #[default]
    Extend,
    /// Pin to the nearest output edge.
    Clamp,
}

/// Maps `value` from `input` to `output` linearly.
///
/// A degenerate input range (`input.0 == input.1`) returns `output.0`.
pub fn interpolate(
    value: f32,
    input: (f32, f32),
    output: (f32, f32),
    extrapolation: Extrapolation,
) -> f32 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    let span = in_end - in_start;
    if span == 0.0 {
        return out_start;
    }
    let mut t = (value - in_start) / span;
    if extrapolation == Extrapolation::Clamp {
        t = t.clamp(0.0, 1.0);
    }
    out_start + (out_end - out_start) * t
}
