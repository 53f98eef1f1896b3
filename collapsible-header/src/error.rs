use thiserror::Error;

/// Integration errors surfaced when a header container is set up.
///
/// None of these are runtime conditions: each one points at a caller bug that must be fixed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HeaderError {
    /// A direct scroll callback was supplied; the engine must own the canonical scroll handler.
    #[error(
        "the `on_scroll` property is not supported; use `on_scroll_worklet` to track the scroll container's state"
    )]
    ScrollHandlerOverride,

    #[error("invalid header option `{name}`: {value} (expected a finite, non-negative number)")]
    InvalidOption { name: &'static str, value: f32 },
}
