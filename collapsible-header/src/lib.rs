//! A headless engine for iOS-style collapsing headers.
//!
//! For container adapters (scroll view, flat/section lists, flash/masonry lists), see the
//! `collapsible-header-adapter` crate.
//!
//! The engine keeps a "large header" (hero content at rest) and a "small header" (persistent
//! nav bar) in sync with the scroll offset of a scrollable container: nav-bar visibility,
//! large-header opacity, absolute-header insets, and a debounced auto-snap correction that
//! resolves a half-collapsed large header to one of its two stable endpoints.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll offsets (native scroll events or a polled offset)
//! - layout measurements for the large header and, optionally, a floating small header
//! - drag/momentum lifecycle events
//! - a frame clock (`now_ms`) and an imperative "scroll to offset" operation
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod corrector;
mod engine;
mod error;
mod interpolate;
mod options;
mod shared;
mod signal;
mod timing;
mod types;

#[cfg(test)]
mod tests;

pub use corrector::{AutoSnapCorrector, SnapState, snap_target};
pub use engine::{HeaderEngine, ScrollWorklet};
pub use error::HeaderError;
pub use interpolate::{Extrapolation, interpolate};
pub use options::{
    DEFAULT_ADJUSTMENT_OFFSET, DEFAULT_FADE_DURATION_MS, DEFAULT_FIX_SCROLL_DELAY_MS,
    HeaderOptions,
};
pub use shared::{SharedValue, Subscriber, ValueWriter};
pub use signal::ScrollSignal;
pub use timing::{AnimatedValue, Easing, Tween};
pub use types::{
    HeaderPhase, HeaderSnapshot, Insets, LayoutRect, Point, ScrollAxis, ScrollCommand,
    ScrollEvent, ScrollViewAdjustments,
};
