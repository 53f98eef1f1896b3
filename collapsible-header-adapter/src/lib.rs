//! Container adapters for the `collapsible-header` crate.
//!
//! The `collapsible-header` crate is UI-agnostic and focuses on the scroll-to-header-state
//! math. This crate wires that engine into scrollable containers:
//!
//! - One generic container ([`ScrollContainerWithHeaders`]) over a small [`ScrollPrimitive`]
//!   trait, covering scroll views, flat lists, section lists, flash lists and masonry lists
//! - Render-prop style header slots (small header, large header, large header subtitle)
//! - Presentational helpers that turn shared values into styles (fading, scaling, border)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings): header renderers
//! return whatever node type your UI layer uses.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod border;
mod container;
mod fading;
mod frame;
mod kind;
mod primitive;
mod props;
mod scaling;


pub use border::{DEFAULT_BORDER_COLOR, HeaderBottomBorder, Rgba};
pub use container::ScrollContainerWithHeaders;
pub use fading::{FadeStyle, FadingView, PointerEvents};
pub use frame::{ContainerFrame, HeaderSlot, LargeHeaderNode, LeadingContent};
pub use kind::{ContainerKind, LeadingSlot, ScrollSource};
pub use primitive::ScrollPrimitive;
pub use props::{
    ContainerProps, EdgeOverrides, HeaderRenderProps, HeaderRenderer, LayoutCallback,
    ScrollCallback,
};
pub use scaling::{ScaleTransform, ScalingView, TranslationDirection};
