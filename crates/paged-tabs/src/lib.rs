//! Paged tab bar component for Leptos.
//!
//! A header strip of tab markers with an animated underline, synced to a
//! horizontally paginated content region: dragging the pages moves the
//! underline and fades the markers continuously, clicking a marker
//! scrolls to its page.

pub mod geometry;
pub mod route;
pub mod style;
pub mod tab_bar;

pub use route::RouteDescriptor;
pub use tab_bar::{ScrollViewProps, TabBar};
