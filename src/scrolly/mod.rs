//! Scroll-synchronised section engine: active item from page scroll,
//! per-item screenshot carousels and drag-to-scroll device viewports.
//!
//! Everything except [`subscription`] and [`viewport`] is plain state that
//! the components drive from DOM events.

pub mod carousel;
pub mod drag;
pub mod mapper;
pub mod mode;
pub mod subscription;
pub mod viewport;

pub use carousel::{Carousel, CarouselSet};
pub use drag::{DragInput, DragScroll};
pub use mapper::{ActiveIndexMapper, ContainerMetrics, ITEM_HEIGHT_VH};
pub use mode::LayoutMode;

/// Scroll events are coalesced to roughly one per frame.
pub const SCROLL_THROTTLE_MS: u32 = 16;
