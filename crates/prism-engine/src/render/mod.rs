//! GPU rendering subsystem.
//!
//! Renderers receive an explicit [`RenderCtx`] (device/queue/format) and a
//! [`RenderTarget`] (encoder + color view) instead of relying on any
//! implicit "currently bound" state; every bind lives inside a pass.

mod ctx;
mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::TriangleRenderer;
