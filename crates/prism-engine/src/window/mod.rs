//! Window runtime.
//!
//! Owns the winit event loop and the single application window, drives the
//! `core::App` hooks, and keeps the surface configured.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
