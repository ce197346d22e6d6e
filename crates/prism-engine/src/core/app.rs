use anyhow::Result;
use winit::event::WindowEvent;

use crate::render::RenderCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the driver.
pub trait App {
    /// Called exactly once, after the window and GPU context exist and
    /// before the first frame. GPU resources the app needs for the whole
    /// run (pipelines, buffers) are built here.
    ///
    /// An `Err` aborts the runtime before the render loop starts and is
    /// returned from `Runtime::run`.
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called for window events; return [`AppControl::Exit`] to quit.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
