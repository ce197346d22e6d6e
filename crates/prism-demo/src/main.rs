use std::path::PathBuf;

use anyhow::{Context, Result};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::GpuInit;
use prism_engine::logging::{self, LoggingConfig};
use prism_engine::render::{RenderCtx, TriangleRenderer};
use prism_engine::shader::{ShaderSource, ShaderStage};
use prism_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

fn main() -> Result<()> {
    logging::init_logging(LoggingConfig::default());

    // Both sources are read in full before the window opens; a missing or
    // unreadable file never reaches the GPU.
    let vertex = ShaderSource::from_file(ShaderStage::Vertex, shader_path("vertex.wgsl"))?;
    let fragment = ShaderSource::from_file(ShaderStage::Fragment, shader_path("fragment.wgsl"))?;

    let config = RuntimeConfig {
        title: "prism triangle".to_string(),
        ..Default::default()
    };

    Runtime::run(config, GpuInit::default(), TriangleApp::new(vertex, fragment))
}

/// Looks for `shaders/<name>` relative to the working directory first, then
/// falls back to the copy shipped next to this crate's manifest.
fn shader_path(name: &str) -> PathBuf {
    let local = PathBuf::from("shaders").join(name);
    if local.exists() {
        return local;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("shaders")
        .join(name)
}

struct TriangleApp {
    vertex: ShaderSource,
    fragment: ShaderSource,
    renderer: Option<TriangleRenderer>,

    fps_elapsed: f32,
    fps_frames: u32,
}

impl TriangleApp {
    fn new(vertex: ShaderSource, fragment: ShaderSource) -> Self {
        Self {
            vertex,
            fragment,
            renderer: None,
            fps_elapsed: 0.0,
            fps_frames: 0,
        }
    }
}

impl App for TriangleApp {
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let renderer = TriangleRenderer::new(ctx, &self.vertex, &self.fragment)
            .context("failed to build the triangle renderer")?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.fps_elapsed += ctx.time.dt;
        self.fps_frames += 1;
        if self.fps_elapsed >= 1.0 {
            log::debug!("{:.0} fps", self.fps_frames as f32 / self.fps_elapsed);
            self.fps_elapsed = 0.0;
            self.fps_frames = 0;
        }

        let renderer = self.renderer.as_ref();
        ctx.render(CLEAR_COLOR, |_rctx, target| {
            if let Some(renderer) = renderer {
                renderer.render(target);
            }
        })
    }
}

impl Drop for TriangleApp {
    fn drop(&mut self) {
        // Teardown runs on every exit path; the consuming destroy keeps it
        // to exactly once.
        if let Some(renderer) = self.renderer.take() {
            renderer.destroy();
        }
    }
}
