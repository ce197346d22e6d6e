use crate::mesh::{TriangleMesh, Vertex};
use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{ShaderError, ShaderProgram, ShaderSource};

/// Draws the fixed triangle with a program built from two source files.
///
/// Owns both GPU-side pieces (program + mesh) for the program's lifetime;
/// both are created once here and released once in [`destroy`].
///
/// [`destroy`]: TriangleRenderer::destroy
pub struct TriangleRenderer {
    program: ShaderProgram,
    mesh: TriangleMesh,
}

impl TriangleRenderer {
    /// Builds the shader program and uploads the triangle.
    ///
    /// Any [`ShaderError`] here is fatal to startup; the caller aborts
    /// before the render loop begins.
    pub fn new(
        ctx: &RenderCtx<'_>,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
    ) -> Result<Self, ShaderError> {
        let program = ShaderProgram::build(
            ctx.device,
            ctx.surface_format,
            vertex,
            fragment,
            &[Vertex::layout()],
        )?;
        let mesh = TriangleMesh::new(ctx.device);

        Ok(Self { program, mesh })
    }

    /// Records one draw of the triangle.
    ///
    /// The pass loads the existing surface contents; the surrounding frame
    /// (`FrameCtx::render`) has already cleared.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("prism triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(self.program.pipeline());
        rpass.set_vertex_buffer(0, self.mesh.buffer().slice(..));
        rpass.draw(0..self.mesh.vertex_count(), 0..1);
    }

    /// Tears down mesh then program, exactly once (enforced by the move).
    pub fn destroy(self) {
        self.mesh.destroy();
        drop(self.program);
        log::debug!("triangle renderer destroyed");
    }
}

#[cfg(test)]
mod gpu_tests {
    use super::*;
    use crate::shader::ShaderStage;

    const VS: &str = r#"
        struct VsOut {
            @builtin(position) position: vec4<f32>,
            @location(0) color: vec3<f32>,
        }

        @vertex
        fn vs_main(@location(0) position: vec3<f32>, @location(1) color: vec3<f32>) -> VsOut {
            var result: VsOut;
            result.position = vec4<f32>(position, 1.0);
            result.color = color;
            return result;
        }
    "#;

    const FS: &str = r#"
        @fragment
        fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
            return vec4<f32>(color, 1.0);
        }
    "#;

    /// Headless device, or `None` where no adapter exists (CI without a
    /// software rasterizer). Tests below skip in that case.
    fn gpu() -> Option<(wgpu::Device, wgpu::Queue)> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter =
            pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default()))
                .ok()?;
        pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("prism test device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        }))
        .ok()
    }

    #[test]
    fn builds_draws_and_tears_down_offscreen() {
        let Some((device, queue)) = gpu() else {
            eprintln!("no GPU adapter available; skipping");
            return;
        };

        let format = wgpu::TextureFormat::Rgba8Unorm;
        let ctx = RenderCtx::new(&device, &queue, format);
        let vertex = ShaderSource::from_text(ShaderStage::Vertex, VS);
        let fragment = ShaderSource::from_text(ShaderStage::Fragment, FS);

        let renderer = TriangleRenderer::new(&ctx, &vertex, &fragment).unwrap();

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("prism test target"),
            size: wgpu::Extent3d {
                width: 64,
                height: 64,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("prism test encoder"),
        });
        {
            let mut target = RenderTarget::new(&mut encoder, &view);
            renderer.render(&mut target);
        }
        queue.submit(std::iter::once(encoder.finish()));

        renderer.destroy();
    }

    #[test]
    fn every_mesh_instance_reports_three_vertices() {
        let Some((device, _queue)) = gpu() else {
            eprintln!("no GPU adapter available; skipping");
            return;
        };

        for _ in 0..3 {
            let mesh = TriangleMesh::new(&device);
            assert_eq!(mesh.vertex_count(), 3);
            mesh.destroy();
        }
    }
}
