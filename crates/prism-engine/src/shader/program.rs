use super::compile::compile_stage;
use super::error::ShaderError;
use super::link::check_interface;
use super::source::ShaderSource;

/// A linked, drawable shader program.
///
/// Exists only if both stages compiled, the interface check passed, and the
/// pipeline was created; a failed build yields a [`ShaderError`], never a
/// partial value.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    /// Compiles both stages, links them, and creates the render pipeline.
    ///
    /// `buffers` describes the vertex inputs (slot order = buffer bind
    /// order); `format` is the color target the program will render to.
    pub fn build(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
        buffers: &[wgpu::VertexBufferLayout<'_>],
    ) -> Result<Self, ShaderError> {
        for source in [vertex, fragment] {
            if let Some(path) = source.path() {
                log::debug!("compiling {} shader from {}", source.stage(), path.display());
            }
        }

        let vs = compile_stage(vertex)?;
        let fs = compile_stage(fragment)?;
        let entries = check_interface(&vs, &fs)?;

        // Front-end validation already passed, so module creation cannot
        // fail for source reasons; the device re-parses the same text.
        let vs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("prism vertex shader"),
            source: wgpu::ShaderSource::Wgsl(vertex.text().into()),
        });
        let fs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("prism fragment shader"),
            source: wgpu::ShaderSource::Wgsl(fragment.text().into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("prism shader program"),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(&entries.vertex),
                compilation_options: Default::default(),
                buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(&entries.fragment),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        // The intermediate stage modules are no longer needed once the
        // pipeline exists; only the program survives.
        log::debug!(
            "shader program linked (vertex `{}`, fragment `{}`)",
            entries.vertex,
            entries.fragment
        );

        Ok(Self { pipeline })
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}
