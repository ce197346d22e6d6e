use wgpu::util::DeviceExt;

use super::vertex::TRIANGLE;

/// GPU-side resource for the fixed triangle.
///
/// The vertex buffer is uploaded once at construction and never written
/// again. The resource owns its buffer exclusively; teardown consumes the
/// value, so double-release and use-after-release do not compile.
pub struct TriangleMesh {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl TriangleMesh {
    pub fn new(device: &wgpu::Device) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism triangle vbo"),
            contents: bytemuck::cast_slice(&TRIANGLE),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            vertex_count: TRIANGLE.len() as u32,
        }
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    /// Number of vertices to draw. Always 3.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Releases the GPU allocation eagerly.
    ///
    /// Dropping the mesh also frees the buffer; `destroy` exists so teardown
    /// can be ordered explicitly at shutdown.
    pub fn destroy(self) {
        self.vertex_buffer.destroy();
        log::debug!("triangle mesh destroyed");
    }
}
