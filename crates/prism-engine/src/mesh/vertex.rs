use bytemuck::{Pod, Zeroable};

/// Interleaved vertex: NDC position followed by linear RGB color.
///
/// The byte layout is load-bearing: `Vertex::layout()` describes this exact
/// struct to the pipeline, so any field change must keep the two in sync.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    /// Typed descriptor binding this struct's memory layout to the shader's
    /// input locations.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The one mesh this program ever draws.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: [1.0, 0.5, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.5],
    },
    Vertex {
        position: [0.0, 0.5, 0.0],
        color: [0.5, 0.0, 1.0],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

        let [position, color] = Vertex::ATTRS;
        assert_eq!(position.shader_location, 0);
        assert_eq!(position.offset, 0);
        assert_eq!(position.format, wgpu::VertexFormat::Float32x3);
        assert_eq!(color.shader_location, 1);
        assert_eq!(color.offset, 12);
        assert_eq!(color.format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn triangle_has_three_vertices() {
        assert_eq!(TRIANGLE.len(), 3);
    }

    #[test]
    fn triangle_flattens_to_the_fixed_literals() {
        let floats: &[f32] = bytemuck::cast_slice(&TRIANGLE);
        #[rustfmt::skip]
        let expected: [f32; 18] = [
            -0.5, -0.5, 0.0,   1.0, 0.5, 0.0,
             0.5, -0.5, 0.0,   0.0, 1.0, 0.5,
             0.0,  0.5, 0.0,   0.5, 0.0, 1.0,
        ];
        assert_eq!(floats, &expected);
    }
}
