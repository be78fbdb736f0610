//! Subdivided plane geometry
//!
//! Vertices are laid out row by row from the top edge, like a
//! three.js `PlaneGeometry`, so the UVs the shader sees have v = 1 at the top.

use eframe::wgpu;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl PlaneVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PlaneVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

pub struct PlaneMesh {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u32>,
}

impl PlaneMesh {
    /// Plane in z = 0 centered on the origin. Segment counts below 1 are raised to 1.
    pub fn new(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        let grid_x = width_segments.max(1);
        let grid_y = height_segments.max(1);
        let grid_x1 = grid_x + 1;
        let grid_y1 = grid_y + 1;

        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let seg_w = width / grid_x as f32;
        let seg_h = height / grid_y as f32;

        let mut vertices = Vec::with_capacity((grid_x1 * grid_y1) as usize);
        for iy in 0..grid_y1 {
            let y = iy as f32 * seg_h - half_h;
            for ix in 0..grid_x1 {
                let x = ix as f32 * seg_w - half_w;
                vertices.push(PlaneVertex {
                    position: [x, -y, 0.0],
                    uv: [
                        ix as f32 / grid_x as f32,
                        1.0 - iy as f32 / grid_y as f32,
                    ],
                });
            }
        }

        let mut indices = Vec::with_capacity((grid_x * grid_y * 6) as usize);
        for iy in 0..grid_y {
            for ix in 0..grid_x {
                let a = ix + grid_x1 * iy;
                let b = ix + grid_x1 * (iy + 1);
                let c = (ix + 1) + grid_x1 * (iy + 1);
                let d = (ix + 1) + grid_x1 * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        log::trace!(
            "Plane mesh built: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );

        Self { vertices, indices }
    }
}
