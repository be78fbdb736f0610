use std::sync::Arc;
use std::time::Instant;

use crate::utils::camera::Camera;
use crate::utils::mesh::{PlaneMesh, PlaneVertex};
use crate::utils::scene_params::{SceneParams, SceneUniforms};
use crate::utils::shader_constants::{PLANE_HEIGHT, PLANE_SEGMENTS, PLANE_WIDTH, SCENE_SHADER};
use crate::utils::{catch_panic_mut, validate_shader, SceneError};
use eframe::epaint;
use eframe::wgpu::util::DeviceExt;
use eframe::wgpu::{BindGroup, Buffer, Device, RenderPipeline};

/// Depth test for the plane: nearer noise bumps hide the ones behind them.
/// Without a depth attachment, triangles draw in index order.
pub fn depth_state(
    depth_format: Option<egui_wgpu::wgpu::TextureFormat>,
) -> Option<egui_wgpu::wgpu::DepthStencilState> {
    depth_format.map(|format| egui_wgpu::wgpu::DepthStencilState {
        format,
        depth_write_enabled: true,
        depth_compare: egui_wgpu::wgpu::CompareFunction::Less,
        stencil: egui_wgpu::wgpu::StencilState::default(),
        bias: egui_wgpu::wgpu::DepthBiasState::default(),
    })
}

// GPU objects for the displaced plane
pub struct ScenePipeline {
    pub pipeline: RenderPipeline,
    pub uniform_buffer: Buffer,
    pub bind_group: BindGroup,
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
    pub start_time: Instant,
}

impl ScenePipeline {
    /// Validate the scene shader, then build the pipeline with wgpu panics caught
    ///
    /// `depth_format` must match the depth attachment of egui's render pass.
    pub fn new(
        device: &Device,
        format: egui_wgpu::wgpu::TextureFormat,
        depth_format: Option<egui_wgpu::wgpu::TextureFormat>,
    ) -> Result<Self, SceneError> {
        Self::with_source(device, format, depth_format, SCENE_SHADER)
    }

    pub fn with_source(
        device: &Device,
        format: egui_wgpu::wgpu::TextureFormat,
        depth_format: Option<egui_wgpu::wgpu::TextureFormat>,
        wgsl_src: &str,
    ) -> Result<Self, SceneError> {
        log::debug!(
            "Creating scene pipeline ({} bytes of WGSL, depth {:?})",
            wgsl_src.len(),
            depth_format
        );
        validate_shader(wgsl_src)?;

        catch_panic_mut(|| Self::build(device, format, depth_format, wgsl_src))
            .map_err(SceneError::PipelineCreation)
    }

    fn build(
        device: &Device,
        format: egui_wgpu::wgpu::TextureFormat,
        depth_format: Option<egui_wgpu::wgpu::TextureFormat>,
        wgsl_src: &str,
    ) -> Self {
        let shader = device.create_shader_module(egui_wgpu::wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: egui_wgpu::wgpu::ShaderSource::Wgsl(wgsl_src.into()),
        });

        let uniform_size = std::mem::size_of::<SceneUniforms>() as u64;
        log::trace!("Creating uniform buffer ({} bytes)", uniform_size);
        let uniform_buffer = device.create_buffer(&egui_wgpu::wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: uniform_size,
            usage: egui_wgpu::wgpu::BufferUsages::COPY_DST | egui_wgpu::wgpu::BufferUsages::UNIFORM,
            mapped_at_creation: false,
        });

        let mesh = PlaneMesh::new(PLANE_WIDTH, PLANE_HEIGHT, PLANE_SEGMENTS, PLANE_SEGMENTS);
        let vertex_buffer = device.create_buffer_init(&egui_wgpu::wgpu::util::BufferInitDescriptor {
            label: Some("plane_vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: egui_wgpu::wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&egui_wgpu::wgpu::util::BufferInitDescriptor {
            label: Some("plane_indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: egui_wgpu::wgpu::BufferUsages::INDEX,
        });

        let uniform_bgl =
            device.create_bind_group_layout(&egui_wgpu::wgpu::BindGroupLayoutDescriptor {
                label: Some("scene_bgl"),
                entries: &[egui_wgpu::wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: egui_wgpu::wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: egui_wgpu::wgpu::BindingType::Buffer {
                        ty: egui_wgpu::wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&egui_wgpu::wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &uniform_bgl,
            entries: &[egui_wgpu::wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout =
            device.create_pipeline_layout(&egui_wgpu::wgpu::PipelineLayoutDescriptor {
                label: Some("scene_pipeline_layout"),
                bind_group_layouts: &[&uniform_bgl],
                push_constant_ranges: &[],
            });

        let pipeline = device.create_render_pipeline(&egui_wgpu::wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: egui_wgpu::wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: egui_wgpu::wgpu::PipelineCompilationOptions::default(),
                buffers: &[PlaneVertex::layout()],
            },
            fragment: Some(egui_wgpu::wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: egui_wgpu::wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(egui_wgpu::wgpu::ColorTargetState {
                    format,
                    blend: Some(egui_wgpu::wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: egui_wgpu::wgpu::ColorWrites::ALL,
                })],
            }),
            // Both faces visible
            primitive: egui_wgpu::wgpu::PrimitiveState {
                topology: egui_wgpu::wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: depth_state(depth_format),
            multisample: egui_wgpu::wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        log::info!(
            "Scene pipeline created (format: {:?}, {} vertices, {} indices)",
            format,
            mesh.vertices.len(),
            mesh.indices.len()
        );

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            start_time: Instant::now(),
        }
    }
}

impl Drop for ScenePipeline {
    fn drop(&mut self) {
        log::info!("Releasing scene pipeline");
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        self.uniform_buffer.destroy();
    }
}

// Per-frame draw of the plane; carries a snapshot of the panel state
pub struct SceneCallback {
    pub shader: Arc<ScenePipeline>,
    pub params: SceneParams,
    pub camera: Camera,
    /// Full surface size in points; drives the camera aspect
    pub surface_size: [f32; 2],
}

impl egui_wgpu::CallbackTrait for SceneCallback {
    fn prepare(
        &self,
        _device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _encoder: &mut eframe::wgpu::CommandEncoder,
        _resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        let elapsed = self.shader.start_time.elapsed().as_secs_f32();

        let [w, h] = self.surface_size;
        let view_proj = self.camera.view_projection(w / h);
        let ppp = screen_descriptor.pixels_per_point;
        let resolution = [w * ppp, h * ppp];

        let uniforms = self.params.to_uniforms(elapsed, view_proj, resolution);

        queue.write_buffer(
            &self.shader.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );
        Vec::new()
    }

    fn paint(
        &self,
        _info: epaint::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _resources: &egui_wgpu::CallbackResources,
    ) {
        render_pass.set_pipeline(&self.shader.pipeline);
        render_pass.set_bind_group(0, &self.shader.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.shader.vertex_buffer.slice(..));
        render_pass.set_index_buffer(
            self.shader.index_buffer.slice(..),
            eframe::wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(0..self.shader.index_count, 0, 0..1);

        // Log first render only
        static FIRST_RENDER: std::sync::Once = std::sync::Once::new();
        FIRST_RENDER.call_once(|| {
            log::debug!("First scene render executed ({} indices)", self.shader.index_count);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::shader_constants::DEPTH_BUFFER_BITS;
    use egui_wgpu::wgpu;

    #[test]
    fn test_depth_state_matches_requested_buffer() {
        let format = egui_wgpu::depth_format_from_bits(DEPTH_BUFFER_BITS, 0);
        assert_eq!(format, Some(wgpu::TextureFormat::Depth32Float));

        let state = depth_state(format).expect("depth state for a depth attachment");
        assert_eq!(state.format, wgpu::TextureFormat::Depth32Float);
        assert!(state.depth_write_enabled);
        assert_eq!(state.depth_compare, wgpu::CompareFunction::Less);
    }

    #[test]
    fn test_no_depth_attachment_means_no_depth_state() {
        assert!(depth_state(None).is_none());
    }
}
