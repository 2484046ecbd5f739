use super::helpers::make_scene_pipeline;
use crate::constants::MARKER_BASE_SIZE;
use crate::core::{Visibility, Waypoint};
use glam::Vec3;
use wgpu;

/// Per-instance data for one marker billboard.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerInstance {
    pub center_size: [f32; 4],
    pub color_glow: [f32; 4],
    pub shape: [f32; 4],
    /// World-space length of the glow falloff.
    pub glow_reach: f32,
}

impl MarkerInstance {
    pub fn new(waypoint: &Waypoint, vis: Visibility, hovered: bool) -> Self {
        let p = waypoint.position;
        let radius = MARKER_BASE_SIZE * vis.scale;
        let [r, g, b] = waypoint.color;
        let glyph = waypoint.glyph;
        Self {
            center_size: [p.x, p.y, p.z, radius],
            color_glow: [r, g, b, vis.glow_intensity()],
            shape: [
                glyph.sides() as f32,
                if glyph.outlined() { 1.0 } else { 0.0 },
                glyph.rotation(),
                if hovered { 1.0 } else { 0.0 },
            ],
            glow_reach: vis.glow_distance(),
        }
    }

    #[inline]
    fn center(&self) -> Vec3 {
        Vec3::new(self.center_size[0], self.center_size[1], self.center_size[2])
    }
}

const ATTRIBS: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4, 2 => Float32x4, 3 => Float32];

pub(crate) struct MarkerResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instance_buffer: wgpu::Buffer,
    capacity: usize,
    count: u32,
}

pub(crate) fn create_marker_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    capacity: usize,
) -> MarkerResources {
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MarkerInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &ATTRIBS,
    }];
    let pipeline = make_scene_pipeline(
        device,
        "marker_pipeline",
        layout,
        shader,
        ("vs_marker", "fs_marker"),
        &buffers,
        color_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
    );
    let capacity = capacity.max(1);
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: (capacity * std::mem::size_of::<MarkerInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    MarkerResources {
        pipeline,
        instance_buffer,
        capacity,
        count: 0,
    }
}

/// Order instances far-to-near from `eye` so alpha blending composites correctly.
pub(crate) fn sort_back_to_front(instances: &mut [MarkerInstance], eye: Vec3) {
    instances.sort_by(|a, b| {
        let da = a.center().distance_squared(eye);
        let db = b.center().distance_squared(eye);
        db.total_cmp(&da)
    });
}

impl MarkerResources {
    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, instances: &[MarkerInstance]) {
        let n = instances.len().min(self.capacity);
        if n < instances.len() {
            log::warn!(
                "marker instances truncated: {} > capacity {}",
                instances.len(),
                self.capacity
            );
        }
        self.count = 0;
        if n == 0 {
            return;
        }
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&instances[..n]),
        );
        self.count = n as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene_bg: &wgpu::BindGroup) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
