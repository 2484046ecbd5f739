use super::helpers::make_scene_pipeline;
use wgpu;

pub(crate) struct GroundResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_ground_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
) -> GroundResources {
    let pipeline = make_scene_pipeline(
        device,
        "ground_pipeline",
        layout,
        shader,
        ("vs_ground", "fs_ground"),
        &[],
        color_format,
        None,
    );
    GroundResources { pipeline }
}

impl GroundResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene_bg: &wgpu::BindGroup) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        rpass.draw(0..6, 0..1);
    }
}
