use crate::camera::Camera;
use crate::constants::{CLEAR_COLOR, GRID_SPACING, GROUND_EXTENT};
use web_sys as web;

mod ground;
mod helpers;
mod markers;

use ground::{create_ground_resources, GroundResources};
use helpers::{create_scene_binding, SceneBinding, SceneUniforms};
use markers::{create_marker_resources, MarkerResources};

pub use markers::MarkerInstance;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneBinding,
    ground: GroundResources,
    markers: MarkerResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        marker_capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let scene = create_scene_binding(&device);
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene.layout],
            push_constant_ranges: &[],
        });
        let ground = create_ground_resources(&device, &pipeline_layout, &shader, format);
        let markers =
            create_marker_resources(&device, &pipeline_layout, &shader, format, marker_capacity);

        log::info!(
            "[waypoints] WebGPU ready {}x{} format={:?}",
            width,
            height,
            format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            ground,
            markers,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0] as f64,
                g: CLEAR_COLOR[1] as f64,
                b: CLEAR_COLOR[2] as f64,
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn write_scene_uniforms(&self, camera: &Camera) {
        let right = camera.right();
        let up = camera.billboard_up();
        let u = SceneUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            cam_right: [right.x, right.y, right.z, GRID_SPACING],
            cam_up: [up.x, up.y, up.z, 0.0],
            eye_time: [camera.eye.x, camera.eye.y, camera.eye.z, self.time_accum],
            fog: [CLEAR_COLOR[0], CLEAR_COLOR[1], CLEAR_COLOR[2], GROUND_EXTENT],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    /// Draw the ground and the given markers (reordered back-to-front).
    pub fn render(
        &mut self,
        dt_sec: f32,
        camera: &Camera,
        instances: &mut [MarkerInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.write_scene_uniforms(camera);
        markers::sort_back_to_front(instances, camera.eye);
        self.markers.upload(&self.queue, instances);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.ground.draw(&mut rpass, &self.scene.bind_group);
            self.markers.draw(&mut rpass, &self.scene.bind_group);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
