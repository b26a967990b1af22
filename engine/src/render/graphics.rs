use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec2;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use super::sprite::{sprite_instances, Globals, SpriteInstance, SpritePipeline};
use crate::assets::{Assets, SpriteId};
use crate::error::EngineError;
use crate::game::DrawList;

/// What the async graphics setup sends back to the event loop.
pub type GraphicsEvent = Result<Graphics, EngineError>;

const INITIAL_INSTANCES: usize = 64;

struct GpuTexture {
    bind_group: wgpu::BindGroup,
    size: Vec2,
}

pub struct Graphics {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sprites: SpritePipeline,
    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    instance_buf: wgpu::Buffer,
    instance_capacity: usize,
    textures: HashMap<SpriteId, GpuTexture>,
    clear: wgpu::Color,
}

/// Builds [`Graphics`] for `window` and hands the result to the event loop.
pub async fn create_graphics(window: Arc<Window>, clear_color: [f64; 3], proxy: EventLoopProxy<GraphicsEvent>) {
    let result = Graphics::new(window, clear_color).await;
    if proxy.send_event(result).is_err() {
        log::error!("event loop closed before graphics were ready");
    }
}

impl Graphics {
    pub async fn new(window: Arc<Window>, clear_color: [f64; 3]) -> Result<Self, EngineError> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("engine-device"),
                ..Default::default()
            })
            .await?;

        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("graphics ready: {:?} {}x{}", format, config.width, config.height);

        let sprites = SpritePipeline::new(&device, format);

        let globals_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals.bg"),
            layout: &sprites.globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });
        let instance_buf = create_instance_buffer(&device, INITIAL_INSTANCES);

        let [r, g, b] = clear_color;
        let gfx = Self {
            window,
            surface,
            device,
            queue,
            config,
            sprites,
            globals_buf,
            globals_bg,
            instance_buf,
            instance_capacity: INITIAL_INSTANCES,
            textures: HashMap::new(),
            clear: wgpu::Color { r, g, b, a: 1.0 },
        };
        gfx.write_globals();
        Ok(gfx)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        self.write_globals();
    }

    /// Renders `list` over a cleared frame.
    pub fn draw(&mut self, assets: &Assets, list: &DrawList) {
        self.upload_missing(assets, list);

        let instances = sprite_instances(list, |id| self.textures.get(&id).map(|t| t.size));
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            self.instance_buf = create_instance_buffer(&self.device, self.instance_capacity);
        }
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buf, 0, bytemuck::cast_slice(&instances));
        }

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(err) => {
                log::warn!("skipping frame: {err}");
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sprites"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sprites.pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            pass.set_pipeline(&self.sprites.pipeline);
            pass.set_bind_group(0, &self.globals_bg, &[]);
            pass.set_vertex_buffer(0, self.instance_buf.slice(..));
            for (sprite, range) in list.batches() {
                let Some(texture) = self.textures.get(&sprite) else {
                    continue;
                };
                pass.set_bind_group(1, &texture.bind_group, &[]);
                pass.draw(0..6, range);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        self.window.pre_present_notify();
        frame.present();
    }

    fn upload_missing(&mut self, assets: &Assets, list: &DrawList) {
        for cmd in list.commands() {
            if self.textures.contains_key(&cmd.sprite) {
                continue;
            }
            let Some(image) = assets.get(cmd.sprite) else {
                log::warn!("draw of unknown sprite {:?}", cmd.sprite);
                continue;
            };
            if image.width == 0 || image.height == 0 {
                continue;
            }
            let bind_group = self
                .sprites
                .create_texture(&self.device, &self.queue, image);
            self.textures.insert(
                cmd.sprite,
                GpuTexture {
                    bind_group,
                    size: Vec2::new(image.width as f32, image.height as f32),
                },
            );
        }
    }

    /// Drawing happens in logical pixels, the same space the pointer uses.
    fn write_globals(&self) {
        let logical = PhysicalSize::new(self.config.width, self.config.height)
            .to_logical::<f32>(self.window.scale_factor());
        let globals = Globals::new(Vec2::new(logical.width, logical.height));
        self.queue
            .write_buffer(&self.globals_buf, 0, bytemuck::bytes_of(&globals));
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("sprite.instances"),
        size: (std::mem::size_of::<SpriteInstance>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
