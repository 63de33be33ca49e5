// crates/engine_core/src/renderer/mod.rs
pub mod art;
pub mod context;
pub mod sprite_pass;
pub mod types;
pub mod viewport;

use std::sync::Arc;

use engine_shared::DrawList;
use winit::window::Window;

use self::art::Primitive;
use self::context::GraphicsContext;
use self::sprite_pass::SpritePass;
use self::types::InstanceRaw;
use self::viewport::FieldViewport;
use crate::error::HostError;
use crate::gui::GuiFrame;

pub struct Renderer {
    ctx: GraphicsContext,
    sprite_pass: SpritePass,
    gui_renderer: egui_wgpu::Renderer,
    // Reused across frames
    primitives: Vec<Primitive>,
    instances: Vec<InstanceRaw>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, HostError> {
        let ctx = GraphicsContext::new(window).await?;
        let sprite_pass = SpritePass::new(&ctx);
        let gui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Ok(Self {
            ctx,
            sprite_pass,
            gui_renderer,
            primitives: Vec::new(),
            instances: Vec::new(),
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    pub fn reconfigure(&mut self) {
        self.ctx.reconfigure();
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.ctx.size
    }

    /// Placement of a `field`-sized play area on the current surface.
    pub fn viewport(&self, field: (u32, u32)) -> FieldViewport {
        FieldViewport::fit(field, (self.ctx.config.width, self.ctx.config.height))
    }

    pub fn render(
        &mut self,
        list: &DrawList,
        field: (u32, u32),
        gui: Option<&GuiFrame>,
    ) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.ctx.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        // 1. Draw Game
        art::build_instances(list, &mut self.primitives, &mut self.instances);
        let viewport = self.viewport(field);
        self.sprite_pass
            .draw(&self.ctx, &mut encoder, &view, &self.instances, list.clear, &viewport);

        // 2. Draw GUI (text + inspector) over it
        if let Some(frame) = gui {
            for (id, image_delta) in &frame.textures.set {
                self.gui_renderer
                    .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
            }

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.ctx.config.width, self.ctx.config.height],
                pixels_per_point: frame.pixels_per_point,
            };

            self.gui_renderer.update_buffers(
                &self.ctx.device,
                &self.ctx.queue,
                &mut encoder,
                &frame.primitives,
                &screen_descriptor,
            );

            {
                let mut gui_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Gui Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
                self.gui_renderer
                    .render(&mut gui_pass, &frame.primitives, &screen_descriptor);
            }

            for id in &frame.textures.free {
                self.gui_renderer.free_texture(id);
            }
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        self.sprite_pass.cleanup();

        output.present();
        Ok(())
    }
}
