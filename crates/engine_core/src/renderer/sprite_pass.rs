// crates/engine_core/src/renderer/sprite_pass.rs
use std::num::NonZeroU64;

use engine_shared::Rgb;
use wgpu::util::{DeviceExt, StagingBelt};

use super::context::GraphicsContext;
use super::types::{CameraUniform, InstanceRaw};
use super::viewport::FieldViewport;

const INITIAL_INSTANCES: usize = 256;

pub struct SpritePass {
    render_pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    staging_belt: StagingBelt,
}

impl SpritePass {
    pub fn new(ctx: &GraphicsContext) -> Self {
        // Camera buffer and bind group
        let camera_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("camera_bind_group_layout"),
            });

        let camera_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../../../../assets/shaders/sprite.wgsl"));

        let layout_desc = wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        };
        let render_pipeline_layout = ctx.device.create_pipeline_layout(&layout_desc);

        let render_pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[InstanceRaw::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let instance_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (INITIAL_INSTANCES * std::mem::size_of::<InstanceRaw>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            render_pipeline,
            instance_buffer,
            camera_buffer,
            camera_bind_group,
            staging_belt: StagingBelt::new(4096),
        }
    }

    /// Clear the whole target to `clear` (the letterbox colour), then draw
    /// `instances` back to front inside `viewport`.
    pub fn draw(
        &mut self,
        ctx: &GraphicsContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        instances: &[InstanceRaw],
        clear: Rgb,
        viewport: &FieldViewport,
    ) {
        let camera = CameraUniform {
            view_proj: viewport.projection().to_cols_array_2d(),
        };
        ctx.queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[camera]));

        let instance_bytes: &[u8] = bytemuck::cast_slice(instances);
        let required_size = instance_bytes.len() as wgpu::BufferAddress;

        // Grow on demand, never shrink
        if required_size > self.instance_buffer.size() {
            let new_size = wgpu::util::align_to(required_size * 2, wgpu::COPY_BUFFER_ALIGNMENT);
            self.instance_buffer.destroy();
            self.instance_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Instance Buffer"),
                size: new_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }

        if let Some(size) = NonZeroU64::new(required_size) {
            let mut buffer_view =
                self.staging_belt
                    .write_buffer(encoder, &self.instance_buffer, 0, size, &ctx.device);
            buffer_view.copy_from_slice(instance_bytes);
        }
        self.staging_belt.finish();

        let clear = clear.to_linear(1.0);
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sprite Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear.x as f64,
                        g: clear.y as f64,
                        b: clear.z as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if instances.is_empty() || viewport.is_empty() {
            return;
        }

        let (surface_w, surface_h) = (ctx.config.width as f32, ctx.config.height as f32);
        render_pass.set_viewport(
            viewport.x,
            viewport.y,
            viewport.width().min(surface_w - viewport.x),
            viewport.height().min(surface_h - viewport.y),
            0.0,
            1.0,
        );
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.instance_buffer.slice(0..required_size));
        render_pass.draw(0..4, 0..instances.len() as u32);

        // The belt is recalled after submission, in Renderer::render.
    }

    pub fn cleanup(&mut self) {
        self.staging_belt.recall();
    }
}
