use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{fill_primitive, grown_capacity, premul_alpha_blend, ViewportBinding};

/// Solid triangle renderer.
///
/// Triangles are few and static in the skyline scene, so they are expanded
/// into a plain vertex list each frame rather than instanced.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    viewport: Option<ViewportBinding>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    vertices: Vec<TriangleVertex>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every triangle in `draw_list` into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        self.vertices.clear();
        for cmd in draw_list.items() {
            let DrawCmd::Triangle(tri) = cmd else { continue };
            let color = tri.color.to_array();
            self.vertices.extend(tri.points.iter().map(|p| TriangleVertex {
                pos: [p.x, p.y],
                color,
            }));
        }

        if self.vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_capacity(ctx, self.vertices.len());

        let (Some(pipeline), Some(viewport), Some(vbo)) =
            (self.pipeline.as_ref(), self.viewport.as_ref(), self.vbo.as_ref())
        else {
            return;
        };

        viewport.write(ctx);
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));

        let mut rpass = target.begin_load_pass("skyline triangle pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &viewport.bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skyline triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let viewport = ViewportBinding::new(ctx.device, "skyline triangle viewport");

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("skyline triangle pipeline layout"),
            bind_group_layouts: &[&viewport.layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("skyline triangle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[TriangleVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: fill_primitive(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("triangle pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.viewport = Some(viewport);
    }

    fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        let new_cap = grown_capacity(self.vbo_capacity, required);
        if new_cap == self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("skyline triangle vbo"),
            size: (new_cap * std::mem::size_of::<TriangleVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TriangleVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl TriangleVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TriangleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
