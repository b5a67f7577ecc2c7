//! Shared GPU types and utilities used by all shape renderers.

use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

pub(super) fn fill_primitive() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    pub(super) fn from_ctx(ctx: &RenderCtx<'_>) -> Self {
        Self {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }
}

/// Minimum binding size for the viewport uniform buffer.
fn viewport_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
}

/// Viewport uniform buffer plus its bind group, shared layout across renderers.
pub(super) struct ViewportBinding {
    pub layout: wgpu::BindGroupLayout,
    pub ubo: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl ViewportBinding {
    pub(super) fn new(device: &wgpu::Device, label: &'static str) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: viewport_ubo_min_binding_size(),
                },
                count: None,
            }],
        });

        let ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        Self { layout, ubo, bind_group }
    }

    pub(super) fn write(&self, ctx: &RenderCtx<'_>) {
        let u = ViewportUniform::from_ctx(ctx);
        ctx.queue.write_buffer(&self.ubo, 0, bytemuck::bytes_of(&u));
    }
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── growable vertex buffer ────────────────────────────────────────────────

/// Returns the element capacity to allocate for `required` elements.
///
/// Power-of-two growth with a floor of 64 so steady scenes never reallocate.
pub(super) fn grown_capacity(current: usize, required: usize) -> usize {
    if required <= current {
        current
    } else {
        required.next_power_of_two().max(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_has_floor_of_64() {
        assert_eq!(grown_capacity(0, 3), 64);
    }

    #[test]
    fn capacity_grows_to_next_power_of_two() {
        assert_eq!(grown_capacity(64, 65), 128);
        assert_eq!(grown_capacity(128, 300), 512);
    }

    #[test]
    fn capacity_kept_when_sufficient() {
        assert_eq!(grown_capacity(128, 100), 128);
    }

    #[test]
    fn viewport_uniform_is_16_bytes() {
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
    }
}
