use crate::coords::Viewport;
use crate::paint::Color;

/// What a renderer needs from the GPU for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical px; the projection renderers map into NDC.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self { device, queue, surface_format, viewport }
    }
}

/// The frame's encoder and color attachment.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }

    /// Fills the whole target with `color`.
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_array().map(f64::from);
        let _pass = self.begin_pass("skyline clear", wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }));
    }

    /// Opens a render pass that draws on top of what is already in the target.
    pub fn begin_load_pass(&mut self, label: &'static str) -> wgpu::RenderPass<'_> {
        self.begin_pass(label, wgpu::LoadOp::Load)
    }

    fn begin_pass(&mut self, label: &'static str, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations { load, store: wgpu::StoreOp::Store },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}
