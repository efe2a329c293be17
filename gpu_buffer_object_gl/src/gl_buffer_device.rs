/// GlBufferDevice - OpenGL implementation of the BufferDevice trait

use gpu_buffer_object::gbo::{Error, Result};
use gpu_buffer_object::gbo::device::{BufferDevice, BufferTarget, NativeBuffer, UsageHint};
use gpu_buffer_object::gbo_info;
use glow::HasContext;
use std::rc::Rc;

use crate::gl_capabilities::GlCapabilities;

/// Buffer device backed by a glow context
///
/// The context must be current on the calling thread for every call; all
/// GL entry points below are unsafe only for that reason.
pub struct GlBufferDevice {
    gl: Rc<glow::Context>,
    capabilities: GlCapabilities,
}

impl GlBufferDevice {
    /// Wrap a context and probe its buffer capabilities
    pub fn new(gl: Rc<glow::Context>) -> Self {
        let version = gl.version();
        let capabilities = GlCapabilities::detect(
            version.major,
            version.minor,
            version.is_embedded,
            gl.supported_extensions(),
        );
        gbo_info!(
            "gbo::gl",
            "{} {}.{} context, texel buffers: {}",
            if capabilities.is_embedded { "GLES" } else { "GL" },
            capabilities.major,
            capabilities.minor,
            capabilities.texel_buffers
        );
        Self { gl, capabilities }
    }

    pub fn capabilities(&self) -> &GlCapabilities {
        &self.capabilities
    }

    /// Underlying glow context
    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }
}

impl BufferDevice for GlBufferDevice {
    fn create_buffer(&self) -> Result<NativeBuffer> {
        let buffer = unsafe { self.gl.create_buffer() }
            .map_err(|msg| Error::BackendError(format!("glGenBuffers failed: {}", msg)))?;
        Ok(NativeBuffer::from(buffer.0))
    }

    fn delete_buffer(&self, buffer: NativeBuffer) {
        unsafe { self.gl.delete_buffer(glow::NativeBuffer(buffer.into())) }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<NativeBuffer>) {
        let buffer = buffer.map(|b| glow::NativeBuffer(b.into()));
        unsafe { self.gl.bind_buffer(target.to_gl(), buffer) }
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: UsageHint) {
        unsafe { self.gl.buffer_data_u8_slice(target.to_gl(), data, usage.to_gl()) }
    }

    fn supports_target(&self, target: BufferTarget) -> bool {
        match target {
            BufferTarget::Vertex | BufferTarget::Index => true,
            BufferTarget::Texel => self.capabilities.texel_buffers,
        }
    }
}
