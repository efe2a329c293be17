/// Native buffer boundary: binding targets, usage hints and the device trait

use std::fmt;
use std::num::NonZeroU32;

use crate::error::Result;

// ===== GL ENCODINGS =====

/// `GL_ARRAY_BUFFER`
pub const GL_ARRAY_BUFFER: u32 = 0x8892;
/// `GL_ELEMENT_ARRAY_BUFFER`
pub const GL_ELEMENT_ARRAY_BUFFER: u32 = 0x8893;
/// `GL_TEXTURE_BUFFER`
pub const GL_TEXTURE_BUFFER: u32 = 0x8C2A;

/// `GL_STREAM_DRAW`
pub const GL_STREAM_DRAW: u32 = 0x88E0;
/// `GL_STATIC_DRAW`
pub const GL_STATIC_DRAW: u32 = 0x88E4;
/// `GL_DYNAMIC_DRAW`
pub const GL_DYNAMIC_DRAW: u32 = 0x88E8;

// ===== BUFFER TARGET =====

/// Binding target of a buffer object
///
/// Decides which binding point the buffer occupies in the graphics context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferTarget {
    /// Vertex attribute data (`GL_ARRAY_BUFFER`)
    #[default]
    Vertex,
    /// Index / element data (`GL_ELEMENT_ARRAY_BUFFER`)
    Index,
    /// Texel data backing a buffer texture (`GL_TEXTURE_BUFFER`)
    Texel,
}

impl BufferTarget {
    /// All targets, in declaration order
    pub const ALL: [BufferTarget; 3] = [BufferTarget::Vertex, BufferTarget::Index, BufferTarget::Texel];

    /// Native GL enum for this target
    pub fn to_gl(self) -> u32 {
        match self {
            BufferTarget::Vertex => GL_ARRAY_BUFFER,
            BufferTarget::Index => GL_ELEMENT_ARRAY_BUFFER,
            BufferTarget::Texel => GL_TEXTURE_BUFFER,
        }
    }

    /// Reverse of [`to_gl`](Self::to_gl)
    ///
    /// Returns `None` for any encoding that is not one of the three buffer
    /// targets; there is no fallback target.
    pub fn from_gl(value: u32) -> Option<BufferTarget> {
        match value {
            GL_ARRAY_BUFFER => Some(BufferTarget::Vertex),
            GL_ELEMENT_ARRAY_BUFFER => Some(BufferTarget::Index),
            GL_TEXTURE_BUFFER => Some(BufferTarget::Texel),
            _ => None,
        }
    }
}

impl fmt::Display for BufferTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BufferTarget::Vertex => "vertex",
            BufferTarget::Index => "index",
            BufferTarget::Texel => "texel",
        };
        f.write_str(name)
    }
}

// ===== USAGE HINT =====

/// Expected access pattern passed to the driver on upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UsageHint {
    /// Uploaded once, drawn many times
    #[default]
    StaticDraw,
    /// Uploaded repeatedly, drawn many times
    DynamicDraw,
    /// Uploaded once, drawn a few times
    StreamDraw,
}

impl UsageHint {
    /// Native GL enum for this hint
    pub fn to_gl(self) -> u32 {
        match self {
            UsageHint::StaticDraw => GL_STATIC_DRAW,
            UsageHint::DynamicDraw => GL_DYNAMIC_DRAW,
            UsageHint::StreamDraw => GL_STREAM_DRAW,
        }
    }

    /// Reverse of [`to_gl`](Self::to_gl)
    pub fn from_gl(value: u32) -> Option<UsageHint> {
        match value {
            GL_STATIC_DRAW => Some(UsageHint::StaticDraw),
            GL_DYNAMIC_DRAW => Some(UsageHint::DynamicDraw),
            GL_STREAM_DRAW => Some(UsageHint::StreamDraw),
            _ => None,
        }
    }
}

// ===== NATIVE BUFFER =====

/// Driver-assigned buffer name
///
/// Zero is reserved by GL for "no buffer", so a live name is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeBuffer(NonZeroU32);

impl NativeBuffer {
    /// Wrap a raw name, `None` for 0
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(NativeBuffer)
    }

    /// Raw name
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<NonZeroU32> for NativeBuffer {
    fn from(id: NonZeroU32) -> Self {
        NativeBuffer(id)
    }
}

impl From<NativeBuffer> for NonZeroU32 {
    fn from(buffer: NativeBuffer) -> Self {
        buffer.0
    }
}

impl fmt::Display for NativeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ===== DEVICE TRAIT =====

/// Native buffer operations of a graphics context
///
/// Implemented by backends (e.g. `GlBufferDevice`). The context must be
/// current on the calling thread; implementations do no synchronization.
/// Binding points are shared by every buffer using the same device.
pub trait BufferDevice {
    /// Generate one buffer name
    fn create_buffer(&self) -> Result<NativeBuffer>;

    /// Delete one buffer name
    fn delete_buffer(&self, buffer: NativeBuffer);

    /// Bind `buffer` at `target`, or clear the binding point with `None`
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<NativeBuffer>);

    /// Replace the storage of the buffer bound at `target`
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: UsageHint);

    /// Whether this context exposes the binding point for `target`
    fn supports_target(&self, _target: BufferTarget) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "buffer_device_tests.rs"]
mod tests;
