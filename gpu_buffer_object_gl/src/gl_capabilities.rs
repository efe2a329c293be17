/// GlCapabilities - what the current GL context can host
///
/// Buffer textures (the texel buffer binding point) are core in desktop
/// GL 3.1 and GLES 3.2, and available earlier through extensions.

use std::collections::HashSet;

/// Extensions that expose `GL_TEXTURE_BUFFER`
pub const TEXEL_BUFFER_EXTENSIONS: [&str; 3] = [
    "GL_ARB_texture_buffer_object",
    "GL_EXT_texture_buffer",
    "GL_OES_texture_buffer",
];

/// Buffer-related capabilities of a GL context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlCapabilities {
    /// Context major version
    pub major: u32,
    /// Context minor version
    pub minor: u32,
    /// OpenGL ES context
    pub is_embedded: bool,
    /// `GL_TEXTURE_BUFFER` is a valid binding target
    pub texel_buffers: bool,
}

impl GlCapabilities {
    /// Derive capabilities from a context version and its extension list
    pub fn detect(major: u32, minor: u32, is_embedded: bool, extensions: &HashSet<String>) -> Self {
        let core = if is_embedded {
            (major, minor) >= (3, 2)
        } else {
            (major, minor) >= (3, 1)
        };
        let texel_buffers = core
            || TEXEL_BUFFER_EXTENSIONS
                .iter()
                .any(|ext| extensions.contains(*ext));

        Self { major, minor, is_embedded, texel_buffers }
    }
}

#[cfg(test)]
#[path = "gl_capabilities_tests.rs"]
mod tests;
