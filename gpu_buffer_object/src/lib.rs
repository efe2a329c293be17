/*!
# GPU Buffer Object

Backend-agnostic wrapper around a single native GPU buffer (vertex, index or
texel buffer).

A [`BufferObject`](gbo::buffer::BufferObject) allocates its driver buffer
lazily, remembers which binding target it belongs to, uploads client memory
into it, binds/unbinds it for draw calls and deletes it again. All native
calls go through the [`BufferDevice`](gbo::device::BufferDevice) trait;
backend crates (e.g. `gpu_buffer_object_gl`) implement it for a real context.

## Architecture

- **BufferDevice**: native boundary (create, delete, bind, upload)
- **BufferObject**: one buffer name, its target, dirty flag and last error
- **Diagnostics**: global logger used by the `gbo_*` macros
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod device;
pub mod buffer;

// Main gbo namespace module
pub mod gbo {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::diagnostics::Diagnostics;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Native boundary
    pub mod device {
        pub use crate::device::*;
    }

    // Buffer objects
    pub mod buffer {
        pub use crate::buffer::*;
    }
}

// Re-export byte casting for typed uploads
pub use bytemuck;
