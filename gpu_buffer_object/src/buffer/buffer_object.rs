/// Buffer object - one native GPU buffer and its binding target
///
/// A BufferObject owns exactly one driver buffer name, created lazily on the
/// first upload (or `ensure_allocated`) and deleted on
/// `release_graphics_resources` or drop.
///
/// Architecture:
/// - Target: fixed when the native buffer is created; changing it requires
///   releasing the buffer first
/// - Binding: `bind`/`release` only move the context-global binding point,
///   they never allocate or delete
/// - Dirty flag: set at construction, cleared by a successful upload, set
///   again only by `flag_dirty`

use std::fmt;
use std::rc::Rc;

use crate::device::{BufferDevice, BufferTarget, NativeBuffer, UsageHint};
use crate::error::{Error, Result};
use crate::{gbo_debug, gbo_err, gbo_trace};

const SOURCE: &str = "gbo::BufferObject";

// ===== BUFFER OBJECT DESC =====

/// Descriptor for creating a BufferObject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferObjectDesc {
    /// Debug name used in logs
    pub label: String,
    /// Target used by the first allocation
    pub target: BufferTarget,
    /// Usage hint passed on every upload
    pub usage: UsageHint,
}

impl Default for BufferObjectDesc {
    fn default() -> Self {
        Self {
            label: "buffer".to_string(),
            target: BufferTarget::Vertex,
            usage: UsageHint::StaticDraw,
        }
    }
}

// ===== BUFFER OBJECT =====

/// Lazily allocated GPU buffer bound to a single target
///
/// Holds the device through an `Rc`, so a BufferObject stays on the thread
/// whose graphics context created it.
pub struct BufferObject {
    device: Rc<dyn BufferDevice>,
    id: Option<NativeBuffer>,
    target: BufferTarget,
    usage: UsageHint,
    dirty: bool,
    size: usize,
    last_error: Option<String>,
    label: String,
}

impl BufferObject {
    /// Create an unallocated buffer for `target`
    pub fn new(device: Rc<dyn BufferDevice>, target: BufferTarget) -> Self {
        Self::from_desc(device, BufferObjectDesc { target, ..Default::default() })
    }

    /// Create an unallocated buffer from a descriptor
    pub fn from_desc(device: Rc<dyn BufferDevice>, desc: BufferObjectDesc) -> Self {
        Self {
            device,
            id: None,
            target: desc.target,
            usage: desc.usage,
            dirty: true,
            size: 0,
            last_error: None,
            label: desc.label,
        }
    }

    // ===== TARGET =====

    /// Set the target for the next allocation
    ///
    /// Once allocated the target is fixed: asking for the same target is a
    /// no-op, asking for another one fails with `TargetMismatch`.
    pub fn set_target(&mut self, target: BufferTarget) -> Result<()> {
        if self.id.is_some() && target != self.target {
            return Err(self.fail(Error::TargetMismatch {
                allocated: self.target,
                requested: target,
            }));
        }
        self.target = target;
        Ok(())
    }

    /// Target recorded for this buffer
    pub fn target(&self) -> BufferTarget {
        self.target
    }

    // ===== NATIVE HANDLE =====

    /// Native buffer name, 0 when unallocated
    pub fn handle(&self) -> u32 {
        self.id.map_or(0, NativeBuffer::get)
    }

    /// Native buffer name, if allocated
    pub fn native(&self) -> Option<NativeBuffer> {
        self.id
    }

    pub fn is_allocated(&self) -> bool {
        self.id.is_some()
    }

    /// Allocate the native buffer for `target` unless it already exists
    ///
    /// Never re-creates an existing buffer. Fails with `TargetMismatch` when
    /// the existing buffer was allocated for a different target, and with
    /// `UnsupportedTarget` when the device has no binding point for `target`.
    pub fn ensure_allocated(&mut self, target: BufferTarget) -> Result<()> {
        self.allocate(target).map(|_| ())
    }

    fn allocate(&mut self, target: BufferTarget) -> Result<NativeBuffer> {
        if let Some(id) = self.id {
            if self.target != target {
                return Err(self.fail(Error::TargetMismatch {
                    allocated: self.target,
                    requested: target,
                }));
            }
            return Ok(id);
        }

        if !self.device.supports_target(target) {
            return Err(self.fail(Error::UnsupportedTarget(target)));
        }

        let id = match self.device.create_buffer() {
            Ok(id) => id,
            Err(err) => return Err(self.fail(err)),
        };
        self.id = Some(id);
        self.target = target;
        gbo_debug!(SOURCE, "'{}' allocated {} buffer {}", self.label, target, id);
        Ok(id)
    }

    // ===== UPLOAD =====

    /// Upload a slice of plain values (vertices, indices, texels)
    pub fn upload<T: bytemuck::Pod>(&mut self, data: &[T], target: BufferTarget) -> Result<()> {
        self.upload_bytes(bytemuck::cast_slice(data), target)
    }

    /// Upload raw bytes, replacing the whole GPU storage
    ///
    /// Allocates on demand. On failure nothing is bound or written and the
    /// message is kept in `last_error`. On success the buffer is left bound
    /// at its target.
    pub fn upload_bytes(&mut self, data: &[u8], target: BufferTarget) -> Result<()> {
        let id = self.allocate(target)?;

        self.device.bind_buffer(self.target, Some(id));
        self.device.buffer_data(self.target, data, self.usage);

        self.size = data.len();
        self.dirty = false;
        self.last_error = None;
        gbo_trace!(SOURCE, "'{}' uploaded {} bytes to {}", self.label, data.len(), id);
        Ok(())
    }

    // ===== BINDING =====

    /// Bind at the buffer's target; `false` if not allocated
    pub fn bind(&self) -> bool {
        let Some(id) = self.id else {
            return false;
        };
        self.device.bind_buffer(self.target, Some(id));
        gbo_trace!(SOURCE, "'{}' bound {} at {}", self.label, id, self.target);
        true
    }

    /// Clear the target's binding point; `false` if not allocated
    ///
    /// Clears the binding point even when another buffer is bound there.
    pub fn release(&self) -> bool {
        if self.id.is_none() {
            return false;
        }
        self.device.bind_buffer(self.target, None);
        gbo_trace!(SOURCE, "'{}' released {} binding point", self.label, self.target);
        true
    }

    // ===== TEARDOWN =====

    /// Unbind the target and delete the native buffer, if any
    ///
    /// Idempotent. The buffer can be allocated again afterwards, with any
    /// target.
    pub fn release_graphics_resources(&mut self) {
        self.teardown(true);
    }

    fn teardown(&mut self, unbind: bool) {
        let Some(id) = self.id.take() else {
            return;
        };
        if unbind {
            self.device.bind_buffer(self.target, None);
        }
        self.device.delete_buffer(id);
        self.size = 0;
        gbo_debug!(SOURCE, "'{}' deleted {} buffer {}", self.label, self.target, id);
    }

    // ===== STATE =====

    /// True once the contents have been uploaded and not flagged since
    pub fn is_ready(&self) -> bool {
        !self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the GPU copy as stale; the owner re-uploads when convenient
    pub fn flag_dirty(&mut self) {
        self.dirty = true;
    }

    /// Message of the most recent failure, cleared by a successful upload
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Bytes pushed by the last successful upload, 0 when unallocated
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn usage(&self) -> UsageHint {
        self.usage
    }

    /// Usage hint for subsequent uploads
    pub fn set_usage(&mut self, usage: UsageHint) {
        self.usage = usage;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn fail(&mut self, err: Error) -> Error {
        let err = gbo_err!(SOURCE, err);
        self.last_error = Some(err.to_string());
        err
    }
}

impl Drop for BufferObject {
    fn drop(&mut self) {
        self.teardown(false);
    }
}

impl fmt::Debug for BufferObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferObject")
            .field("label", &self.label)
            .field("handle", &self.handle())
            .field("target", &self.target)
            .field("usage", &self.usage)
            .field("dirty", &self.dirty)
            .field("size", &self.size)
            .field("last_error", &self.last_error)
            .finish()
    }
}

#[cfg(test)]
#[path = "buffer_object_tests.rs"]
mod tests;
