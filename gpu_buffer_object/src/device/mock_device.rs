/// Mock buffer device for unit tests (no GPU required)
///
/// Records every native call so tests can check exactly what a buffer object
/// asked the driver to do, and tracks live names and bindings like a context.

use std::cell::RefCell;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::device::{BufferDevice, BufferTarget, NativeBuffer, UsageHint};
use crate::error::{Error, Result};

/// One recorded native call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Create(u32),
    Delete(u32),
    Bind(BufferTarget, u32),
    Data(BufferTarget, usize, UsageHint),
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<MockCall>,
    next_id: u32,
    live: FxHashSet<u32>,
    bound: FxHashMap<BufferTarget, u32>,
    contents: FxHashMap<u32, Vec<u8>>,
}

#[derive(Debug)]
pub struct MockDevice {
    state: RefCell<MockState>,
    pub texel_supported: bool,
    pub fail_create: bool,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(MockState::default()),
            texel_supported: true,
            fail_create: false,
        }
    }

    /// Device whose context has no texel buffer binding point
    pub fn without_texel_buffers() -> Self {
        Self { texel_supported: false, ..Self::new() }
    }

    /// Device that refuses to hand out buffer names
    pub fn failing() -> Self {
        Self { fail_create: true, ..Self::new() }
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.state.borrow().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }

    pub fn created(&self) -> usize {
        self.count(|c| matches!(c, MockCall::Create(_)))
    }

    pub fn deleted(&self) -> usize {
        self.count(|c| matches!(c, MockCall::Delete(_)))
    }

    pub fn live_buffers(&self) -> usize {
        self.state.borrow().live.len()
    }

    /// Name bound at `target`, 0 if none
    pub fn bound(&self, target: BufferTarget) -> u32 {
        self.state.borrow().bound.get(&target).copied().unwrap_or(0)
    }

    /// Bytes last uploaded into buffer `id`
    pub fn contents(&self, id: u32) -> Option<Vec<u8>> {
        self.state.borrow().contents.get(&id).cloned()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn count(&self, pred: impl Fn(&MockCall) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }
}

impl Default for MockDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferDevice for MockDevice {
    fn create_buffer(&self) -> Result<NativeBuffer> {
        if self.fail_create {
            return Err(Error::BackendError("mock device refused to create a buffer".to_string()));
        }
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.live.insert(id);
        state.calls.push(MockCall::Create(id));
        NativeBuffer::new(id)
            .ok_or_else(|| Error::BackendError("mock device produced name 0".to_string()))
    }

    fn delete_buffer(&self, buffer: NativeBuffer) {
        let mut state = self.state.borrow_mut();
        let id = buffer.get();
        state.live.remove(&id);
        state.contents.remove(&id);
        // GL unbinds a deleted buffer from every binding point
        state.bound.retain(|_, bound| *bound != id);
        state.calls.push(MockCall::Delete(id));
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<NativeBuffer>) {
        let mut state = self.state.borrow_mut();
        let id = buffer.map_or(0, NativeBuffer::get);
        if id == 0 {
            state.bound.remove(&target);
        } else {
            state.bound.insert(target, id);
        }
        state.calls.push(MockCall::Bind(target, id));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: UsageHint) {
        let mut state = self.state.borrow_mut();
        if let Some(id) = state.bound.get(&target).copied() {
            state.contents.insert(id, data.to_vec());
        }
        state.calls.push(MockCall::Data(target, data.len(), usage));
    }

    fn supports_target(&self, target: BufferTarget) -> bool {
        target != BufferTarget::Texel || self.texel_supported
    }
}
