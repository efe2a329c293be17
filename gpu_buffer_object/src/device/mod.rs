/// Device module - native buffer boundary

pub mod buffer_device;

pub use buffer_device::*;

// Mock device for tests (no GPU required)
#[cfg(test)]
pub mod mock_device;
