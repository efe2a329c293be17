/// Buffer module - GPU buffer object wrapper

pub mod buffer_object;

pub use buffer_object::*;
