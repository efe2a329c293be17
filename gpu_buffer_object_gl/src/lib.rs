/*!
# GPU Buffer Object - OpenGL Backend

OpenGL implementation of the `gpu_buffer_object` device boundary.

`GlBufferDevice` maps buffer creation, deletion, binding and upload onto a
`glow::Context` that the caller has made current. Texel buffer support is
probed from the context version and extension list.

```no_run
use std::rc::Rc;
use gpu_buffer_object::gbo::buffer::BufferObject;
use gpu_buffer_object::gbo::device::BufferTarget;
use gpu_buffer_object_gl::GlBufferDevice;

# fn demo(gl: glow::Context) -> gpu_buffer_object::gbo::Result<()> {
let device = Rc::new(GlBufferDevice::new(Rc::new(gl)));
let mut indices = BufferObject::new(device, BufferTarget::Index);
indices.upload(&[0u32, 1, 2], BufferTarget::Index)?;
indices.bind();
# Ok(())
# }
```
*/

mod gl_buffer_device;
mod gl_capabilities;

pub use gl_buffer_device::GlBufferDevice;
pub use gl_capabilities::{GlCapabilities, TEXEL_BUFFER_EXTENSIONS};
