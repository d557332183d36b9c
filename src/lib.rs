//! # glid
//!
//! Strongly-typed object names and owning handles for desktop OpenGL 4.5+.
//!
//! Every GL object this crate knows about (shaders, programs, buffers, vertex arrays,
//! textures and program pipelines) is described by a zero-sized [kind](object::Kind).
//! The kind selects, at compile time, which `glCreate*`, `glDelete*`, `glIs*`, `glBind*`
//! and `glGet*` entry points apply to it. On top of that sit two handle types:
//!
//! * [`Id<K>`](id::Id): a plain, copyable name. It owns nothing.
//! * [`Unique<K>`](unique::Unique): a move-only owner which deletes its object exactly
//!   once, either through [`Unique::reset`](unique::Unique::reset) or when dropped.
//!
//! ```no_run
//! use glid::{buffer, object::Buffer, unique::Unique};
//!
//! let vertices: Unique<Buffer> = Unique::create(());
//! buffer::data(&vertices, &[0.0f32, 0.5, -0.5, -0.5, 0.5, -0.5], buffer::Usage::default())?;
//! vertices.bind_to(buffer::BufferTarget::Array);
//! # Ok::<(), glid::Error>(())
//! ```
//!
//! Operations that are not specific to a single object kind (uploads, compilation,
//! attribute formats, ...) are free functions in the module of the object they act on.
//! With few exceptions they are transparent wrappers around the matching GL call, plus
//! whatever argument checking can be done without asking the GL.
//!
//! ## Safety contract
//! The generated bindings in [`gl`] must be loaded with [`gl::load_with`], and the
//! context they were loaded from must be current on the calling thread whenever any
//! function in this crate is called, including when a [`Unique`](unique::Unique) drops.
//! Calling an entry point that was never loaded panics.
//!
//! ## Doc Aliases
//! Functions carry `#[doc(alias = ...)]` attributes with the GL entry points they wrap,
//! so searching the docs for e.g. `glTextureSubImage2D` finds [`texture::sub_image_2d`].

#![warn(rustdoc::all)]

use gl::types::GLenum;

pub mod gl {
    #![doc(hidden)]
    #![allow(clippy::all)]
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

#[macro_use]
mod macros;

pub mod buffer;
pub mod debug;
pub mod draw;
pub mod error;
pub mod id;
pub mod object;
pub mod program;
pub mod query;
pub mod texture;
pub mod unique;
pub mod vertex_array;

#[cfg(test)]
mod mock;

pub use error::{Error, GlError, Result};
pub use id::Id;
pub use object::ObjectType;
pub use unique::Unique;

mod sealed {
    pub trait Sealed {}
}

/// Trait for rusty `GLenum`s.
///
/// # Safety
/// * Must be implemented only on enums.
/// * The enum must be `#[repr(u32)]`
/// * Every variant must be a correct constant of `GLenum`.
pub unsafe trait GLEnum {
    /// Access the raw `GLenum` value of this enum.
    fn as_gl(&self) -> GLenum {
        unsafe { *std::ptr::from_ref(self).cast() }
    }
}

/// Convert a host length into a `GLsizei`.
pub(crate) fn sizei(value: usize) -> Result<gl::types::GLsizei> {
    value.try_into().map_err(|_| Error::OutOfRange(value as u64))
}

/// Convert a host byte length or offset into a `GLsizeiptr`/`GLintptr`.
pub(crate) fn sizeiptr(value: usize) -> Result<gl::types::GLsizeiptr> {
    value.try_into().map_err(|_| Error::OutOfRange(value as u64))
}
