//! Implementation limits of the current context.

use crate::gl::{self, types::GLenum};

fn get(pname: GLenum) -> usize {
    let mut value = 0;
    unsafe { gl::GetIntegerv(pname, std::ptr::addr_of_mut!(value)) };
    // Limits are never negative.
    usize::try_from(value).unwrap_or_default()
}

/// Number of uniform locations a program may assign explicitly.
#[doc(alias = "GL_MAX_UNIFORM_LOCATIONS")]
#[must_use]
pub fn max_uniform_locations() -> usize {
    get(gl::MAX_UNIFORM_LOCATIONS)
}

#[doc(alias = "GL_MAX_VERTEX_ATTRIBS")]
#[must_use]
pub fn max_vertex_attribs() -> usize {
    get(gl::MAX_VERTEX_ATTRIBS)
}

/// Number of texture units usable by all stages together.
#[doc(alias = "GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS")]
#[must_use]
pub fn max_combined_texture_image_units() -> usize {
    get(gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS)
}

/// Largest width or height of a 1D or 2D texture.
#[doc(alias = "GL_MAX_TEXTURE_SIZE")]
#[must_use]
pub fn max_texture_size() -> usize {
    get(gl::MAX_TEXTURE_SIZE)
}
