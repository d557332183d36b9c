//! Entry points for clearing and executing draw commands.
//!
//! Draws read from whatever program (or pipeline), vertex array, and framebuffer are
//! bound at the time of the call. Element draws read indices from the element buffer of
//! the bound vertex array; if it has none, the GL treats the byte offset as a client
//! pointer. That backwards compatibility case is not supported by this crate.

use crate::{
    gl::{self, types::GLbitfield},
    sizei, Error, GLEnum, Result,
};

gl_enum! {
    /// How consecutive vertices are assembled into primitives.
    pub enum Topology {
        Points = POINTS,
        LineStrip = LINE_STRIP,
        LineLoop = LINE_LOOP,
        Lines = LINES,
        LineStripAdjacency = LINE_STRIP_ADJACENCY,
        LinesAdjacency = LINES_ADJACENCY,
        TriangleStrip = TRIANGLE_STRIP,
        TriangleFan = TRIANGLE_FAN,
        Triangles = TRIANGLES,
        TriangleStripAdjacency = TRIANGLE_STRIP_ADJACENCY,
        TrianglesAdjacency = TRIANGLES_ADJACENCY,
        /// Requires tessellation shaders.
        Patches = PATCHES,
    }
}

gl_enum! {
    /// Specifies the datatype of indices to fetch from the element buffer.
    pub enum ElementType {
        U8 = UNSIGNED_BYTE,
        U16 = UNSIGNED_SHORT,
        U32 = UNSIGNED_INT,
    }
}
impl ElementType {
    #[must_use]
    pub fn size_of(self) -> usize {
        match self {
            Self::U8 => std::mem::size_of::<u8>(),
            Self::U16 => std::mem::size_of::<u16>(),
            Self::U32 => std::mem::size_of::<u32>(),
        }
    }
}

bitflags::bitflags! {
    /// Buffers of the draw framebuffer to clear.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: GLbitfield {
        const COLOR = gl::COLOR_BUFFER_BIT;
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}
impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Color { r, g, b, a }
    }
}

/// What color value to clear color buffers to in a [`clear`].
#[doc(alias = "glClearColor")]
pub fn clear_color(color: impl Into<Color>) {
    let Color { r, g, b, a } = color.into();
    unsafe { gl::ClearColor(r, g, b, a) }
}

/// What depth value to clear the depth buffer to in a [`clear`].
#[doc(alias = "glClearDepth")]
pub fn clear_depth(depth: f64) {
    unsafe { gl::ClearDepth(depth) }
}

/// Clear the selected buffers of the draw framebuffer to their clear values.
#[doc(alias = "glClear")]
pub fn clear(mask: ClearMask) {
    if mask.is_empty() {
        return;
    }
    unsafe { gl::Clear(mask.bits()) }
}

fn count(range: &std::ops::Range<usize>) -> Result<usize> {
    range
        .end
        .checked_sub(range.start)
        .ok_or(Error::InvalidArgument("draw range end before start"))
}

/// Draw the vertices `vertices` of the bound vertex array.
///
/// Empty ranges do nothing.
#[doc(alias = "glDrawArrays")]
pub fn draw_arrays(mode: Topology, vertices: std::ops::Range<usize>) -> Result<()> {
    draw_arrays_instanced(mode, vertices, 1)
}

/// Draw the vertices `vertices` of the bound vertex array `instances` times.
///
/// Empty ranges, and zero instances, do nothing.
#[doc(alias = "glDrawArraysInstanced")]
pub fn draw_arrays_instanced(
    mode: Topology,
    vertices: std::ops::Range<usize>,
    instances: usize,
) -> Result<()> {
    let count = count(&vertices)?;
    if count == 0 || instances == 0 {
        // Nothing to draw.
        return Ok(());
    }
    let (first, count) = (sizei(vertices.start)?, sizei(count)?);

    if instances == 1 {
        unsafe { gl::DrawArrays(mode.as_gl(), first, count) }
    } else {
        unsafe { gl::DrawArraysInstanced(mode.as_gl(), first, count, sizei(instances)?) }
    }
    Ok(())
}

/// Draw the vertices named by the indices `elements` of the element buffer.
///
/// `elements` counts indices, not bytes. Empty ranges do nothing.
#[doc(alias = "glDrawElements")]
pub fn draw_elements(
    mode: Topology,
    element_type: ElementType,
    elements: std::ops::Range<usize>,
) -> Result<()> {
    draw_elements_instanced(mode, element_type, elements, 1)
}

/// [`draw_elements`], `instances` times.
#[doc(alias = "glDrawElementsInstanced")]
pub fn draw_elements_instanced(
    mode: Topology,
    element_type: ElementType,
    elements: std::ops::Range<usize>,
    instances: usize,
) -> Result<()> {
    let count = count(&elements)?;
    if count == 0 || instances == 0 {
        // Nothing to draw.
        return Ok(());
    }
    let byte_offset = elements
        .start
        .checked_mul(element_type.size_of())
        .ok_or(Error::OutOfRange(u64::MAX))?;
    let count = sizei(count)?;
    // A byte offset into the element buffer, passed as a pointer.
    let offset = byte_offset as *const std::ffi::c_void;

    if instances == 1 {
        unsafe { gl::DrawElements(mode.as_gl(), count, element_type.as_gl(), offset) }
    } else {
        unsafe {
            gl::DrawElementsInstanced(
                mode.as_gl(),
                count,
                element_type.as_gl(),
                offset,
                sizei(instances)?,
            );
        }
    }
    Ok(())
}
