//! Vertex array attribute formats and buffer bindings.
//!
//! A vertex array remembers which buffers vertex data is fetched from, and provides
//! offsets, sizes, and types for the attributes fetched by the vertex shader. Buffers
//! are attached to numbered [binding points](VertexBindingIndex), and each attribute
//! reads from one binding point.

use crate::{
    gl::{self, types::GLuint},
    id::{BufferId, VertexArrayId},
    program::{VertexAttributeIndex, VertexBindingIndex},
    sizei, sizeiptr, Error, GLEnum, Result,
};

/// Determines the number of components to load, generally this should match the
/// dimensionality of the vertex shader input.
///
/// For non-packed formats, this determines the number of `ty` typed items to read.
/// For [packed](PackedIntegerAttribute) formats, this must be [`Components::Vec4`].
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Components {
    Scalar = 1,
    Vec2 = 2,
    Vec3 = 3,
    Vec4 = 4,
}
impl From<Components> for i32 {
    fn from(value: Components) -> Self {
        value as _
    }
}

gl_enum! {
    /// One integer per component.
    pub enum IntegerAttribute {
        U8 = UNSIGNED_BYTE,
        I8 = BYTE,
        U16 = UNSIGNED_SHORT,
        I16 = SHORT,
        U32 = UNSIGNED_INT,
        I32 = INT,
    }
}
impl IntegerAttribute {
    /// Size of one component in bytes, which is also its alignment.
    #[must_use]
    pub fn size_of(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
        }
    }
}

gl_enum! {
    /// One float per component.
    pub enum FloatingAttribute {
        F16 = HALF_FLOAT,
        F32 = FLOAT,
        /// Fixed point `16.16` format.
        Fixed16_16 = FIXED,
    }
}
impl FloatingAttribute {
    /// Size of one component in bytes, which is also its alignment.
    #[must_use]
    pub fn size_of(self) -> usize {
        match self {
            Self::F16 => 2,
            Self::F32 | Self::Fixed16_16 => 4,
        }
    }
}

gl_enum! {
    /// A Single element representing four packed components.
    pub enum PackedIntegerAttribute {
        /// LSB -> MSB, `[i10, i10, i10, i2]` packed signed integers.
        /// The fourth component, `w`, is 2 bits.
        IReverse2_10_10_10 = INT_2_10_10_10_REV,
        /// LSB -> MSB, `[u10, u10, u10, u2]` packed unsigned integers.
        /// The fourth component, `w`, is 2 bits.
        UReverse2_10_10_10 = UNSIGNED_INT_2_10_10_10_REV,
    }
}

/// Specifies the type and interpretation of component data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    /// Fetch as integers, access in shader as integers.
    Integer(IntegerAttribute),
    /// Fetch as integers, access in shader directly casted to floats.
    /// E.g. `3` becomes `3.0`.
    Scaled(IntegerAttribute),
    /// Fetch as packed integers, access in shader directly casted to floats.
    PackedScaled(PackedIntegerAttribute),
    /// Fetch as integers, access in shader as normalized floats.
    /// `[0, 1]` for unsigned integer formats and `[-1, 1]` for signed integer formats.
    Normalized(IntegerAttribute),
    /// Fetch as packed integers, access in shader as normalized floats.
    PackedNormalized(PackedIntegerAttribute),
    /// Fetch as floats, access in shader as floats.
    Float(FloatingAttribute),
    /// Fetch as doubles, access in shader as doubles (`dvec*`).
    Double,
}
impl AttributeType {
    /// Get the align requirements for fetching this attribute.
    #[must_use]
    pub fn align_of(&self) -> usize {
        match self {
            Self::Float(ty) => ty.size_of(),
            Self::Scaled(ty) | Self::Integer(ty) | Self::Normalized(ty) => ty.size_of(),
            Self::PackedScaled(_) | Self::PackedNormalized(_) => 4,
            Self::Double => 8,
        }
    }
    fn packed(&self) -> bool {
        matches!(self, Self::PackedScaled(_) | Self::PackedNormalized(_))
    }
}

/// How one attribute is read from its vertex buffer binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeFormat {
    /// The type of data to fetch from the array, as well as it's interpretation
    /// within the shader interface.
    pub ty: AttributeType,
    /// The number of components of the scalar/vector.
    pub components: Components,
    /// Offset, in bytes, from the start of each vertex in the binding.
    ///
    /// This must be aligned with [`AttributeType::align_of`].
    pub relative_offset: u32,
}

/// Set the format of `attribute`.
///
/// # Errors
/// [`Error::InvalidArgument`] if a packed type is used with anything but
/// [`Components::Vec4`], or if the relative offset is misaligned for the type.
#[doc(alias = "glVertexArrayAttribFormat")]
#[doc(alias = "glVertexArrayAttribIFormat")]
#[doc(alias = "glVertexArrayAttribLFormat")]
pub fn attribute_format(
    vertex_array: &VertexArrayId,
    attribute: VertexAttributeIndex,
    format: &AttributeFormat,
) -> Result<()> {
    if format.ty.packed() && format.components != Components::Vec4 {
        return Err(Error::InvalidArgument(
            "packed attributes must have four components",
        ));
    }
    let align = format.ty.align_of();
    if usize::try_from(format.relative_offset).map_or(true, |offset| offset % align != 0) {
        return Err(Error::InvalidArgument("misaligned attribute offset"));
    }

    let (vao, index, size, offset) = (
        vertex_array.get(),
        attribute.0,
        i32::from(format.components),
        format.relative_offset,
    );
    unsafe {
        match format.ty {
            AttributeType::Integer(ty) => {
                gl::VertexArrayAttribIFormat(vao, index, size, ty.as_gl(), offset);
            }
            AttributeType::Double => {
                gl::VertexArrayAttribLFormat(vao, index, size, gl::DOUBLE, offset);
            }
            AttributeType::Scaled(ty) => {
                gl::VertexArrayAttribFormat(vao, index, size, ty.as_gl(), gl::FALSE, offset);
            }
            AttributeType::Normalized(ty) => {
                gl::VertexArrayAttribFormat(vao, index, size, ty.as_gl(), gl::TRUE, offset);
            }
            AttributeType::PackedScaled(ty) => {
                gl::VertexArrayAttribFormat(vao, index, size, ty.as_gl(), gl::FALSE, offset);
            }
            AttributeType::PackedNormalized(ty) => {
                gl::VertexArrayAttribFormat(vao, index, size, ty.as_gl(), gl::TRUE, offset);
            }
            AttributeType::Float(ty) => {
                gl::VertexArrayAttribFormat(vao, index, size, ty.as_gl(), gl::FALSE, offset);
            }
        }
    }
    Ok(())
}

/// Attach `buffer` to a binding point, with vertices starting `offset` bytes in and
/// spaced `stride` bytes apart.
#[doc(alias = "glVertexArrayVertexBuffer")]
pub fn vertex_buffer(
    vertex_array: &VertexArrayId,
    binding: VertexBindingIndex,
    buffer: &BufferId,
    offset: usize,
    stride: usize,
) -> Result<()> {
    unsafe {
        gl::VertexArrayVertexBuffer(
            vertex_array.get(),
            binding.0,
            buffer.get(),
            sizeiptr(offset)?,
            sizei(stride)?,
        );
    }
    Ok(())
}

/// Use `buffer` as the source of indices for element draws.
#[doc(alias = "glVertexArrayElementBuffer")]
pub fn element_buffer(vertex_array: &VertexArrayId, buffer: &BufferId) {
    unsafe { gl::VertexArrayElementBuffer(vertex_array.get(), buffer.get()) }
}

/// Make `attribute` read from the buffer attached to `binding`.
#[doc(alias = "glVertexArrayAttribBinding")]
pub fn attribute_binding(
    vertex_array: &VertexArrayId,
    attribute: VertexAttributeIndex,
    binding: VertexBindingIndex,
) {
    unsafe { gl::VertexArrayAttribBinding(vertex_array.get(), attribute.0, binding.0) }
}

#[doc(alias = "glEnableVertexArrayAttrib")]
pub fn enable_attribute(vertex_array: &VertexArrayId, attribute: VertexAttributeIndex) {
    unsafe { gl::EnableVertexArrayAttrib(vertex_array.get(), attribute.0) }
}

#[doc(alias = "glDisableVertexArrayAttrib")]
pub fn disable_attribute(vertex_array: &VertexArrayId, attribute: VertexAttributeIndex) {
    unsafe { gl::DisableVertexArrayAttrib(vertex_array.get(), attribute.0) }
}

/// Advance the vertices of `binding` once every `divisor` instances, or every vertex
/// if zero.
#[doc(alias = "glVertexArrayBindingDivisor")]
pub fn binding_divisor(vertex_array: &VertexArrayId, binding: VertexBindingIndex, divisor: u32) {
    unsafe { gl::VertexArrayBindingDivisor(vertex_array.get(), binding.0, divisor) }
}

/// [`enable_attribute`] on the currently bound vertex array.
#[doc(alias = "glEnableVertexAttribArray")]
pub fn enable_attribute_array(attribute: VertexAttributeIndex) {
    unsafe { gl::EnableVertexAttribArray(attribute.0) }
}

/// Set the instance divisor of `attribute` of the currently bound vertex array.
#[doc(alias = "glVertexAttribDivisor")]
pub fn attribute_divisor(attribute: VertexAttributeIndex, divisor: GLuint) {
    unsafe { gl::VertexAttribDivisor(attribute.0, divisor) }
}
