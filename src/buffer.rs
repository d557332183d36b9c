//! Buffer targets, parameters, and uploads.

use crate::{
    gl::{self, types::GLint64},
    id::BufferId,
    sizeiptr, Error, GLEnum, Result,
};

gl_enum! {
    /// Binding points for buffer objects.
    pub enum BufferTarget {
        Array = ARRAY_BUFFER,
        AtomicCounter = ATOMIC_COUNTER_BUFFER,
        CopyRead = COPY_READ_BUFFER,
        CopyWrite = COPY_WRITE_BUFFER,
        DispatchIndirect = DISPATCH_INDIRECT_BUFFER,
        DrawIndirect = DRAW_INDIRECT_BUFFER,
        ElementArray = ELEMENT_ARRAY_BUFFER,
        PixelPack = PIXEL_PACK_BUFFER,
        PixelUnpack = PIXEL_UNPACK_BUFFER,
        Query = QUERY_BUFFER,
        ShaderStorage = SHADER_STORAGE_BUFFER,
        Texture = TEXTURE_BUFFER,
        TransformFeedback = TRANSFORM_FEEDBACK_BUFFER,
        Uniform = UNIFORM_BUFFER,
    }
}

gl_enum! {
    /// Parameters readable with `glGetNamedBufferParameteriv`.
    pub enum BufferParameter {
        #[doc(alias = "GL_BUFFER_SIZE")]
        Size = BUFFER_SIZE,
        #[doc(alias = "GL_BUFFER_USAGE")]
        Usage = BUFFER_USAGE,
        #[doc(alias = "GL_BUFFER_ACCESS")]
        Access = BUFFER_ACCESS,
        #[doc(alias = "GL_BUFFER_ACCESS_FLAGS")]
        AccessFlags = BUFFER_ACCESS_FLAGS,
        #[doc(alias = "GL_BUFFER_MAPPED")]
        Mapped = BUFFER_MAPPED,
        #[doc(alias = "GL_BUFFER_MAP_LENGTH")]
        MapLength = BUFFER_MAP_LENGTH,
        #[doc(alias = "GL_BUFFER_MAP_OFFSET")]
        MapOffset = BUFFER_MAP_OFFSET,
        #[doc(alias = "GL_BUFFER_IMMUTABLE_STORAGE")]
        ImmutableStorage = BUFFER_IMMUTABLE_STORAGE,
        #[doc(alias = "GL_BUFFER_STORAGE_FLAGS")]
        StorageFlags = BUFFER_STORAGE_FLAGS,
    }
}

impl crate::object::ParameterName for BufferParameter {}

/// Hints to the GL as to how often and in what way a buffer will be used.
///
/// While it is just a hint (and thus does not restrict the actual abilities of the
/// buffer), using a buffer in a way inconsistent with its usage may be several orders
/// of magnitude slower.
pub mod usage {
    /// Describes the relationship between reads and writes
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Frequency {
        /// Contents will be read at most a few times after a write.
        Stream,
        /// Contents will be written once and read many times.
        Static,
        /// Contents will be written many times and read many times.
        Dynamic,
    }
    /// Describes the sources and destinations of reads and writes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Access {
        /// Host writes, GL reads.
        Draw,
        /// Host reads, GL writes.
        Read,
        /// GL writes, GL reads.
        Copy,
    }
}

gl_enum! {
    /// The combined usage hint passed to `glNamedBufferData`.
    ///
    /// Defaults to [`Usage::StaticDraw`].
    pub enum Usage {
        StreamDraw = STREAM_DRAW,
        StreamRead = STREAM_READ,
        StreamCopy = STREAM_COPY,
        StaticDraw = STATIC_DRAW,
        StaticRead = STATIC_READ,
        StaticCopy = STATIC_COPY,
        DynamicDraw = DYNAMIC_DRAW,
        DynamicRead = DYNAMIC_READ,
        DynamicCopy = DYNAMIC_COPY,
    }
}
impl Usage {
    /// Combine a frequency and access into a usage hint.
    #[must_use]
    pub fn new(frequency: usage::Frequency, access: usage::Access) -> Self {
        use usage::{Access as A, Frequency as F};

        match (frequency, access) {
            (F::Stream, A::Draw) => Self::StreamDraw,
            (F::Stream, A::Read) => Self::StreamRead,
            (F::Stream, A::Copy) => Self::StreamCopy,

            (F::Static, A::Draw) => Self::StaticDraw,
            (F::Static, A::Read) => Self::StaticRead,
            (F::Static, A::Copy) => Self::StaticCopy,

            (F::Dynamic, A::Draw) => Self::DynamicDraw,
            (F::Dynamic, A::Read) => Self::DynamicRead,
            (F::Dynamic, A::Copy) => Self::DynamicCopy,
        }
    }
}
impl Default for Usage {
    fn default() -> Self {
        Self::StaticDraw
    }
}

bitflags::bitflags! {
    /// Capabilities of an immutable data store, fixed at `glNamedBufferStorage` time.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StorageFlags: gl::types::GLbitfield {
        /// Contents may be updated with `glNamedBufferSubData`.
        const DYNAMIC_STORAGE = gl::DYNAMIC_STORAGE_BIT;
        const MAP_READ = gl::MAP_READ_BIT;
        const MAP_WRITE = gl::MAP_WRITE_BIT;
        /// The buffer may stay mapped while the GL uses it.
        const MAP_PERSISTENT = gl::MAP_PERSISTENT_BIT;
        /// Host writes to a persistent mapping become visible without a barrier.
        ///
        /// Requires `MAP_PERSISTENT`.
        const MAP_COHERENT = gl::MAP_COHERENT_BIT;
        /// Prefer host memory for the data store.
        const CLIENT_STORAGE = gl::CLIENT_STORAGE_BIT;
    }
}

/// (Re)allocate the data store of `buffer` and fill it with `data`.
#[doc(alias = "glNamedBufferData")]
pub fn data<T: bytemuck::Pod>(buffer: &BufferId, data: &[T], usage: Usage) -> Result<()> {
    let bytes: &[u8] = bytemuck::cast_slice(data);
    unsafe {
        gl::NamedBufferData(
            buffer.get(),
            sizeiptr(bytes.len())?,
            bytes.as_ptr().cast(),
            usage.as_gl(),
        );
    }
    Ok(())
}

/// [`data`], but does not initialize the data store.
#[doc(alias = "glNamedBufferData")]
pub fn data_uninit(buffer: &BufferId, len: usize, usage: Usage) -> Result<()> {
    unsafe {
        gl::NamedBufferData(
            buffer.get(),
            sizeiptr(len)?,
            // Null for uninit
            std::ptr::null(),
            usage.as_gl(),
        );
    }
    Ok(())
}

/// Overwrite part of the data store, starting `offset` bytes in.
#[doc(alias = "glNamedBufferSubData")]
pub fn sub_data<T: bytemuck::Pod>(buffer: &BufferId, offset: usize, data: &[T]) -> Result<()> {
    let bytes: &[u8] = bytemuck::cast_slice(data);
    if bytes.is_empty() {
        return Ok(());
    }
    unsafe {
        gl::NamedBufferSubData(
            buffer.get(),
            sizeiptr(offset)?,
            sizeiptr(bytes.len())?,
            bytes.as_ptr().cast(),
        );
    }
    Ok(())
}

/// Allocate an immutable data store for `buffer`, filled with `data`.
///
/// Unlike [`data`], this may only be done once per buffer.
#[doc(alias = "glNamedBufferStorage")]
pub fn storage<T: bytemuck::Pod>(
    buffer: &BufferId,
    data: &[T],
    flags: StorageFlags,
) -> Result<()> {
    let bytes: &[u8] = bytemuck::cast_slice(data);
    unsafe {
        gl::NamedBufferStorage(
            buffer.get(),
            sizeiptr(bytes.len())?,
            bytes.as_ptr().cast(),
            flags.bits(),
        );
    }
    Ok(())
}

/// Size of the data store in bytes.
///
/// Read as a 64-bit value, the 32-bit query clamps stores of 2GiB or more.
///
/// # Errors
/// [`Error::OutOfRange`] if the size does not fit a `usize`.
#[doc(alias = "GL_BUFFER_SIZE")]
#[doc(alias = "glGetNamedBufferParameteri64v")]
pub fn size(buffer: &BufferId) -> Result<usize> {
    let mut size: GLint64 = 0;
    unsafe {
        gl::GetNamedBufferParameteri64v(
            buffer.get(),
            BufferParameter::Size.as_gl(),
            std::ptr::addr_of_mut!(size),
        );
    }
    usize::try_from(size).map_err(|_| Error::OutOfRange(size as u64))
}
