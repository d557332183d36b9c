//! Texture targets, parameters, storage allocation and pixel uploads.
//!
//! All uploads go through the direct-state-access entry points, so none of these
//! functions disturb the texture bindings of the context.

use crate::{
    gl::{
        self,
        types::{GLint, GLsizei},
    },
    id::{BufferId, TextureId},
    Error, GLEnum, Result,
};

mod format;
pub use format::{bytes_per_pixel, Format, InternalFormat, PixelType};

gl_enum! {
    /// Targets a texture is created for, and may be bound to.
    pub enum TextureTarget {
        D1 = TEXTURE_1D,
        D1Array = TEXTURE_1D_ARRAY,
        D2 = TEXTURE_2D,
        D2Array = TEXTURE_2D_ARRAY,
        D3 = TEXTURE_3D,
        Rectangle = TEXTURE_RECTANGLE,
        Cube = TEXTURE_CUBE_MAP,
        CubeArray = TEXTURE_CUBE_MAP_ARRAY,
        Buffer = TEXTURE_BUFFER,
        D2Multisample = TEXTURE_2D_MULTISAMPLE,
        D2MultisampleArray = TEXTURE_2D_MULTISAMPLE_ARRAY,
    }
}

gl_enum! {
    /// Parameters readable with `glGetTextureParameteriv`, and mostly writable with
    /// [`set_parameter`].
    pub enum TextureParameter {
        DepthStencilMode = DEPTH_STENCIL_TEXTURE_MODE,
        BaseLevel = TEXTURE_BASE_LEVEL,
        MaxLevel = TEXTURE_MAX_LEVEL,
        MinLod = TEXTURE_MIN_LOD,
        MaxLod = TEXTURE_MAX_LOD,
        LodBias = TEXTURE_LOD_BIAS,
        /// Four values.
        BorderColor = TEXTURE_BORDER_COLOR,
        CompareFunc = TEXTURE_COMPARE_FUNC,
        CompareMode = TEXTURE_COMPARE_MODE,
        MinFilter = TEXTURE_MIN_FILTER,
        MagFilter = TEXTURE_MAG_FILTER,
        WrapS = TEXTURE_WRAP_S,
        WrapT = TEXTURE_WRAP_T,
        WrapR = TEXTURE_WRAP_R,
        /// Four values.
        SwizzleRgba = TEXTURE_SWIZZLE_RGBA,
        SwizzleR = TEXTURE_SWIZZLE_R,
        SwizzleG = TEXTURE_SWIZZLE_G,
        SwizzleB = TEXTURE_SWIZZLE_B,
        SwizzleA = TEXTURE_SWIZZLE_A,
        /// Read-only.
        Target = TEXTURE_TARGET,
        /// Read-only.
        ImmutableFormat = TEXTURE_IMMUTABLE_FORMAT,
        /// Read-only.
        ImmutableLevels = TEXTURE_IMMUTABLE_LEVELS,
        /// Read-only.
        ViewMinLevel = TEXTURE_VIEW_MIN_LEVEL,
        /// Read-only.
        ViewNumLevels = TEXTURE_VIEW_NUM_LEVELS,
        /// Read-only.
        ViewMinLayer = TEXTURE_VIEW_MIN_LAYER,
        /// Read-only.
        ViewNumLayers = TEXTURE_VIEW_NUM_LAYERS,
    }
}

impl crate::object::ParameterName for TextureParameter {
    fn values(self) -> usize {
        match self {
            Self::SwizzleRgba | Self::BorderColor => 4,
            _ => 1,
        }
    }
}

gl_enum! {
    /// Where a swizzled channel reads its value from.
    pub enum ColorComponent {
        Red = RED,
        Green = GREEN,
        Blue = BLUE,
        Alpha = ALPHA,
        Zero = ZERO,
        One = ONE,
    }
}

gl_enum! {
    /// The channel of a texture being swizzled.
    pub enum SwizzleChannel {
        Red = TEXTURE_SWIZZLE_R,
        Green = TEXTURE_SWIZZLE_G,
        Blue = TEXTURE_SWIZZLE_B,
        Alpha = TEXTURE_SWIZZLE_A,
    }
}

/// Row alignment of pixel data in host memory.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    One = 1,
    Two = 2,
    /// The GL's initial value.
    #[default]
    Four = 4,
    Eight = 8,
}

fn extent(value: u32) -> Result<GLsizei> {
    value
        .try_into()
        .map_err(|_| Error::OutOfRange(value.into()))
}

fn levels(value: u32) -> Result<GLsizei> {
    if value == 0 {
        return Err(Error::InvalidArgument("textures need at least one level"));
    }
    extent(value)
}

/// Check `data` covers a tightly-packed region of `dims` pixels, returning its bytes.
/// `None` if the region is empty.
fn region<'a, T: bytemuck::Pod>(
    dims: &[u32],
    format: Format,
    ty: PixelType,
    data: &'a [T],
) -> Result<Option<&'a [u8]>> {
    let pixel = bytes_per_pixel(format, ty)?;
    let expected = dims
        .iter()
        .try_fold(pixel, |acc, &dim| acc.checked_mul(usize::try_from(dim).ok()?))
        .ok_or(Error::OutOfRange(u64::MAX))?;
    let bytes: &[u8] = bytemuck::cast_slice(data);
    if bytes.len() < expected {
        return Err(Error::ImageDataTooSmall {
            expected,
            actual: bytes.len(),
        });
    }
    Ok((expected != 0).then_some(bytes))
}

/// Allocate immutable storage for every level of a 1D texture.
#[doc(alias = "glTextureStorage1D")]
pub fn storage_1d(
    texture: &TextureId,
    format: InternalFormat,
    width: u32,
    level_count: u32,
) -> Result<()> {
    unsafe {
        gl::TextureStorage1D(
            texture.get(),
            levels(level_count)?,
            format.as_gl(),
            extent(width)?,
        );
    }
    Ok(())
}

/// Allocate immutable storage for every level of a 2D (or 1D array, or cube) texture.
#[doc(alias = "glTextureStorage2D")]
pub fn storage_2d(
    texture: &TextureId,
    format: InternalFormat,
    [width, height]: [u32; 2],
    level_count: u32,
) -> Result<()> {
    unsafe {
        gl::TextureStorage2D(
            texture.get(),
            levels(level_count)?,
            format.as_gl(),
            extent(width)?,
            extent(height)?,
        );
    }
    Ok(())
}

/// Allocate immutable storage for every level of a 3D (or 2D array) texture.
#[doc(alias = "glTextureStorage3D")]
pub fn storage_3d(
    texture: &TextureId,
    format: InternalFormat,
    [width, height, depth]: [u32; 3],
    level_count: u32,
) -> Result<()> {
    unsafe {
        gl::TextureStorage3D(
            texture.get(),
            levels(level_count)?,
            format.as_gl(),
            extent(width)?,
            extent(height)?,
            extent(depth)?,
        );
    }
    Ok(())
}

/// Overwrite a span of texels of `level`.
///
/// `data` must hold at least `width` tightly-packed pixels.
#[doc(alias = "glTextureSubImage1D")]
pub fn sub_image_1d<T: bytemuck::Pod>(
    texture: &TextureId,
    level: u32,
    x: u32,
    width: u32,
    format: Format,
    ty: PixelType,
    data: &[T],
) -> Result<()> {
    let Some(bytes) = region(&[width], format, ty, data)? else {
        return Ok(());
    };
    unsafe {
        gl::TextureSubImage1D(
            texture.get(),
            extent(level)?,
            extent(x)?,
            extent(width)?,
            format.as_gl(),
            ty.as_gl(),
            bytes.as_ptr().cast(),
        );
    }
    Ok(())
}

/// Overwrite a rectangle of texels of `level`.
///
/// `data` must hold at least `width * height` tightly-packed pixels. Rows are
/// additionally padded according to [`set_unpack_alignment`], which this does
/// not account for; use [`Alignment::One`] for tightly-packed rows.
#[doc(alias = "glTextureSubImage2D")]
pub fn sub_image_2d<T: bytemuck::Pod>(
    texture: &TextureId,
    level: u32,
    [x, y]: [u32; 2],
    [width, height]: [u32; 2],
    format: Format,
    ty: PixelType,
    data: &[T],
) -> Result<()> {
    let Some(bytes) = region(&[width, height], format, ty, data)? else {
        return Ok(());
    };
    unsafe {
        gl::TextureSubImage2D(
            texture.get(),
            extent(level)?,
            extent(x)?,
            extent(y)?,
            extent(width)?,
            extent(height)?,
            format.as_gl(),
            ty.as_gl(),
            bytes.as_ptr().cast(),
        );
    }
    Ok(())
}

/// Overwrite a box of texels of `level`.
///
/// See [`sub_image_2d`] for row alignment.
#[doc(alias = "glTextureSubImage3D")]
pub fn sub_image_3d<T: bytemuck::Pod>(
    texture: &TextureId,
    level: u32,
    [x, y, z]: [u32; 3],
    [width, height, depth]: [u32; 3],
    format: Format,
    ty: PixelType,
    data: &[T],
) -> Result<()> {
    let Some(bytes) = region(&[width, height, depth], format, ty, data)? else {
        return Ok(());
    };
    unsafe {
        gl::TextureSubImage3D(
            texture.get(),
            extent(level)?,
            extent(x)?,
            extent(y)?,
            extent(z)?,
            extent(width)?,
            extent(height)?,
            extent(depth)?,
            format.as_gl(),
            ty.as_gl(),
            bytes.as_ptr().cast(),
        );
    }
    Ok(())
}

/// Set an integer texture parameter.
#[doc(alias = "glTextureParameteri")]
pub fn set_parameter(texture: &TextureId, param: TextureParameter, value: GLint) {
    unsafe { gl::TextureParameteri(texture.get(), param.as_gl(), value) }
}

/// Choose where a single channel of the texture reads from when sampled.
#[doc(alias = "GL_TEXTURE_SWIZZLE_R")]
#[doc(alias = "GL_TEXTURE_SWIZZLE_G")]
#[doc(alias = "GL_TEXTURE_SWIZZLE_B")]
#[doc(alias = "GL_TEXTURE_SWIZZLE_A")]
pub fn set_swizzle(texture: &TextureId, channel: SwizzleChannel, component: ColorComponent) {
    unsafe {
        gl::TextureParameteri(
            texture.get(),
            channel.as_gl(),
            component.as_gl() as GLint,
        );
    }
}

/// Choose where each of the red, green, blue, and alpha channels read from when sampled.
///
/// `[Red, Green, Blue, Alpha]` is the identity.
#[doc(alias = "GL_TEXTURE_SWIZZLE_RGBA")]
pub fn set_swizzle_rgba(texture: &TextureId, components: [ColorComponent; 4]) {
    let components = components.map(|component| component.as_gl() as GLint);
    unsafe {
        gl::TextureParameteriv(
            texture.get(),
            gl::TEXTURE_SWIZZLE_RGBA,
            components.as_ptr(),
        );
    }
}

/// Use the data store of `buffer` as the texels of a buffer texture.
#[doc(alias = "glTextureBuffer")]
pub fn attach_buffer(texture: &TextureId, format: InternalFormat, buffer: &BufferId) {
    unsafe { gl::TextureBuffer(texture.get(), format.as_gl(), buffer.get()) }
}

/// Set the row alignment used when reading pixel data from host memory.
#[doc(alias = "glPixelStorei")]
#[doc(alias = "GL_UNPACK_ALIGNMENT")]
pub fn set_unpack_alignment(alignment: Alignment) {
    unsafe { gl::PixelStorei(gl::UNPACK_ALIGNMENT, alignment as GLint) }
}
