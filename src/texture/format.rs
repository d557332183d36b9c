//! Image formats and pixel transfer types.

use crate::{Error, GLEnum, Result};

gl_enum! {
    /// Sized formats for texture storage.
    pub enum InternalFormat {
        // Sized color formats
        R8 = R8,
        R8Snorm = R8_SNORM,
        R16 = R16,
        R16Snorm = R16_SNORM,
        R16f = R16F,
        R32f = R32F,
        R8i = R8I,
        R16i = R16I,
        R32i = R32I,
        R8ui = R8UI,
        R16ui = R16UI,
        R32ui = R32UI,

        Rg8 = RG8,
        Rg8Snorm = RG8_SNORM,
        Rg16 = RG16,
        Rg16Snorm = RG16_SNORM,
        Rg16f = RG16F,
        Rg32f = RG32F,
        Rg8i = RG8I,
        Rg16i = RG16I,
        Rg32i = RG32I,
        Rg8ui = RG8UI,
        Rg16ui = RG16UI,
        Rg32ui = RG32UI,

        Rgb4 = RGB4,
        Rgb5 = RGB5,
        Rgb8 = RGB8,
        Rgb8Snorm = RGB8_SNORM,
        Rgb8i = RGB8I,
        Rgb8ui = RGB8UI,
        Rgb16 = RGB16,
        Rgb16Snorm = RGB16_SNORM,
        Rgb16f = RGB16F,
        Rgb16i = RGB16I,
        Rgb16ui = RGB16UI,
        Rgb32f = RGB32F,
        Rgb32i = RGB32I,
        Rgb32ui = RGB32UI,
        Srgb8 = SRGB8,
        R11fG11fB10f = R11F_G11F_B10F,
        Rgb9E5 = RGB9_E5,

        Rgba8 = RGBA8,
        Rgba8Snorm = RGBA8_SNORM,
        Rgba16 = RGBA16,
        Rgba16f = RGBA16F,
        Rgba32f = RGBA32F,
        Rgba8i = RGBA8I,
        Rgba16i = RGBA16I,
        Rgba32i = RGBA32I,
        Rgba8ui = RGBA8UI,
        Rgba16ui = RGBA16UI,
        Rgba32ui = RGBA32UI,
        Srgb8Alpha8 = SRGB8_ALPHA8,
        Rgb10A2 = RGB10_A2,
        Rgb10A2ui = RGB10_A2UI,

        // Sized depth / stencil
        DepthComponent16 = DEPTH_COMPONENT16,
        DepthComponent24 = DEPTH_COMPONENT24,
        DepthComponent32f = DEPTH_COMPONENT32F,
        Depth24Stencil8 = DEPTH24_STENCIL8,
        Depth32fStencil8 = DEPTH32F_STENCIL8,
        StencilIndex8 = STENCIL_INDEX8,
    }
}

gl_enum! {
    /// Layout of the components of one pixel in host memory.
    pub enum Format {
        Red = RED,
        Rg = RG,
        Rgb = RGB,
        Bgr = BGR,
        Rgba = RGBA,
        Bgra = BGRA,
        RedInteger = RED_INTEGER,
        RgInteger = RG_INTEGER,
        RgbInteger = RGB_INTEGER,
        BgrInteger = BGR_INTEGER,
        RgbaInteger = RGBA_INTEGER,
        BgraInteger = BGRA_INTEGER,
        StencilIndex = STENCIL_INDEX,
        DepthComponent = DEPTH_COMPONENT,
        DepthStencil = DEPTH_STENCIL,
    }
}
impl Format {
    /// Number of components per pixel.
    #[must_use]
    pub fn components(self) -> usize {
        match self {
            Self::Red | Self::RedInteger | Self::StencilIndex | Self::DepthComponent => 1,
            Self::Rg | Self::RgInteger | Self::DepthStencil => 2,
            Self::Rgb | Self::Bgr | Self::RgbInteger | Self::BgrInteger => 3,
            Self::Rgba | Self::Bgra | Self::RgbaInteger | Self::BgraInteger => 4,
        }
    }
}

gl_enum! {
    /// Datatype of pixel components in host memory.
    ///
    /// Packed types hold every component of a pixel in a single value.
    pub enum PixelType {
        U8 = UNSIGNED_BYTE,
        I8 = BYTE,
        U16 = UNSIGNED_SHORT,
        I16 = SHORT,
        U32 = UNSIGNED_INT,
        I32 = INT,
        F16 = HALF_FLOAT,
        F32 = FLOAT,
        Packed3_3_2 = UNSIGNED_BYTE_3_3_2,
        Reverse2_3_3 = UNSIGNED_BYTE_2_3_3_REV,
        Packed5_6_5 = UNSIGNED_SHORT_5_6_5,
        Reverse5_6_5 = UNSIGNED_SHORT_5_6_5_REV,
        Packed4_4_4_4 = UNSIGNED_SHORT_4_4_4_4,
        Reverse4_4_4_4 = UNSIGNED_SHORT_4_4_4_4_REV,
        Packed5_5_5_1 = UNSIGNED_SHORT_5_5_5_1,
        Reverse1_5_5_5 = UNSIGNED_SHORT_1_5_5_5_REV,
        Packed8_8_8_8 = UNSIGNED_INT_8_8_8_8,
        Reverse8_8_8_8 = UNSIGNED_INT_8_8_8_8_REV,
        Packed10_10_10_2 = UNSIGNED_INT_10_10_10_2,
        Reverse2_10_10_10 = UNSIGNED_INT_2_10_10_10_REV,
        Reverse10F11F11F = UNSIGNED_INT_10F_11F_11F_REV,
        Reverse5_9_9_9 = UNSIGNED_INT_5_9_9_9_REV,
        Packed24_8 = UNSIGNED_INT_24_8,
        F32Reverse24_8 = FLOAT_32_UNSIGNED_INT_24_8_REV,
    }
}
impl PixelType {
    /// For packed types, the size of one pixel and the component count it packs.
    /// `None` for types storing one component per value.
    fn packed(self) -> Option<(usize, usize)> {
        Some(match self {
            Self::U8 | Self::I8 => return None,
            Self::U16 | Self::I16 | Self::F16 => return None,
            Self::U32 | Self::I32 | Self::F32 => return None,

            Self::Packed3_3_2 | Self::Reverse2_3_3 => (1, 3),
            Self::Packed5_6_5 | Self::Reverse5_6_5 => (2, 3),
            Self::Packed4_4_4_4
            | Self::Reverse4_4_4_4
            | Self::Packed5_5_5_1
            | Self::Reverse1_5_5_5 => (2, 4),
            Self::Packed8_8_8_8
            | Self::Reverse8_8_8_8
            | Self::Packed10_10_10_2
            | Self::Reverse2_10_10_10 => (4, 4),
            Self::Reverse10F11F11F | Self::Reverse5_9_9_9 => (4, 3),
            // Depth + stencil
            Self::Packed24_8 => (4, 2),
            Self::F32Reverse24_8 => (8, 2),
        })
    }
    /// Size of a single component, for unpacked types.
    fn component_size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 | Self::F16 => 2,
            _ => 4,
        }
    }
}

/// The size in bytes of one pixel of `format` stored as `ty`.
///
/// # Errors
/// [`Error::IncompatiblePixelType`] if `ty` is packed and holds a different number of
/// components than `format`, or if `format` is [`Format::DepthStencil`] and `ty` is not a
/// packed depth-stencil type.
pub fn bytes_per_pixel(format: Format, ty: PixelType) -> Result<usize> {
    let incompatible = || Error::IncompatiblePixelType {
        format: format.as_gl(),
        pixel_type: ty.as_gl(),
    };
    let depth_stencil_type = matches!(ty, PixelType::Packed24_8 | PixelType::F32Reverse24_8);
    if (format == Format::DepthStencil) != depth_stencil_type {
        return Err(incompatible());
    }
    match ty.packed() {
        Some((size, components)) if components == format.components() => Ok(size),
        Some(_) => Err(incompatible()),
        None => Ok(format.components() * ty.component_size()),
    }
}
