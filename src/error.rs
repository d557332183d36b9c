//! Error types, and polling of the GL error flag.

use crate::gl::{self, types::GLenum};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `glCompileShader` did not succeed. Holds the shader info log.
    #[error("shader failed to compile: {log}")]
    Compile { log: String },
    /// `glLinkProgram` did not succeed. Holds the program info log.
    #[error("program failed to link: {log}")]
    Link { log: String },
    /// The GL error flag was set.
    #[error(transparent)]
    Gl(#[from] GlError),
    /// Pixel data is shorter than the region it is meant to fill.
    #[error("image data is {actual} bytes, but the region needs at least {expected}")]
    ImageDataTooSmall { expected: usize, actual: usize },
    /// A packed pixel type was paired with a format of a different component count.
    #[error("pixel type {pixel_type:#06x} cannot be used with format {format:#06x}")]
    IncompatiblePixelType { format: GLenum, pixel_type: GLenum },
    /// The GL returned an enum value this crate has no variant for.
    #[error("unrecognized GLenum {0:#06x}")]
    UnknownEnum(GLenum),
    /// A string passed to the GL contained a nul byte.
    #[error("string contains an interior nul byte")]
    InteriorNul(#[from] std::ffi::NulError),
    /// An output slice for a `glGet*` call was empty.
    #[error("output slice must hold at least one value")]
    EmptyOutput,
    /// A size, count, or offset does not fit the integer type it is converted to,
    /// either a GL integer on the way in or `usize` on the way out.
    #[error("{0} does not fit the integer type it is converted to")]
    OutOfRange(u64),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

gl_enum! {
    /// Values of the GL error flag, as returned by `glGetError`.
    #[derive(thiserror::Error)]
    pub enum GlError {
        #[error("GL_INVALID_ENUM")]
        InvalidEnum = INVALID_ENUM,
        #[error("GL_INVALID_VALUE")]
        InvalidValue = INVALID_VALUE,
        #[error("GL_INVALID_OPERATION")]
        InvalidOperation = INVALID_OPERATION,
        #[error("GL_STACK_OVERFLOW")]
        StackOverflow = STACK_OVERFLOW,
        #[error("GL_STACK_UNDERFLOW")]
        StackUnderflow = STACK_UNDERFLOW,
        #[error("GL_OUT_OF_MEMORY")]
        OutOfMemory = OUT_OF_MEMORY,
        #[error("GL_INVALID_FRAMEBUFFER_OPERATION")]
        InvalidFramebufferOperation = INVALID_FRAMEBUFFER_OPERATION,
        #[error("GL_CONTEXT_LOST")]
        ContextLost = CONTEXT_LOST,
    }
}

/// Pop one value off the GL error flag.
#[doc(alias = "glGetError")]
pub fn check_error() -> Result<()> {
    match unsafe { gl::GetError() } {
        gl::NO_ERROR => Ok(()),
        code => Err(GlError::try_from(code)?.into()),
    }
}

/// Pop every outstanding value off the GL error flag.
///
/// Stops after a bounded number of iterations, a lost context may report
/// `GL_CONTEXT_LOST` forever.
#[doc(alias = "glGetError")]
pub fn drain_errors() -> Vec<Error> {
    const MAX_ERRORS: usize = 32;
    std::iter::from_fn(|| check_error().err())
        .take(MAX_ERRORS)
        .collect()
}
