//! Setting uniforms of the default uniform block with `glProgramUniform*`.
//!
//! These write directly to the named program, it need not be in use.

use crate::{
    gl::{self, types::GLint},
    id::ProgramId,
    program::UniformLocation,
    sizei, Error, Result,
};

/// Scalar type of a uniform [`Value`], selecting the `glProgramUniform*` suffix.
pub enum Ty {
    U32,
    I32,
    F32,
    F64,
}
/// Marker trait for types which may be used in arguments to `glProgramUniform*` calls.
/// # Safety
/// Only implement for types which are wholly represented by the type corresponding to `Ty`.
pub unsafe trait Value: crate::sealed::Sealed + Copy + 'static {
    const TYPE: Ty;
}
unsafe impl Value for f32 {
    const TYPE: Ty = Ty::F32;
}
impl crate::sealed::Sealed for f32 {}
unsafe impl Value for f64 {
    const TYPE: Ty = Ty::F64;
}
impl crate::sealed::Sealed for f64 {}
unsafe impl Value for i32 {
    const TYPE: Ty = Ty::I32;
}
impl crate::sealed::Sealed for i32 {}
unsafe impl Value for u32 {
    const TYPE: Ty = Ty::U32;
}
impl crate::sealed::Sealed for u32 {}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<T: Value>(pub [T; 2]);
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3<T: Value>(pub [T; 3]);
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4<T: Value>(pub [T; 4]);

macro_rules! matrix {
    ($(#[$meta:meta])* pub struct $name:ident(pub $ty:ty)) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name(pub $ty);
        impl ::core::convert::From<$ty> for $name {
            fn from(value: $ty) -> Self {
                Self(value)
            }
        }
        impl ::core::convert::From<$name> for $ty {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}
// Column-major: the outer array holds columns.
matrix!(pub struct Mat2(pub [[f32; 2]; 2]));
matrix!(pub struct Mat3(pub [[f32; 3]; 3]));
matrix!(pub struct Mat4(pub [[f32; 4]; 4]));
matrix!(
    /// Two columns, three rows.
    pub struct Mat2x3(pub [[f32; 3]; 2])
);
matrix!(pub struct Mat2x4(pub [[f32; 4]; 2]));
matrix!(pub struct Mat3x2(pub [[f32; 2]; 3]));
matrix!(pub struct Mat3x4(pub [[f32; 4]; 3]));
matrix!(pub struct Mat4x2(pub [[f32; 2]; 4]));
matrix!(pub struct Mat4x3(pub [[f32; 3]; 4]));

/// Value for a matrix uniform.
/// If the uniform is not an array, the slice should have one element.
pub enum Matrix<'a> {
    Mat2(&'a [Mat2]),
    Mat3(&'a [Mat3]),
    Mat4(&'a [Mat4]),
    Mat2x3(&'a [Mat2x3]),
    Mat2x4(&'a [Mat2x4]),
    Mat3x2(&'a [Mat3x2]),
    Mat3x4(&'a [Mat3x4]),
    Mat4x2(&'a [Mat4x2]),
    Mat4x3(&'a [Mat4x3]),
}
impl Matrix<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Mat2(s) => s.len(),
            Self::Mat3(s) => s.len(),
            Self::Mat4(s) => s.len(),
            Self::Mat2x3(s) => s.len(),
            Self::Mat2x4(s) => s.len(),
            Self::Mat3x2(s) => s.len(),
            Self::Mat3x4(s) => s.len(),
            Self::Mat4x2(s) => s.len(),
            Self::Mat4x3(s) => s.len(),
        }
    }
    /// Get the number of locations consumed by this array.
    #[must_use]
    pub fn locations(&self) -> usize {
        let columns = match self {
            Self::Mat2(_) | Self::Mat2x3(_) | Self::Mat2x4(_) => 2,
            Self::Mat3(_) | Self::Mat3x2(_) | Self::Mat3x4(_) => 3,
            Self::Mat4(_) | Self::Mat4x2(_) | Self::Mat4x3(_) => 4,
        };
        self.len() * columns
    }
}

macro_rules! matrix_froms {
    {$from:tt} => {
        impl<'a> ::core::convert::From<&'a $from> for Matrix<'a> {
            fn from(value: &'a $from) -> Self {
                Self::$from(::core::slice::from_ref(value))
            }
        }
        impl<'a> ::core::convert::From<&'a [$from]> for Matrix<'a> {
            fn from(value: &'a [$from]) -> Self {
                Self::$from(value)
            }
        }
    }
}

matrix_froms!(Mat2);
matrix_froms!(Mat3);
matrix_froms!(Mat4);
matrix_froms!(Mat2x3);
matrix_froms!(Mat2x4);
matrix_froms!(Mat3x2);
matrix_froms!(Mat3x4);
matrix_froms!(Mat4x2);
matrix_froms!(Mat4x3);

/// Value for a non-matrix uniform.
/// If the uniform is not an array, the slice should have one element.
pub enum Vector<'a, T: Value> {
    /// Scalar value(s).
    ///
    /// `i32` is also used to assign texture units to samplers.
    ///
    /// It is not valid to pass e.g. 4 scalars for a Vec4 value.
    Scalar(&'a [T]),
    Vec2(&'a [Vec2<T>]),
    Vec3(&'a [Vec3<T>]),
    Vec4(&'a [Vec4<T>]),
}
impl<T: Value> Vector<'_, T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(s) => s.len(),
            Self::Vec2(s) => s.len(),
            Self::Vec3(s) => s.len(),
            Self::Vec4(s) => s.len(),
        }
    }
    /// Get the number of locations consumed by this array.
    #[must_use]
    pub fn locations(&self) -> usize {
        self.len()
    }
}

macro_rules! vector_froms {
    {$from:tt} => {
        impl<'a, T: Value> ::core::convert::From<&'a $from<T>> for Vector<'a, T> {
            fn from(value: &'a $from<T>) -> Self {
                Self::$from(::core::slice::from_ref(value))
            }
        }
        impl<'a, T: Value> ::core::convert::From<&'a [$from<T>]> for Vector<'a, T> {
            fn from(value: &'a [$from<T>]) -> Self {
                Self::$from(value)
            }
        }
    }
}

impl<'a, T: Value> From<&'a T> for Vector<'a, T> {
    fn from(value: &'a T) -> Self {
        Self::Scalar(core::slice::from_ref(value))
    }
}
impl<'a, T: Value> From<&'a [T]> for Vector<'a, T> {
    fn from(value: &'a [T]) -> Self {
        Self::Scalar(value)
    }
}
vector_froms!(Vec2);
vector_froms!(Vec3);
vector_froms!(Vec4);

#[cfg(feature = "mint")]
mod mint_impls {
    use super::{Mat2, Mat3, Mat4, Value, Vec2, Vec3, Vec4};

    impl<T: Value> From<mint::Vector2<T>> for Vec2<T> {
        fn from(value: mint::Vector2<T>) -> Self {
            Self(value.into())
        }
    }
    impl<T: Value> From<mint::Vector3<T>> for Vec3<T> {
        fn from(value: mint::Vector3<T>) -> Self {
            Self(value.into())
        }
    }
    impl<T: Value> From<mint::Vector4<T>> for Vec4<T> {
        fn from(value: mint::Vector4<T>) -> Self {
            Self(value.into())
        }
    }
    impl From<mint::ColumnMatrix2<f32>> for Mat2 {
        fn from(value: mint::ColumnMatrix2<f32>) -> Self {
            Self(value.into())
        }
    }
    impl From<mint::ColumnMatrix3<f32>> for Mat3 {
        fn from(value: mint::ColumnMatrix3<f32>) -> Self {
            Self(value.into())
        }
    }
    impl From<mint::ColumnMatrix4<f32>> for Mat4 {
        fn from(value: mint::ColumnMatrix4<f32>) -> Self {
            Self(value.into())
        }
    }
}

fn location_of(location: UniformLocation) -> Result<GLint> {
    GLint::try_from(location.0).map_err(|_| Error::OutOfRange(location.0.into()))
}

/// Starting at `location`, set one (or an array) of uniform scalars or vectors of `program`.
/// The value may only be an array if it was declared as an array within the shader.
///
/// The number of uniform locations consumed is given by `value.locations()`.
/// Empty values do nothing.
#[doc(alias = "glProgramUniform")]
pub fn set<'a, T: Value>(
    program: &ProgramId,
    location: UniformLocation,
    value: impl Into<Vector<'a, T>>,
) -> Result<()> {
    let value = value.into();
    if value.is_empty() {
        return Ok(());
    }
    let program = program.get();
    let location = location_of(location)?;
    let count = sizei(value.len())?;

    macro_rules! upload {
        ($s:expr, $f32:ident, $f64:ident, $i32:ident, $u32:ident) => {
            unsafe {
                match T::TYPE {
                    Ty::F32 => gl::$f32(program, location, count, $s.as_ptr().cast()),
                    Ty::F64 => gl::$f64(program, location, count, $s.as_ptr().cast()),
                    Ty::I32 => gl::$i32(program, location, count, $s.as_ptr().cast()),
                    Ty::U32 => gl::$u32(program, location, count, $s.as_ptr().cast()),
                }
            }
        };
    }

    match value {
        Vector::Scalar(s) => upload!(
            s,
            ProgramUniform1fv,
            ProgramUniform1dv,
            ProgramUniform1iv,
            ProgramUniform1uiv
        ),
        Vector::Vec2(s) => upload!(
            s,
            ProgramUniform2fv,
            ProgramUniform2dv,
            ProgramUniform2iv,
            ProgramUniform2uiv
        ),
        Vector::Vec3(s) => upload!(
            s,
            ProgramUniform3fv,
            ProgramUniform3dv,
            ProgramUniform3iv,
            ProgramUniform3uiv
        ),
        Vector::Vec4(s) => upload!(
            s,
            ProgramUniform4fv,
            ProgramUniform4dv,
            ProgramUniform4iv,
            ProgramUniform4uiv
        ),
    }
    Ok(())
}

/// Starting at `location`, set one (or an array) of uniform matrices of `program`.
/// The value may only be an array if it was declared as an array within the shader.
///
/// The number of uniform locations consumed is given by `value.locations()`.
/// Empty values do nothing.
#[doc(alias = "glProgramUniformMatrix")]
pub fn set_matrix<'a>(
    program: &ProgramId,
    location: UniformLocation,
    value: impl Into<Matrix<'a>>,
) -> Result<()> {
    let value = value.into();
    if value.is_empty() {
        return Ok(());
    }
    let program = program.get();
    let location = location_of(location)?;
    let count = sizei(value.len())?;

    macro_rules! upload {
        ($s:expr, $f:ident) => {
            unsafe { gl::$f(program, location, count, gl::FALSE, $s.as_ptr().cast()) }
        };
    }

    match value {
        Matrix::Mat2(s) => upload!(s, ProgramUniformMatrix2fv),
        Matrix::Mat3(s) => upload!(s, ProgramUniformMatrix3fv),
        Matrix::Mat4(s) => upload!(s, ProgramUniformMatrix4fv),
        Matrix::Mat2x3(s) => upload!(s, ProgramUniformMatrix2x3fv),
        Matrix::Mat2x4(s) => upload!(s, ProgramUniformMatrix2x4fv),
        Matrix::Mat3x2(s) => upload!(s, ProgramUniformMatrix3x2fv),
        Matrix::Mat3x4(s) => upload!(s, ProgramUniformMatrix3x4fv),
        Matrix::Mat4x2(s) => upload!(s, ProgramUniformMatrix4x2fv),
        Matrix::Mat4x3(s) => upload!(s, ProgramUniformMatrix4x3fv),
    }
    Ok(())
}
