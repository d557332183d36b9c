/// Declare a `#[repr(u32)]` enum whose variants are GL constants, implement
/// [`GLEnum`](crate::GLEnum) for it, and allow converting raw `GLenum`s back into it.
///
/// ```ignore
/// gl_enum! {
///     pub enum Topology {
///         Points = POINTS,
///         Lines = LINES,
///     }
/// }
/// ```
macro_rules! gl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $crate::gl::$value,
            )*
        }
        // Safety: is repr(u32) enum, every discriminant is a GL constant.
        unsafe impl $crate::GLEnum for $name {}

        impl ::core::convert::TryFrom<$crate::gl::types::GLenum> for $name {
            type Error = $crate::Error;
            fn try_from(value: $crate::gl::types::GLenum) -> $crate::Result<Self> {
                match value {
                    $(
                        $crate::gl::$value => Ok(Self::$variant),
                    )*
                    other => Err($crate::Error::UnknownEnum(other)),
                }
            }
        }
        impl ::core::convert::From<$name> for $crate::gl::types::GLenum {
            fn from(value: $name) -> Self {
                $crate::GLEnum::as_gl(&value)
            }
        }
    };
}
