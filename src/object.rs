//! Object kinds, and the traits that dispatch GL calls on them.
//!
//! A kind is a zero-sized marker naming one category of GL object. It is never
//! instantiated, it only parameterizes [`Id`](crate::Id) and [`Unique`](crate::Unique),
//! which forward to the associated functions here. Capabilities that only some kinds
//! have (binding, parameter queries) live in separate traits, so that e.g. binding a
//! shader is a compile error rather than a GL error.

use crate::{
    buffer::{BufferParameter, BufferTarget},
    gl::{
        self,
        types::{GLenum, GLint, GLuint},
    },
    program::{ProgramParameter, ShaderParameter, ShaderType},
    texture::{TextureParameter, TextureTarget},
    GLEnum,
};

gl_enum! {
    /// The object categories this crate supports, by their `glObjectLabel` identifier.
    pub enum ObjectType {
        Program = PROGRAM,
        Shader = SHADER,
        VertexArray = VERTEX_ARRAY,
        Buffer = BUFFER,
        ProgramPipeline = PROGRAM_PIPELINE,
        Texture = TEXTURE,
    }
}

/// Lifetime operations of one kind of GL object.
///
/// Sealed: the set of kinds is fixed by this crate.
pub trait Kind: crate::sealed::Sealed + 'static {
    const TYPE: ObjectType;
    /// The name no object of this kind can have.
    const NULL: GLuint = 0;
    /// Extra information needed at creation time, `()` if none.
    type Create;
    /// Create a new object, returning its name.
    fn create(args: Self::Create) -> GLuint;
    /// Delete the named object. Deleting [`Self::NULL`] is silently ignored by the GL.
    fn destroy(name: GLuint);
    /// Whether `name` currently names an object of this kind.
    fn check(name: GLuint) -> bool;
}

/// Kinds which can be bound to the context.
pub trait Bind: Kind {
    /// Binding point, `()` for kinds with exactly one.
    type Target: Copy;
    fn bind(name: GLuint, target: Self::Target);
}

/// Kinds with a single binding point, which can be asked what is currently bound.
pub trait IsBound: Bind<Target = ()> {
    fn is_bound(name: GLuint) -> bool;
}

/// A parameter name accepted by a `glGet*iv` query.
pub trait ParameterName: GLEnum + Copy {
    /// How many integers the GL writes when this parameter is read.
    fn values(self) -> usize {
        1
    }
}

/// The most integers any [`ParameterName`] of this crate writes.
pub const MAX_PARAMETER_VALUES: usize = 4;

/// Kinds with `glGet*iv` style integer parameters.
pub trait Parameters: Kind {
    type Parameter: ParameterName;
    /// Write the value(s) of `param` into `out`.
    ///
    /// # Safety
    /// `out` must hold at least [`ParameterName::values`] integers.
    unsafe fn parameters(name: GLuint, param: Self::Parameter, out: &mut [GLint]);
}

/// Kinds whose parameters can also be read from whatever is bound to a target.
pub trait BoundParameters: Bind + Parameters {
    /// Write the value(s) of `param` of the object bound to `target` into `out`.
    ///
    /// # Safety
    /// `out` must hold at least [`ParameterName::values`] integers.
    unsafe fn bound_parameters(target: Self::Target, param: Self::Parameter, out: &mut [GLint]);
}

macro_rules! kind {
    ($(#[$meta:meta])* pub enum $marker:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $marker {}
        impl crate::sealed::Sealed for $marker {}
    };
}

fn is_true(value: gl::types::GLboolean) -> bool {
    value == gl::TRUE
}

fn get_integer(pname: GLenum) -> GLint {
    let mut value = 0;
    unsafe { gl::GetIntegerv(pname, std::ptr::addr_of_mut!(value)) };
    value
}

fn is_current(pname: GLenum, name: GLuint) -> bool {
    // Names are handed out as GLuint, but queried as GLint.
    GLuint::try_from(get_integer(pname)).is_ok_and(|current| current == name)
}

kind!(
    /// Shader objects, created with a [`ShaderType`].
    pub enum Shader
);
impl Kind for Shader {
    const TYPE: ObjectType = ObjectType::Shader;
    type Create = ShaderType;
    #[doc(alias = "glCreateShader")]
    fn create(ty: ShaderType) -> GLuint {
        unsafe { gl::CreateShader(ty.as_gl()) }
    }
    #[doc(alias = "glDeleteShader")]
    fn destroy(name: GLuint) {
        unsafe { gl::DeleteShader(name) }
    }
    #[doc(alias = "glIsShader")]
    fn check(name: GLuint) -> bool {
        is_true(unsafe { gl::IsShader(name) })
    }
}
impl Parameters for Shader {
    type Parameter = ShaderParameter;
    #[doc(alias = "glGetShaderiv")]
    unsafe fn parameters(name: GLuint, param: ShaderParameter, out: &mut [GLint]) {
        unsafe { gl::GetShaderiv(name, param.as_gl(), out.as_mut_ptr()) }
    }
}

kind!(
    /// Program objects.
    pub enum Program
);
impl Kind for Program {
    const TYPE: ObjectType = ObjectType::Program;
    type Create = ();
    #[doc(alias = "glCreateProgram")]
    fn create((): ()) -> GLuint {
        unsafe { gl::CreateProgram() }
    }
    /// If the program is in use, deletion is deferred until it no longer is.
    #[doc(alias = "glDeleteProgram")]
    fn destroy(name: GLuint) {
        unsafe { gl::DeleteProgram(name) }
    }
    #[doc(alias = "glIsProgram")]
    fn check(name: GLuint) -> bool {
        is_true(unsafe { gl::IsProgram(name) })
    }
}
impl Bind for Program {
    type Target = ();
    #[doc(alias = "glUseProgram")]
    fn bind(name: GLuint, (): ()) {
        unsafe { gl::UseProgram(name) }
    }
}
impl IsBound for Program {
    #[doc(alias = "GL_CURRENT_PROGRAM")]
    fn is_bound(name: GLuint) -> bool {
        is_current(gl::CURRENT_PROGRAM, name)
    }
}
impl Parameters for Program {
    type Parameter = ProgramParameter;
    #[doc(alias = "glGetProgramiv")]
    unsafe fn parameters(name: GLuint, param: ProgramParameter, out: &mut [GLint]) {
        unsafe { gl::GetProgramiv(name, param.as_gl(), out.as_mut_ptr()) }
    }
}

kind!(
    /// Vertex array objects.
    pub enum VertexArray
);
impl Kind for VertexArray {
    const TYPE: ObjectType = ObjectType::VertexArray;
    type Create = ();
    #[doc(alias = "glCreateVertexArrays")]
    fn create((): ()) -> GLuint {
        let mut name = 0;
        unsafe { gl::CreateVertexArrays(1, std::ptr::addr_of_mut!(name)) };
        name
    }
    #[doc(alias = "glDeleteVertexArrays")]
    fn destroy(name: GLuint) {
        unsafe { gl::DeleteVertexArrays(1, std::ptr::addr_of!(name)) }
    }
    #[doc(alias = "glIsVertexArray")]
    fn check(name: GLuint) -> bool {
        is_true(unsafe { gl::IsVertexArray(name) })
    }
}
impl Bind for VertexArray {
    type Target = ();
    #[doc(alias = "glBindVertexArray")]
    fn bind(name: GLuint, (): ()) {
        unsafe { gl::BindVertexArray(name) }
    }
}
impl IsBound for VertexArray {
    #[doc(alias = "GL_VERTEX_ARRAY_BINDING")]
    fn is_bound(name: GLuint) -> bool {
        is_current(gl::VERTEX_ARRAY_BINDING, name)
    }
}

kind!(
    /// Program pipeline objects.
    pub enum ProgramPipeline
);
impl Kind for ProgramPipeline {
    const TYPE: ObjectType = ObjectType::ProgramPipeline;
    type Create = ();
    #[doc(alias = "glCreateProgramPipelines")]
    fn create((): ()) -> GLuint {
        let mut name = 0;
        unsafe { gl::CreateProgramPipelines(1, std::ptr::addr_of_mut!(name)) };
        name
    }
    #[doc(alias = "glDeleteProgramPipelines")]
    fn destroy(name: GLuint) {
        unsafe { gl::DeleteProgramPipelines(1, std::ptr::addr_of!(name)) }
    }
    #[doc(alias = "glIsProgramPipeline")]
    fn check(name: GLuint) -> bool {
        is_true(unsafe { gl::IsProgramPipeline(name) })
    }
}
impl Bind for ProgramPipeline {
    type Target = ();
    /// A program installed with `glUseProgram` takes precedence over the bound
    /// pipeline, so the program slot is cleared first.
    #[doc(alias = "glBindProgramPipeline")]
    fn bind(name: GLuint, (): ()) {
        unsafe {
            gl::UseProgram(0);
            gl::BindProgramPipeline(name);
        }
    }
}
impl IsBound for ProgramPipeline {
    #[doc(alias = "GL_PROGRAM_PIPELINE_BINDING")]
    fn is_bound(name: GLuint) -> bool {
        is_current(gl::PROGRAM_PIPELINE_BINDING, name)
    }
}

kind!(
    /// Texture objects, created with a fixed [`TextureTarget`].
    pub enum Texture
);
impl Kind for Texture {
    const TYPE: ObjectType = ObjectType::Texture;
    type Create = TextureTarget;
    #[doc(alias = "glCreateTextures")]
    fn create(target: TextureTarget) -> GLuint {
        let mut name = 0;
        unsafe { gl::CreateTextures(target.as_gl(), 1, std::ptr::addr_of_mut!(name)) };
        name
    }
    #[doc(alias = "glDeleteTextures")]
    fn destroy(name: GLuint) {
        unsafe { gl::DeleteTextures(1, std::ptr::addr_of!(name)) }
    }
    #[doc(alias = "glIsTexture")]
    fn check(name: GLuint) -> bool {
        is_true(unsafe { gl::IsTexture(name) })
    }
}
impl Bind for Texture {
    type Target = TextureTarget;
    #[doc(alias = "glBindTexture")]
    fn bind(name: GLuint, target: TextureTarget) {
        unsafe { gl::BindTexture(target.as_gl(), name) }
    }
}
impl Parameters for Texture {
    type Parameter = TextureParameter;
    #[doc(alias = "glGetTextureParameteriv")]
    unsafe fn parameters(name: GLuint, param: TextureParameter, out: &mut [GLint]) {
        unsafe { gl::GetTextureParameteriv(name, param.as_gl(), out.as_mut_ptr()) }
    }
}
impl BoundParameters for Texture {
    #[doc(alias = "glGetTexParameteriv")]
    unsafe fn bound_parameters(
        target: TextureTarget,
        param: TextureParameter,
        out: &mut [GLint],
    ) {
        unsafe { gl::GetTexParameteriv(target.as_gl(), param.as_gl(), out.as_mut_ptr()) }
    }
}

kind!(
    /// Buffer objects. The same buffer may be bound to any [`BufferTarget`].
    pub enum Buffer
);
impl Kind for Buffer {
    const TYPE: ObjectType = ObjectType::Buffer;
    type Create = ();
    #[doc(alias = "glCreateBuffers")]
    fn create((): ()) -> GLuint {
        let mut name = 0;
        unsafe { gl::CreateBuffers(1, std::ptr::addr_of_mut!(name)) };
        name
    }
    #[doc(alias = "glDeleteBuffers")]
    fn destroy(name: GLuint) {
        unsafe { gl::DeleteBuffers(1, std::ptr::addr_of!(name)) }
    }
    #[doc(alias = "glIsBuffer")]
    fn check(name: GLuint) -> bool {
        is_true(unsafe { gl::IsBuffer(name) })
    }
}
impl Bind for Buffer {
    type Target = BufferTarget;
    #[doc(alias = "glBindBuffer")]
    fn bind(name: GLuint, target: BufferTarget) {
        unsafe { gl::BindBuffer(target.as_gl(), name) }
    }
}
impl Parameters for Buffer {
    type Parameter = BufferParameter;
    #[doc(alias = "glGetNamedBufferParameteriv")]
    unsafe fn parameters(name: GLuint, param: BufferParameter, out: &mut [GLint]) {
        unsafe { gl::GetNamedBufferParameteriv(name, param.as_gl(), out.as_mut_ptr()) }
    }
}
impl BoundParameters for Buffer {
    #[doc(alias = "glGetBufferParameteriv")]
    unsafe fn bound_parameters(
        target: BufferTarget,
        param: BufferParameter,
        out: &mut [GLint],
    ) {
        unsafe { gl::GetBufferParameteriv(target.as_gl(), param.as_gl(), out.as_mut_ptr()) }
    }
}
