//! Shaders, programs, and program pipelines.
//!
//! Compilation and linking report failure as [`Error::Compile`] and [`Error::Link`],
//! carrying the info log the GL produced.

use crate::{
    gl::{
        self,
        types::{GLchar, GLenum, GLint, GLsizei, GLuint},
    },
    id::{ProgramId, ProgramPipelineId, ShaderId},
    object::{Program, Shader},
    sizei,
    unique::{UniqueProgram, UniqueShader},
    Error, GLEnum, Result,
};

mod resource;
pub mod uniform;

pub use resource::{
    active_attributes, active_uniforms, attribute_location, resource_location,
    uniform_location, ActiveResource, ResourceLocation, ResourceType, Typecode,
    UniformLocation, VertexAttributeIndex, VertexBindingIndex,
};

gl_enum! {
    /// The stage of the pipeline a shader object is compiled for.
    pub enum ShaderType {
        Vertex = VERTEX_SHADER,
        Fragment = FRAGMENT_SHADER,
        Geometry = GEOMETRY_SHADER,
        Compute = COMPUTE_SHADER,
        TessControl = TESS_CONTROL_SHADER,
        TessEvaluation = TESS_EVALUATION_SHADER,
    }
}

gl_enum! {
    /// Parameters readable with `glGetShaderiv`.
    pub enum ShaderParameter {
        /// The [`ShaderType`] the shader was created with.
        Type = SHADER_TYPE,
        DeleteStatus = DELETE_STATUS,
        CompileStatus = COMPILE_STATUS,
        /// Length of the info log including its nul terminator, or zero.
        InfoLogLength = INFO_LOG_LENGTH,
        SourceLength = SHADER_SOURCE_LENGTH,
    }
}

impl crate::object::ParameterName for ShaderParameter {}

gl_enum! {
    /// Parameters readable with `glGetProgramiv`.
    pub enum ProgramParameter {
        DeleteStatus = DELETE_STATUS,
        LinkStatus = LINK_STATUS,
        ValidateStatus = VALIDATE_STATUS,
        /// Length of the info log including its nul terminator, or zero.
        InfoLogLength = INFO_LOG_LENGTH,
        AttachedShaders = ATTACHED_SHADERS,
        ActiveAttributes = ACTIVE_ATTRIBUTES,
        ActiveAttributeMaxLength = ACTIVE_ATTRIBUTE_MAX_LENGTH,
        ActiveUniforms = ACTIVE_UNIFORMS,
        ActiveUniformMaxLength = ACTIVE_UNIFORM_MAX_LENGTH,
        ActiveUniformBlocks = ACTIVE_UNIFORM_BLOCKS,
        ActiveAtomicCounterBuffers = ACTIVE_ATOMIC_COUNTER_BUFFERS,
        BinaryLength = PROGRAM_BINARY_LENGTH,
        /// Three values.
        ComputeWorkGroupSize = COMPUTE_WORK_GROUP_SIZE,
        Separable = PROGRAM_SEPARABLE,
        TransformFeedbackBufferMode = TRANSFORM_FEEDBACK_BUFFER_MODE,
        TransformFeedbackVaryings = TRANSFORM_FEEDBACK_VARYINGS,
        GeometryVerticesOut = GEOMETRY_VERTICES_OUT,
        GeometryInputType = GEOMETRY_INPUT_TYPE,
        GeometryOutputType = GEOMETRY_OUTPUT_TYPE,
    }
}

impl crate::object::ParameterName for ProgramParameter {
    fn values(self) -> usize {
        match self {
            Self::ComputeWorkGroupSize => 3,
            _ => 1,
        }
    }
}

bitflags::bitflags! {
    /// Stages of a separable program to install into a pipeline.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ShaderStages: gl::types::GLbitfield {
        const VERTEX = gl::VERTEX_SHADER_BIT;
        const FRAGMENT = gl::FRAGMENT_SHADER_BIT;
        const GEOMETRY = gl::GEOMETRY_SHADER_BIT;
        const TESS_CONTROL = gl::TESS_CONTROL_SHADER_BIT;
        const TESS_EVALUATION = gl::TESS_EVALUATION_SHADER_BIT;
        const COMPUTE = gl::COMPUTE_SHADER_BIT;
        /// Every stage, including ones this crate has no flag for.
        const ALL = gl::ALL_SHADER_BITS;
    }
}

fn is_true(value: GLint) -> bool {
    value == GLint::from(gl::TRUE)
}

fn info_log(
    name: GLuint,
    length: GLint,
    fetch_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    // Zero when there is no log, otherwise counts the nul terminator.
    let Ok(capacity @ 1..) = usize::try_from(length) else {
        return String::new();
    };
    let mut bytes = vec![0u8; capacity];
    let mut written: GLsizei = 0;
    unsafe {
        fetch_log(
            name,
            length,
            std::ptr::addr_of_mut!(written),
            bytes.as_mut_ptr().cast(),
        );
    }
    bytes.truncate(usize::try_from(written).unwrap_or_default().min(capacity));
    String::from_utf8_lossy(&bytes).into_owned()
}

/// The info log of the last compilation of `shader`, empty if there is none.
#[doc(alias = "glGetShaderInfoLog")]
#[must_use]
pub fn shader_info_log(shader: &ShaderId) -> String {
    let length = shader.value(ShaderParameter::InfoLogLength);
    info_log(shader.get(), length, gl::GetShaderInfoLog)
}

/// The info log of the last link or validation of `program`, empty if there is none.
#[doc(alias = "glGetProgramInfoLog")]
#[must_use]
pub fn program_info_log(program: &ProgramId) -> String {
    let length = program.value(ProgramParameter::InfoLogLength);
    info_log(program.get(), length, gl::GetProgramInfoLog)
}

/// Replace the source code of `shader`, then compile it.
///
/// The source is passed with an explicit length, so it need not be nul-terminated.
#[doc(alias = "glShaderSource")]
#[doc(alias = "glCompileShader")]
pub fn compile(shader: &ShaderId, source: &str) -> Result<()> {
    let sources = [source.as_ptr().cast::<GLchar>()];
    let lengths = [sizei(source.len())?];
    unsafe {
        gl::ShaderSource(shader.get(), 1, sources.as_ptr(), lengths.as_ptr());
        gl::CompileShader(shader.get());
    }

    if is_true(shader.value(ShaderParameter::CompileStatus)) {
        Ok(())
    } else {
        let log = shader_info_log(shader);
        log::debug!("{shader:?} failed to compile:\n{log}");
        Err(Error::Compile { log })
    }
}

/// Attach `shaders` to `program`, link it, then detach them again.
///
/// The shaders are left untouched and may be deleted once this returns.
#[doc(alias = "glLinkProgram")]
pub fn link(program: &ProgramId, shaders: &[ShaderId]) -> Result<()> {
    unsafe {
        for shader in shaders {
            gl::AttachShader(program.get(), shader.get());
        }
        gl::LinkProgram(program.get());
        for shader in shaders {
            gl::DetachShader(program.get(), shader.get());
        }
    }

    if is_true(program.value(ProgramParameter::LinkStatus)) {
        Ok(())
    } else {
        let log = program_info_log(program);
        log::debug!("{program:?} failed to link:\n{log}");
        Err(Error::Link { log })
    }
}

/// Create a shader of type `ty` and compile `source` into it.
///
/// The shader is deleted if compilation fails.
pub fn create_shader(ty: ShaderType, source: &str) -> Result<UniqueShader> {
    let shader = UniqueShader::create(ty);
    compile(&shader, source)?;
    Ok(shader)
}

/// Create a program and link `shaders` into it.
///
/// The program is deleted if linking fails.
pub fn create_program(shaders: &[ShaderId]) -> Result<UniqueProgram> {
    let program = UniqueProgram::create(());
    link(&program, shaders)?;
    Ok(program)
}

/// Mark `program` as usable with [`use_program_stages`]. Takes effect on the next link.
#[doc(alias = "GL_PROGRAM_SEPARABLE")]
#[doc(alias = "glProgramParameteri")]
pub fn set_separable(program: &ProgramId, separable: bool) {
    let value = if separable { gl::TRUE } else { gl::FALSE };
    unsafe { gl::ProgramParameteri(program.get(), gl::PROGRAM_SEPARABLE, value.into()) }
}

/// Install the `stages` of `program` into `pipeline`.
///
/// `program` must be separable and linked, or null to clear the stages.
#[doc(alias = "glUseProgramStages")]
pub fn use_program_stages(pipeline: &ProgramPipelineId, program: &ProgramId, stages: ShaderStages) {
    unsafe { gl::UseProgramStages(pipeline.get(), stages.bits(), program.get()) }
}

/// [`use_program_stages`] with [`ShaderStages::ALL`].
#[doc(alias = "glUseProgramStages")]
pub fn use_all_program_stages(pipeline: &ProgramPipelineId, program: &ProgramId) {
    use_program_stages(pipeline, program, ShaderStages::ALL);
}

impl crate::Id<Shader> {
    /// The type this shader was created with.
    pub fn shader_type(self) -> Result<ShaderType> {
        // GL_SHADER_TYPE is a GLenum reported through a GLint.
        ShaderType::try_from(self.value(ShaderParameter::Type) as GLenum)
    }
}

impl crate::Id<Program> {
    /// Whether the last link of this program succeeded.
    #[must_use]
    pub fn is_linked(self) -> bool {
        is_true(self.value(ProgramParameter::LinkStatus))
    }
}
