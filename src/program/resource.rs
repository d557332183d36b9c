//! Locations and introspection of program interface resources.

use crate::{
    gl::{
        self,
        types::{GLchar, GLenum, GLint, GLsizei, GLuint},
    },
    id::ProgramId,
    program::ProgramParameter,
    GLEnum, Result,
};

gl_enum! {
    /// Program interfaces whose resources have locations.
    pub enum ResourceType {
        Uniform = UNIFORM,
        ProgramInput = PROGRAM_INPUT,
        ProgramOutput = PROGRAM_OUTPUT,
        VertexSubroutineUniform = VERTEX_SUBROUTINE_UNIFORM,
        TessControlSubroutineUniform = TESS_CONTROL_SUBROUTINE_UNIFORM,
        TessEvaluationSubroutineUniform = TESS_EVALUATION_SUBROUTINE_UNIFORM,
        GeometrySubroutineUniform = GEOMETRY_SUBROUTINE_UNIFORM,
        FragmentSubroutineUniform = FRAGMENT_SUBROUTINE_UNIFORM,
        ComputeSubroutineUniform = COMPUTE_SUBROUTINE_UNIFORM,
    }
}

/// The location of a resource in some interface of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceLocation(pub GLuint);

/// The location of a uniform in the default uniform block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniformLocation(pub GLuint);

/// The location of a vertex shader input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexAttributeIndex(pub GLuint);

/// A vertex buffer binding point of a vertex array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexBindingIndex(pub GLuint);

impl From<ResourceLocation> for UniformLocation {
    fn from(value: ResourceLocation) -> Self {
        Self(value.0)
    }
}
impl From<ResourceLocation> for VertexAttributeIndex {
    fn from(value: ResourceLocation) -> Self {
        Self(value.0)
    }
}

/// Look up the location of the resource `name` in the `ty` interface of `program`.
///
/// `None` if the program has no such active resource.
#[doc(alias = "glGetProgramResourceLocation")]
pub fn resource_location(
    program: &ProgramId,
    ty: ResourceType,
    name: &str,
) -> Result<Option<ResourceLocation>> {
    let name = std::ffi::CString::new(name)?;
    let location =
        unsafe { gl::GetProgramResourceLocation(program.get(), ty.as_gl(), name.as_ptr()) };
    // -1 when not found
    Ok(GLuint::try_from(location).ok().map(ResourceLocation))
}

/// [`resource_location`] of a uniform.
pub fn uniform_location(program: &ProgramId, name: &str) -> Result<Option<UniformLocation>> {
    Ok(resource_location(program, ResourceType::Uniform, name)?.map(Into::into))
}

/// [`resource_location`] of a vertex shader input.
pub fn attribute_location(
    program: &ProgramId,
    name: &str,
) -> Result<Option<VertexAttributeIndex>> {
    Ok(resource_location(program, ResourceType::ProgramInput, name)?.map(Into::into))
}

gl_enum! {
    /// Types of uniforms and attributes, as reported by introspection.
    pub enum Typecode {
        Float = FLOAT,
        Double = DOUBLE,
        Int = INT,
        UnsignedInt = UNSIGNED_INT,
        Short = SHORT,
        UnsignedShort = UNSIGNED_SHORT,
        Byte = BYTE,
        UnsignedByte = UNSIGNED_BYTE,
        Bool = BOOL,

        IntVec2 = INT_VEC2,
        IntVec3 = INT_VEC3,
        IntVec4 = INT_VEC4,
        UnsignedIntVec2 = UNSIGNED_INT_VEC2,
        UnsignedIntVec3 = UNSIGNED_INT_VEC3,
        UnsignedIntVec4 = UNSIGNED_INT_VEC4,
        FloatVec2 = FLOAT_VEC2,
        FloatVec3 = FLOAT_VEC3,
        FloatVec4 = FLOAT_VEC4,
        DoubleVec2 = DOUBLE_VEC2,
        DoubleVec3 = DOUBLE_VEC3,
        DoubleVec4 = DOUBLE_VEC4,
        BoolVec2 = BOOL_VEC2,
        BoolVec3 = BOOL_VEC3,
        BoolVec4 = BOOL_VEC4,

        FloatMat2 = FLOAT_MAT2,
        FloatMat3x2 = FLOAT_MAT3x2,
        FloatMat2x3 = FLOAT_MAT2x3,
        FloatMat3 = FLOAT_MAT3,
        FloatMat3x4 = FLOAT_MAT3x4,
        FloatMat4x3 = FLOAT_MAT4x3,
        FloatMat2x4 = FLOAT_MAT2x4,
        FloatMat4x2 = FLOAT_MAT4x2,
        FloatMat4 = FLOAT_MAT4,
        DoubleMat2 = DOUBLE_MAT2,
        DoubleMat3x2 = DOUBLE_MAT3x2,
        DoubleMat2x3 = DOUBLE_MAT2x3,
        DoubleMat3 = DOUBLE_MAT3,
        DoubleMat3x4 = DOUBLE_MAT3x4,
        DoubleMat4x3 = DOUBLE_MAT4x3,
        DoubleMat2x4 = DOUBLE_MAT2x4,
        DoubleMat4x2 = DOUBLE_MAT4x2,
        DoubleMat4 = DOUBLE_MAT4,

        Sampler1D = SAMPLER_1D,
        Sampler2D = SAMPLER_2D,
        Sampler3D = SAMPLER_3D,
        SamplerCube = SAMPLER_CUBE,
        Sampler1DArray = SAMPLER_1D_ARRAY,
        Sampler2DArray = SAMPLER_2D_ARRAY,
        SamplerCubeArray = SAMPLER_CUBE_MAP_ARRAY,
        Sampler2DRect = SAMPLER_2D_RECT,
        Sampler2DMultisample = SAMPLER_2D_MULTISAMPLE,
        SamplerBuffer = SAMPLER_BUFFER,
        Sampler2DShadow = SAMPLER_2D_SHADOW,
    }
}

impl Typecode {
    /// A readable name for the type.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::Int => "int",
            Self::UnsignedInt => "unsigned_int",
            Self::Short => "short",
            Self::UnsignedShort => "unsigned_short",
            Self::Byte => "byte",
            Self::UnsignedByte => "unsigned_byte",
            Self::Bool => "bool",

            Self::IntVec2 => "int_vec2",
            Self::IntVec3 => "int_vec3",
            Self::IntVec4 => "int_vec4",
            Self::UnsignedIntVec2 => "unsigned_int_vec2",
            Self::UnsignedIntVec3 => "unsigned_int_vec3",
            Self::UnsignedIntVec4 => "unsigned_int_vec4",
            Self::FloatVec2 => "float_vec2",
            Self::FloatVec3 => "float_vec3",
            Self::FloatVec4 => "float_vec4",
            Self::DoubleVec2 => "double_vec2",
            Self::DoubleVec3 => "double_vec3",
            Self::DoubleVec4 => "double_vec4",
            Self::BoolVec2 => "bool_vec2",
            Self::BoolVec3 => "bool_vec3",
            Self::BoolVec4 => "bool_vec4",

            Self::FloatMat2 => "float_mat2",
            Self::FloatMat3x2 => "float_mat3x2",
            Self::FloatMat2x3 => "float_mat2x3",
            Self::FloatMat3 => "float_mat3",
            Self::FloatMat3x4 => "float_mat3x4",
            Self::FloatMat4x3 => "float_mat4x3",
            Self::FloatMat2x4 => "float_mat2x4",
            Self::FloatMat4x2 => "float_mat4x2",
            Self::FloatMat4 => "float_mat4",
            Self::DoubleMat2 => "double_mat2",
            Self::DoubleMat3x2 => "double_mat3x2",
            Self::DoubleMat2x3 => "double_mat2x3",
            Self::DoubleMat3 => "double_mat3",
            Self::DoubleMat3x4 => "double_mat3x4",
            Self::DoubleMat4x3 => "double_mat4x3",
            Self::DoubleMat2x4 => "double_mat2x4",
            Self::DoubleMat4x2 => "double_mat4x2",
            Self::DoubleMat4 => "double_mat4",

            Self::Sampler1D => "sampler1D",
            Self::Sampler2D => "sampler2D",
            Self::Sampler3D => "sampler3D",
            Self::SamplerCube => "samplerCube",
            Self::Sampler1DArray => "sampler1DArray",
            Self::Sampler2DArray => "sampler2DArray",
            Self::SamplerCubeArray => "samplerCubeArray",
            Self::Sampler2DRect => "sampler2DRect",
            Self::Sampler2DMultisample => "sampler2DMS",
            Self::SamplerBuffer => "samplerBuffer",
            Self::Sampler2DShadow => "sampler2DShadow",
        }
    }
}

impl std::fmt::Display for Typecode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An active uniform or attribute of a linked program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveResource {
    pub name: String,
    /// Raw type, see [`Self::typecode`].
    pub ty: GLenum,
    /// Number of array elements, 1 if not an array.
    pub size: usize,
}
impl ActiveResource {
    /// The type of the resource, if it is one [`Typecode`] knows.
    pub fn typecode(&self) -> Result<Typecode> {
        Typecode::try_from(self.ty)
    }
}

type GetActive =
    unsafe fn(GLuint, GLuint, GLsizei, *mut GLsizei, *mut GLint, *mut GLenum, *mut GLchar);

fn active(
    program: &ProgramId,
    count: ProgramParameter,
    max_length: ProgramParameter,
    get_active: GetActive,
) -> Vec<ActiveResource> {
    let count = GLuint::try_from(program.value(count)).unwrap_or_default();
    // Counts the nul terminator.
    let max_length = program.value(max_length).max(1);
    let capacity = usize::try_from(max_length).unwrap_or(1);

    (0..count)
        .map(|index| {
            let mut name = vec![0u8; capacity];
            let mut written: GLsizei = 0;
            let mut size: GLint = 0;
            let mut ty: GLenum = 0;
            unsafe {
                get_active(
                    program.get(),
                    index,
                    max_length,
                    std::ptr::addr_of_mut!(written),
                    std::ptr::addr_of_mut!(size),
                    std::ptr::addr_of_mut!(ty),
                    name.as_mut_ptr().cast(),
                );
            }
            name.truncate(usize::try_from(written).unwrap_or_default().min(capacity));
            ActiveResource {
                name: String::from_utf8_lossy(&name).into_owned(),
                ty,
                size: usize::try_from(size).unwrap_or_default(),
            }
        })
        .collect()
}

/// Every active uniform of the default uniform block of a linked program.
#[doc(alias = "glGetActiveUniform")]
#[must_use]
pub fn active_uniforms(program: &ProgramId) -> Vec<ActiveResource> {
    active(
        program,
        ProgramParameter::ActiveUniforms,
        ProgramParameter::ActiveUniformMaxLength,
        gl::GetActiveUniform,
    )
}

/// Every active vertex shader input of a linked program.
#[doc(alias = "glGetActiveAttrib")]
#[must_use]
pub fn active_attributes(program: &ProgramId) -> Vec<ActiveResource> {
    active(
        program,
        ProgramParameter::ActiveAttributes,
        ProgramParameter::ActiveAttributeMaxLength,
        gl::GetActiveAttrib,
    )
}
