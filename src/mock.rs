//! A recording stand-in for a GL context, for tests.
//!
//! [`install`] loads the bindings with the functions below, once per process, and
//! resets the calling thread's state. Every test starts with it. State is per thread,
//! so tests running in parallel do not see each other's objects or calls. Entry points
//! not listed here stay unloaded, and panic if called.

use std::{
    cell::RefCell,
    collections::HashMap,
    ffi::{c_void, CStr},
};

use crate::gl::{
    self,
    types::{
        GLbitfield, GLboolean, GLchar, GLdouble, GLenum, GLfloat, GLint, GLint64, GLintptr, GLsizei,
        GLsizeiptr, GLuint, GLDEBUGPROC,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub func: &'static str,
    /// Integer arguments, pointers excluded unless noted.
    pub args: Vec<i64>,
}

#[derive(Debug)]
pub struct State {
    next_name: GLuint,
    /// Live objects by name: their `glObjectLabel` identifier and creation argument.
    live: HashMap<GLuint, (GLenum, GLenum)>,
    pub calls: Vec<Call>,
    /// `glGetIntegerv` values.
    pub integers: HashMap<GLenum, GLint>,
    /// Overrides for `glGet*iv` on named objects.
    pub object_params: HashMap<(GLuint, GLenum), GLint>,
    /// Overrides for `glGetNamedBufferParameteri64v`, falling back to `object_params`.
    pub object_params64: HashMap<(GLuint, GLenum), GLint64>,
    /// Every value of a multi-valued parameter. Others repeat their single value.
    pub object_values: HashMap<(GLuint, GLenum), Vec<GLint>>,
    /// `glGet*iv` values through a binding target.
    pub target_params: HashMap<(GLenum, GLenum), GLint>,
    /// Popped from the front by `glGetError`.
    pub errors: Vec<GLenum>,
    /// Bytes passed to upload calls with non-null data.
    pub uploads: Vec<Vec<u8>>,
    pub sources: Vec<String>,
    pub labels: Vec<String>,
    pub compile_ok: bool,
    pub link_ok: bool,
    /// Reported for every shader and program.
    pub info_log: String,
    /// Resource locations by interface and name. Missing ones report -1.
    pub locations: HashMap<(GLenum, String), GLint>,
    /// `(name, type, size)` of each active uniform.
    pub active_uniforms: Vec<(String, GLenum, GLint)>,
    pub active_attributes: Vec<(String, GLenum, GLint)>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_name: 0,
            live: HashMap::new(),
            calls: Vec::new(),
            integers: HashMap::new(),
            object_params: HashMap::new(),
            object_params64: HashMap::new(),
            object_values: HashMap::new(),
            target_params: HashMap::new(),
            errors: Vec::new(),
            uploads: Vec::new(),
            sources: Vec::new(),
            labels: Vec::new(),
            compile_ok: true,
            link_ok: true,
            info_log: String::new(),
            locations: HashMap::new(),
            active_uniforms: Vec::new(),
            active_attributes: Vec::new(),
        }
    }
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

/// Load the bindings, and give this thread a fresh context.
pub fn install() {
    static LOAD: std::sync::Once = std::sync::Once::new();
    LOAD.call_once(|| gl::load_with(lookup));
    STATE.with(|state| *state.borrow_mut() = State::default());
}

pub fn with<R>(f: impl FnOnce(&mut State) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Every call made on this thread since [`install`].
pub fn calls() -> Vec<Call> {
    with(|s| s.calls.clone())
}

/// The arguments of every call to `func`, in order.
pub fn called(func: &str) -> Vec<Vec<i64>> {
    with(|s| {
        s.calls
            .iter()
            .filter(|call| call.func == func)
            .map(|call| call.args.clone())
            .collect()
    })
}

pub fn count(func: &str) -> usize {
    called(func).len()
}

fn record(func: &'static str, args: &[i64]) {
    with(|s| {
        s.calls.push(Call {
            func,
            args: args.to_vec(),
        });
    });
}

fn upload(data: *const c_void, len: usize) {
    if data.is_null() {
        return;
    }
    let bytes = unsafe { std::slice::from_raw_parts(data.cast::<u8>(), len) }.to_vec();
    with(|s| s.uploads.push(bytes));
}

fn len(count: GLsizei) -> usize {
    usize::try_from(count).expect("negative count")
}

fn boolean(value: bool) -> GLboolean {
    if value {
        gl::TRUE
    } else {
        gl::FALSE
    }
}

fn create(kind: GLenum, arg: GLenum) -> GLuint {
    with(|s| {
        s.next_name += 1;
        s.live.insert(s.next_name, (kind, arg));
        s.next_name
    })
}

fn create_n(kind: GLenum, arg: GLenum, n: GLsizei, names: *mut GLuint) {
    for i in 0..len(n) {
        let name = create(kind, arg);
        unsafe { names.add(i).write(name) };
    }
}

fn delete(kind: GLenum, name: GLuint) {
    with(|s| {
        if s.live.get(&name).is_some_and(|(live, _)| *live == kind) {
            s.live.remove(&name);
        }
    });
}

fn delete_n(func: &'static str, kind: GLenum, n: GLsizei, names: *const GLuint) {
    let names = unsafe { std::slice::from_raw_parts(names, len(n)) };
    record(func, &names.iter().map(|&name| i64::from(name)).collect::<Vec<_>>());
    for &name in names {
        delete(kind, name);
    }
}

fn is(func: &'static str, kind: GLenum, name: GLuint) -> GLboolean {
    record(func, &[i64::from(name)]);
    boolean(with(|s| {
        s.live.get(&name).is_some_and(|(live, _)| *live == kind)
    }))
}

fn set_integer(pname: GLenum, value: GLuint) {
    with(|s| {
        s.integers.insert(pname, value as GLint);
    });
}

fn max_name_length(resources: &[(String, GLenum, GLint)]) -> GLint {
    resources
        .iter()
        .map(|(name, ..)| name.len() as GLint + 1)
        .max()
        .unwrap_or(0)
}

fn object_param(name: GLuint, pname: GLenum) -> GLint {
    with(|s| {
        if let Some(value) = s.object_params.get(&(name, pname)) {
            return *value;
        }
        let log_length = if s.info_log.is_empty() {
            0
        } else {
            s.info_log.len() as GLint + 1
        };
        match pname {
            gl::SHADER_TYPE => s.live.get(&name).map_or(0, |(_, arg)| *arg as GLint),
            gl::COMPILE_STATUS => GLint::from(boolean(s.compile_ok)),
            gl::LINK_STATUS => GLint::from(boolean(s.link_ok)),
            gl::INFO_LOG_LENGTH => log_length,
            gl::ACTIVE_UNIFORMS => s.active_uniforms.len() as GLint,
            gl::ACTIVE_UNIFORM_MAX_LENGTH => max_name_length(&s.active_uniforms),
            gl::ACTIVE_ATTRIBUTES => s.active_attributes.len() as GLint,
            gl::ACTIVE_ATTRIBUTE_MAX_LENGTH => max_name_length(&s.active_attributes),
            _ => 0,
        }
    })
}

/// How many integers a real driver writes for `pname`.
fn param_values(pname: GLenum) -> usize {
    match pname {
        gl::TEXTURE_SWIZZLE_RGBA | gl::TEXTURE_BORDER_COLOR => 4,
        gl::COMPUTE_WORK_GROUP_SIZE => 3,
        _ => 1,
    }
}

fn write_values(pname: GLenum, values: Option<Vec<GLint>>, single: GLint, params: *mut GLint) {
    let n = param_values(pname);
    let values = values.unwrap_or_else(|| vec![single; n]);
    assert_eq!(values.len(), n, "wrong value count for {pname:#06x}");
    unsafe { std::ptr::copy_nonoverlapping(values.as_ptr(), params, n) };
}

fn get_object_iv(func: &'static str, name: GLuint, pname: GLenum, params: *mut GLint) {
    record(func, &[i64::from(name), i64::from(pname)]);
    let values = with(|s| s.object_values.get(&(name, pname)).cloned());
    write_values(pname, values, object_param(name, pname), params);
}

fn get_target_iv(func: &'static str, target: GLenum, pname: GLenum, params: *mut GLint) {
    record(func, &[i64::from(target), i64::from(pname)]);
    let value = with(|s| s.target_params.get(&(target, pname)).copied().unwrap_or(0));
    write_values(pname, None, value, params);
}

/// Copy `text` into a GL-style out string of `buf_size` bytes.
fn write_string(text: &str, buf_size: GLsizei, length: *mut GLsizei, out: *mut GLchar) {
    let Some(room) = len(buf_size).checked_sub(1) else {
        return;
    };
    let written = text.len().min(room);
    unsafe {
        std::ptr::copy_nonoverlapping(text.as_ptr(), out.cast::<u8>(), written);
        out.add(written).write(0);
        if !length.is_null() {
            length.write(written as GLsizei);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn get_active(
    func: &'static str,
    list: fn(&State) -> &[(String, GLenum, GLint)],
    program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLint,
    ty: *mut GLenum,
    name: *mut GLchar,
) {
    record(func, &[i64::from(program), i64::from(index)]);
    let (text, resource_ty, resource_size) =
        with(|s| list(s)[index as usize].clone());
    write_string(&text, buf_size, length, name);
    unsafe {
        size.write(resource_size);
        ty.write(resource_ty);
    }
}

// Objects

extern "system" fn create_shader(ty: GLenum) -> GLuint {
    record("glCreateShader", &[i64::from(ty)]);
    create(gl::SHADER, ty)
}
extern "system" fn delete_shader(name: GLuint) {
    record("glDeleteShader", &[i64::from(name)]);
    delete(gl::SHADER, name);
}
extern "system" fn is_shader(name: GLuint) -> GLboolean {
    is("glIsShader", gl::SHADER, name)
}
extern "system" fn get_shader_iv(name: GLuint, pname: GLenum, params: *mut GLint) {
    get_object_iv("glGetShaderiv", name, pname, params);
}

extern "system" fn create_program() -> GLuint {
    record("glCreateProgram", &[]);
    create(gl::PROGRAM, 0)
}
extern "system" fn delete_program(name: GLuint) {
    record("glDeleteProgram", &[i64::from(name)]);
    delete(gl::PROGRAM, name);
}
extern "system" fn is_program(name: GLuint) -> GLboolean {
    is("glIsProgram", gl::PROGRAM, name)
}
extern "system" fn use_program(name: GLuint) {
    record("glUseProgram", &[i64::from(name)]);
    set_integer(gl::CURRENT_PROGRAM, name);
}
extern "system" fn get_program_iv(name: GLuint, pname: GLenum, params: *mut GLint) {
    get_object_iv("glGetProgramiv", name, pname, params);
}

extern "system" fn create_vertex_arrays(n: GLsizei, names: *mut GLuint) {
    record("glCreateVertexArrays", &[i64::from(n)]);
    create_n(gl::VERTEX_ARRAY, 0, n, names);
}
extern "system" fn delete_vertex_arrays(n: GLsizei, names: *const GLuint) {
    delete_n("glDeleteVertexArrays", gl::VERTEX_ARRAY, n, names);
}
extern "system" fn is_vertex_array(name: GLuint) -> GLboolean {
    is("glIsVertexArray", gl::VERTEX_ARRAY, name)
}
extern "system" fn bind_vertex_array(name: GLuint) {
    record("glBindVertexArray", &[i64::from(name)]);
    set_integer(gl::VERTEX_ARRAY_BINDING, name);
}

extern "system" fn create_program_pipelines(n: GLsizei, names: *mut GLuint) {
    record("glCreateProgramPipelines", &[i64::from(n)]);
    create_n(gl::PROGRAM_PIPELINE, 0, n, names);
}
extern "system" fn delete_program_pipelines(n: GLsizei, names: *const GLuint) {
    delete_n("glDeleteProgramPipelines", gl::PROGRAM_PIPELINE, n, names);
}
extern "system" fn is_program_pipeline(name: GLuint) -> GLboolean {
    is("glIsProgramPipeline", gl::PROGRAM_PIPELINE, name)
}
extern "system" fn bind_program_pipeline(name: GLuint) {
    record("glBindProgramPipeline", &[i64::from(name)]);
    set_integer(gl::PROGRAM_PIPELINE_BINDING, name);
}

extern "system" fn create_textures(target: GLenum, n: GLsizei, names: *mut GLuint) {
    record("glCreateTextures", &[i64::from(target), i64::from(n)]);
    create_n(gl::TEXTURE, target, n, names);
}
extern "system" fn delete_textures(n: GLsizei, names: *const GLuint) {
    delete_n("glDeleteTextures", gl::TEXTURE, n, names);
}
extern "system" fn is_texture(name: GLuint) -> GLboolean {
    is("glIsTexture", gl::TEXTURE, name)
}
extern "system" fn bind_texture(target: GLenum, name: GLuint) {
    record("glBindTexture", &[i64::from(target), i64::from(name)]);
}
extern "system" fn get_texture_parameter_iv(name: GLuint, pname: GLenum, params: *mut GLint) {
    get_object_iv("glGetTextureParameteriv", name, pname, params);
}
extern "system" fn get_tex_parameter_iv(target: GLenum, pname: GLenum, params: *mut GLint) {
    get_target_iv("glGetTexParameteriv", target, pname, params);
}

extern "system" fn create_buffers(n: GLsizei, names: *mut GLuint) {
    record("glCreateBuffers", &[i64::from(n)]);
    create_n(gl::BUFFER, 0, n, names);
}
extern "system" fn delete_buffers(n: GLsizei, names: *const GLuint) {
    delete_n("glDeleteBuffers", gl::BUFFER, n, names);
}
extern "system" fn is_buffer(name: GLuint) -> GLboolean {
    is("glIsBuffer", gl::BUFFER, name)
}
extern "system" fn bind_buffer(target: GLenum, name: GLuint) {
    record("glBindBuffer", &[i64::from(target), i64::from(name)]);
}
extern "system" fn get_named_buffer_parameter_iv(name: GLuint, pname: GLenum, params: *mut GLint) {
    get_object_iv("glGetNamedBufferParameteriv", name, pname, params);
}
extern "system" fn get_named_buffer_parameter_i64v(
    name: GLuint,
    pname: GLenum,
    params: *mut GLint64,
) {
    record(
        "glGetNamedBufferParameteri64v",
        &[i64::from(name), i64::from(pname)],
    );
    let value = with(|s| s.object_params64.get(&(name, pname)).copied())
        .unwrap_or_else(|| i64::from(object_param(name, pname)));
    unsafe { params.write(value) };
}
extern "system" fn get_buffer_parameter_iv(target: GLenum, pname: GLenum, params: *mut GLint) {
    get_target_iv("glGetBufferParameteriv", target, pname, params);
}

// State

extern "system" fn get_integer_v(pname: GLenum, data: *mut GLint) {
    record("glGetIntegerv", &[i64::from(pname)]);
    let value = with(|s| s.integers.get(&pname).copied().unwrap_or(0));
    unsafe { data.write(value) };
}
extern "system" fn get_error() -> GLenum {
    record("glGetError", &[]);
    with(|s| {
        if s.errors.is_empty() {
            gl::NO_ERROR
        } else {
            s.errors.remove(0)
        }
    })
}
extern "system" fn enable(cap: GLenum) {
    record("glEnable", &[i64::from(cap)]);
}
extern "system" fn disable(cap: GLenum) {
    record("glDisable", &[i64::from(cap)]);
}
extern "system" fn debug_message_callback(_callback: GLDEBUGPROC, _user_param: *const c_void) {
    record("glDebugMessageCallback", &[]);
}
extern "system" fn object_label(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar) {
    record(
        "glObjectLabel",
        &[i64::from(identifier), i64::from(name), i64::from(length)],
    );
    let bytes = unsafe { std::slice::from_raw_parts(label.cast::<u8>(), len(length)) };
    let label = String::from_utf8_lossy(bytes).into_owned();
    with(|s| s.labels.push(label));
}
extern "system" fn pixel_store_i(pname: GLenum, param: GLint) {
    record("glPixelStorei", &[i64::from(pname), i64::from(param)]);
}

// Buffers

extern "system" fn named_buffer_data(
    buffer: GLuint,
    size: GLsizeiptr,
    data: *const c_void,
    usage: GLenum,
) {
    record(
        "glNamedBufferData",
        &[i64::from(buffer), size as i64, i64::from(usage)],
    );
    upload(data, size as usize);
    with(|s| {
        s.object_params
            .insert((buffer, gl::BUFFER_SIZE), size as GLint);
    });
}
extern "system" fn named_buffer_sub_data(
    buffer: GLuint,
    offset: GLintptr,
    size: GLsizeiptr,
    data: *const c_void,
) {
    record(
        "glNamedBufferSubData",
        &[i64::from(buffer), offset as i64, size as i64],
    );
    upload(data, size as usize);
}
extern "system" fn named_buffer_storage(
    buffer: GLuint,
    size: GLsizeiptr,
    data: *const c_void,
    flags: GLbitfield,
) {
    record(
        "glNamedBufferStorage",
        &[i64::from(buffer), size as i64, i64::from(flags)],
    );
    upload(data, size as usize);
    with(|s| {
        s.object_params
            .insert((buffer, gl::BUFFER_SIZE), size as GLint);
    });
}

// Textures

extern "system" fn texture_storage_1d(
    texture: GLuint,
    levels: GLsizei,
    format: GLenum,
    width: GLsizei,
) {
    record(
        "glTextureStorage1D",
        &[
            i64::from(texture),
            i64::from(levels),
            i64::from(format),
            i64::from(width),
        ],
    );
}
extern "system" fn texture_storage_2d(
    texture: GLuint,
    levels: GLsizei,
    format: GLenum,
    width: GLsizei,
    height: GLsizei,
) {
    record(
        "glTextureStorage2D",
        &[
            i64::from(texture),
            i64::from(levels),
            i64::from(format),
            i64::from(width),
            i64::from(height),
        ],
    );
}
extern "system" fn texture_storage_3d(
    texture: GLuint,
    levels: GLsizei,
    format: GLenum,
    width: GLsizei,
    height: GLsizei,
    depth: GLsizei,
) {
    record(
        "glTextureStorage3D",
        &[
            i64::from(texture),
            i64::from(levels),
            i64::from(format),
            i64::from(width),
            i64::from(height),
            i64::from(depth),
        ],
    );
}
extern "system" fn texture_sub_image_1d(
    texture: GLuint,
    level: GLint,
    x: GLint,
    width: GLsizei,
    format: GLenum,
    ty: GLenum,
    _pixels: *const c_void,
) {
    record(
        "glTextureSubImage1D",
        &[
            i64::from(texture),
            i64::from(level),
            i64::from(x),
            i64::from(width),
            i64::from(format),
            i64::from(ty),
        ],
    );
}
#[allow(clippy::too_many_arguments)]
extern "system" fn texture_sub_image_2d(
    texture: GLuint,
    level: GLint,
    x: GLint,
    y: GLint,
    width: GLsizei,
    height: GLsizei,
    format: GLenum,
    ty: GLenum,
    _pixels: *const c_void,
) {
    record(
        "glTextureSubImage2D",
        &[
            i64::from(texture),
            i64::from(level),
            i64::from(x),
            i64::from(y),
            i64::from(width),
            i64::from(height),
            i64::from(format),
            i64::from(ty),
        ],
    );
}
#[allow(clippy::too_many_arguments)]
extern "system" fn texture_sub_image_3d(
    texture: GLuint,
    level: GLint,
    x: GLint,
    y: GLint,
    z: GLint,
    width: GLsizei,
    height: GLsizei,
    depth: GLsizei,
    format: GLenum,
    ty: GLenum,
    _pixels: *const c_void,
) {
    record(
        "glTextureSubImage3D",
        &[
            i64::from(texture),
            i64::from(level),
            i64::from(x),
            i64::from(y),
            i64::from(z),
            i64::from(width),
            i64::from(height),
            i64::from(depth),
            i64::from(format),
            i64::from(ty),
        ],
    );
}
extern "system" fn texture_parameter_i(texture: GLuint, pname: GLenum, param: GLint) {
    record(
        "glTextureParameteri",
        &[i64::from(texture), i64::from(pname), i64::from(param)],
    );
}
extern "system" fn texture_parameter_iv(texture: GLuint, pname: GLenum, params: *const GLint) {
    let n = match pname {
        gl::TEXTURE_SWIZZLE_RGBA | gl::TEXTURE_BORDER_COLOR => 4,
        _ => 1,
    };
    let params = unsafe { std::slice::from_raw_parts(params, n) };
    let mut args = vec![i64::from(texture), i64::from(pname)];
    args.extend(params.iter().map(|&param| i64::from(param)));
    record("glTextureParameteriv", &args);
}
extern "system" fn texture_buffer(texture: GLuint, format: GLenum, buffer: GLuint) {
    record(
        "glTextureBuffer",
        &[i64::from(texture), i64::from(format), i64::from(buffer)],
    );
}

// Programs

extern "system" fn shader_source(
    shader: GLuint,
    count: GLsizei,
    strings: *const *const GLchar,
    lengths: *const GLint,
) {
    record("glShaderSource", &[i64::from(shader), i64::from(count)]);
    for i in 0..len(count) {
        let source = unsafe {
            let string = *strings.add(i);
            let length = if lengths.is_null() { -1 } else { *lengths.add(i) };
            match usize::try_from(length) {
                Ok(length) => std::slice::from_raw_parts(string.cast::<u8>(), length),
                Err(_) => CStr::from_ptr(string).to_bytes(),
            }
        };
        let source = String::from_utf8_lossy(source).into_owned();
        with(|s| s.sources.push(source));
    }
}
extern "system" fn compile_shader(shader: GLuint) {
    record("glCompileShader", &[i64::from(shader)]);
}
extern "system" fn get_shader_info_log(
    shader: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    log: *mut GLchar,
) {
    record("glGetShaderInfoLog", &[i64::from(shader), i64::from(buf_size)]);
    let text = with(|s| s.info_log.clone());
    write_string(&text, buf_size, length, log);
}
extern "system" fn get_program_info_log(
    program: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    log: *mut GLchar,
) {
    record("glGetProgramInfoLog", &[i64::from(program), i64::from(buf_size)]);
    let text = with(|s| s.info_log.clone());
    write_string(&text, buf_size, length, log);
}
extern "system" fn attach_shader(program: GLuint, shader: GLuint) {
    record("glAttachShader", &[i64::from(program), i64::from(shader)]);
}
extern "system" fn detach_shader(program: GLuint, shader: GLuint) {
    record("glDetachShader", &[i64::from(program), i64::from(shader)]);
}
extern "system" fn link_program(program: GLuint) {
    record("glLinkProgram", &[i64::from(program)]);
}
extern "system" fn program_parameter_i(program: GLuint, pname: GLenum, value: GLint) {
    record(
        "glProgramParameteri",
        &[i64::from(program), i64::from(pname), i64::from(value)],
    );
}
extern "system" fn use_program_stages(pipeline: GLuint, stages: GLbitfield, program: GLuint) {
    record(
        "glUseProgramStages",
        &[i64::from(pipeline), i64::from(stages), i64::from(program)],
    );
}
extern "system" fn get_program_resource_location(
    program: GLuint,
    interface: GLenum,
    name: *const GLchar,
) -> GLint {
    record(
        "glGetProgramResourceLocation",
        &[i64::from(program), i64::from(interface)],
    );
    let name = unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
    with(|s| s.locations.get(&(interface, name)).copied().unwrap_or(-1))
}
extern "system" fn get_active_uniform(
    program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLint,
    ty: *mut GLenum,
    name: *mut GLchar,
) {
    get_active(
        "glGetActiveUniform",
        |s| s.active_uniforms.as_slice(),
        program,
        index,
        buf_size,
        length,
        size,
        ty,
        name,
    );
}
extern "system" fn get_active_attrib(
    program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLint,
    ty: *mut GLenum,
    name: *mut GLchar,
) {
    get_active(
        "glGetActiveAttrib",
        |s| s.active_attributes.as_slice(),
        program,
        index,
        buf_size,
        length,
        size,
        ty,
        name,
    );
}

macro_rules! program_uniforms {
    ($($func:ident = $name:literal, $ty:ty, $components:literal;)*) => {$(
        extern "system" fn $func(program: GLuint, location: GLint, count: GLsizei, value: *const $ty) {
            record($name, &[i64::from(program), i64::from(location), i64::from(count)]);
            upload(value.cast(), len(count) * $components * std::mem::size_of::<$ty>());
        }
    )*};
}
program_uniforms! {
    program_uniform_1fv = "glProgramUniform1fv", GLfloat, 1;
    program_uniform_2fv = "glProgramUniform2fv", GLfloat, 2;
    program_uniform_3fv = "glProgramUniform3fv", GLfloat, 3;
    program_uniform_4fv = "glProgramUniform4fv", GLfloat, 4;
    program_uniform_1dv = "glProgramUniform1dv", GLdouble, 1;
    program_uniform_2dv = "glProgramUniform2dv", GLdouble, 2;
    program_uniform_3dv = "glProgramUniform3dv", GLdouble, 3;
    program_uniform_4dv = "glProgramUniform4dv", GLdouble, 4;
    program_uniform_1iv = "glProgramUniform1iv", GLint, 1;
    program_uniform_2iv = "glProgramUniform2iv", GLint, 2;
    program_uniform_3iv = "glProgramUniform3iv", GLint, 3;
    program_uniform_4iv = "glProgramUniform4iv", GLint, 4;
    program_uniform_1uiv = "glProgramUniform1uiv", GLuint, 1;
    program_uniform_2uiv = "glProgramUniform2uiv", GLuint, 2;
    program_uniform_3uiv = "glProgramUniform3uiv", GLuint, 3;
    program_uniform_4uiv = "glProgramUniform4uiv", GLuint, 4;
}

macro_rules! program_uniform_matrices {
    ($($func:ident = $name:literal, $elements:literal;)*) => {$(
        extern "system" fn $func(
            program: GLuint,
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLfloat,
        ) {
            record(
                $name,
                &[
                    i64::from(program),
                    i64::from(location),
                    i64::from(count),
                    i64::from(transpose),
                ],
            );
            upload(value.cast(), len(count) * $elements * std::mem::size_of::<GLfloat>());
        }
    )*};
}
program_uniform_matrices! {
    program_uniform_matrix_2fv = "glProgramUniformMatrix2fv", 4;
    program_uniform_matrix_3fv = "glProgramUniformMatrix3fv", 9;
    program_uniform_matrix_4fv = "glProgramUniformMatrix4fv", 16;
    program_uniform_matrix_2x3fv = "glProgramUniformMatrix2x3fv", 6;
    program_uniform_matrix_2x4fv = "glProgramUniformMatrix2x4fv", 8;
    program_uniform_matrix_3x2fv = "glProgramUniformMatrix3x2fv", 6;
    program_uniform_matrix_3x4fv = "glProgramUniformMatrix3x4fv", 12;
    program_uniform_matrix_4x2fv = "glProgramUniformMatrix4x2fv", 8;
    program_uniform_matrix_4x3fv = "glProgramUniformMatrix4x3fv", 12;
}

// Vertex arrays

extern "system" fn vertex_array_attrib_format(
    vao: GLuint,
    index: GLuint,
    size: GLint,
    ty: GLenum,
    normalized: GLboolean,
    offset: GLuint,
) {
    record(
        "glVertexArrayAttribFormat",
        &[
            i64::from(vao),
            i64::from(index),
            i64::from(size),
            i64::from(ty),
            i64::from(normalized),
            i64::from(offset),
        ],
    );
}
extern "system" fn vertex_array_attrib_i_format(
    vao: GLuint,
    index: GLuint,
    size: GLint,
    ty: GLenum,
    offset: GLuint,
) {
    record(
        "glVertexArrayAttribIFormat",
        &[
            i64::from(vao),
            i64::from(index),
            i64::from(size),
            i64::from(ty),
            i64::from(offset),
        ],
    );
}
extern "system" fn vertex_array_attrib_l_format(
    vao: GLuint,
    index: GLuint,
    size: GLint,
    ty: GLenum,
    offset: GLuint,
) {
    record(
        "glVertexArrayAttribLFormat",
        &[
            i64::from(vao),
            i64::from(index),
            i64::from(size),
            i64::from(ty),
            i64::from(offset),
        ],
    );
}
extern "system" fn vertex_array_vertex_buffer(
    vao: GLuint,
    binding: GLuint,
    buffer: GLuint,
    offset: GLintptr,
    stride: GLsizei,
) {
    record(
        "glVertexArrayVertexBuffer",
        &[
            i64::from(vao),
            i64::from(binding),
            i64::from(buffer),
            offset as i64,
            i64::from(stride),
        ],
    );
}
extern "system" fn vertex_array_element_buffer(vao: GLuint, buffer: GLuint) {
    record(
        "glVertexArrayElementBuffer",
        &[i64::from(vao), i64::from(buffer)],
    );
}
extern "system" fn vertex_array_attrib_binding(vao: GLuint, index: GLuint, binding: GLuint) {
    record(
        "glVertexArrayAttribBinding",
        &[i64::from(vao), i64::from(index), i64::from(binding)],
    );
}
extern "system" fn enable_vertex_array_attrib(vao: GLuint, index: GLuint) {
    record(
        "glEnableVertexArrayAttrib",
        &[i64::from(vao), i64::from(index)],
    );
}
extern "system" fn disable_vertex_array_attrib(vao: GLuint, index: GLuint) {
    record(
        "glDisableVertexArrayAttrib",
        &[i64::from(vao), i64::from(index)],
    );
}
extern "system" fn vertex_array_binding_divisor(vao: GLuint, binding: GLuint, divisor: GLuint) {
    record(
        "glVertexArrayBindingDivisor",
        &[i64::from(vao), i64::from(binding), i64::from(divisor)],
    );
}
extern "system" fn enable_vertex_attrib_array(index: GLuint) {
    record("glEnableVertexAttribArray", &[i64::from(index)]);
}
extern "system" fn vertex_attrib_divisor(index: GLuint, divisor: GLuint) {
    record(
        "glVertexAttribDivisor",
        &[i64::from(index), i64::from(divisor)],
    );
}

// Drawing

extern "system" fn clear_color(_r: GLfloat, _g: GLfloat, _b: GLfloat, _a: GLfloat) {
    record("glClearColor", &[]);
}
extern "system" fn clear_depth(_depth: GLdouble) {
    record("glClearDepth", &[]);
}
extern "system" fn clear(mask: GLbitfield) {
    record("glClear", &[i64::from(mask)]);
}
extern "system" fn draw_arrays(mode: GLenum, first: GLint, count: GLsizei) {
    record(
        "glDrawArrays",
        &[i64::from(mode), i64::from(first), i64::from(count)],
    );
}
extern "system" fn draw_arrays_instanced(
    mode: GLenum,
    first: GLint,
    count: GLsizei,
    instances: GLsizei,
) {
    record(
        "glDrawArraysInstanced",
        &[
            i64::from(mode),
            i64::from(first),
            i64::from(count),
            i64::from(instances),
        ],
    );
}
/// Records the offset pointer as an integer.
extern "system" fn draw_elements(mode: GLenum, count: GLsizei, ty: GLenum, offset: *const c_void) {
    record(
        "glDrawElements",
        &[
            i64::from(mode),
            i64::from(count),
            i64::from(ty),
            offset as usize as i64,
        ],
    );
}
/// Records the offset pointer as an integer.
extern "system" fn draw_elements_instanced(
    mode: GLenum,
    count: GLsizei,
    ty: GLenum,
    offset: *const c_void,
    instances: GLsizei,
) {
    record(
        "glDrawElementsInstanced",
        &[
            i64::from(mode),
            i64::from(count),
            i64::from(ty),
            offset as usize as i64,
            i64::from(instances),
        ],
    );
}

macro_rules! entry_points {
    ($name:expr; $($symbol:literal => $func:ident,)*) => {
        match $name {
            $($symbol => $func as *const c_void,)*
            _ => std::ptr::null(),
        }
    };
}

fn lookup(name: &'static str) -> *const c_void {
    entry_points! { name;
        "glCreateShader" => create_shader,
        "glDeleteShader" => delete_shader,
        "glIsShader" => is_shader,
        "glGetShaderiv" => get_shader_iv,
        "glCreateProgram" => create_program,
        "glDeleteProgram" => delete_program,
        "glIsProgram" => is_program,
        "glUseProgram" => use_program,
        "glGetProgramiv" => get_program_iv,
        "glCreateVertexArrays" => create_vertex_arrays,
        "glDeleteVertexArrays" => delete_vertex_arrays,
        "glIsVertexArray" => is_vertex_array,
        "glBindVertexArray" => bind_vertex_array,
        "glCreateProgramPipelines" => create_program_pipelines,
        "glDeleteProgramPipelines" => delete_program_pipelines,
        "glIsProgramPipeline" => is_program_pipeline,
        "glBindProgramPipeline" => bind_program_pipeline,
        "glCreateTextures" => create_textures,
        "glDeleteTextures" => delete_textures,
        "glIsTexture" => is_texture,
        "glBindTexture" => bind_texture,
        "glGetTextureParameteriv" => get_texture_parameter_iv,
        "glGetTexParameteriv" => get_tex_parameter_iv,
        "glCreateBuffers" => create_buffers,
        "glDeleteBuffers" => delete_buffers,
        "glIsBuffer" => is_buffer,
        "glBindBuffer" => bind_buffer,
        "glGetNamedBufferParameteriv" => get_named_buffer_parameter_iv,
        "glGetNamedBufferParameteri64v" => get_named_buffer_parameter_i64v,
        "glGetBufferParameteriv" => get_buffer_parameter_iv,

        "glGetIntegerv" => get_integer_v,
        "glGetError" => get_error,
        "glEnable" => enable,
        "glDisable" => disable,
        "glDebugMessageCallback" => debug_message_callback,
        "glObjectLabel" => object_label,
        "glPixelStorei" => pixel_store_i,

        "glNamedBufferData" => named_buffer_data,
        "glNamedBufferSubData" => named_buffer_sub_data,
        "glNamedBufferStorage" => named_buffer_storage,

        "glTextureStorage1D" => texture_storage_1d,
        "glTextureStorage2D" => texture_storage_2d,
        "glTextureStorage3D" => texture_storage_3d,
        "glTextureSubImage1D" => texture_sub_image_1d,
        "glTextureSubImage2D" => texture_sub_image_2d,
        "glTextureSubImage3D" => texture_sub_image_3d,
        "glTextureParameteri" => texture_parameter_i,
        "glTextureParameteriv" => texture_parameter_iv,
        "glTextureBuffer" => texture_buffer,

        "glShaderSource" => shader_source,
        "glCompileShader" => compile_shader,
        "glGetShaderInfoLog" => get_shader_info_log,
        "glGetProgramInfoLog" => get_program_info_log,
        "glAttachShader" => attach_shader,
        "glDetachShader" => detach_shader,
        "glLinkProgram" => link_program,
        "glProgramParameteri" => program_parameter_i,
        "glUseProgramStages" => use_program_stages,
        "glGetProgramResourceLocation" => get_program_resource_location,
        "glGetActiveUniform" => get_active_uniform,
        "glGetActiveAttrib" => get_active_attrib,
        "glProgramUniform1fv" => program_uniform_1fv,
        "glProgramUniform2fv" => program_uniform_2fv,
        "glProgramUniform3fv" => program_uniform_3fv,
        "glProgramUniform4fv" => program_uniform_4fv,
        "glProgramUniform1dv" => program_uniform_1dv,
        "glProgramUniform2dv" => program_uniform_2dv,
        "glProgramUniform3dv" => program_uniform_3dv,
        "glProgramUniform4dv" => program_uniform_4dv,
        "glProgramUniform1iv" => program_uniform_1iv,
        "glProgramUniform2iv" => program_uniform_2iv,
        "glProgramUniform3iv" => program_uniform_3iv,
        "glProgramUniform4iv" => program_uniform_4iv,
        "glProgramUniform1uiv" => program_uniform_1uiv,
        "glProgramUniform2uiv" => program_uniform_2uiv,
        "glProgramUniform3uiv" => program_uniform_3uiv,
        "glProgramUniform4uiv" => program_uniform_4uiv,
        "glProgramUniformMatrix2fv" => program_uniform_matrix_2fv,
        "glProgramUniformMatrix3fv" => program_uniform_matrix_3fv,
        "glProgramUniformMatrix4fv" => program_uniform_matrix_4fv,
        "glProgramUniformMatrix2x3fv" => program_uniform_matrix_2x3fv,
        "glProgramUniformMatrix2x4fv" => program_uniform_matrix_2x4fv,
        "glProgramUniformMatrix3x2fv" => program_uniform_matrix_3x2fv,
        "glProgramUniformMatrix3x4fv" => program_uniform_matrix_3x4fv,
        "glProgramUniformMatrix4x2fv" => program_uniform_matrix_4x2fv,
        "glProgramUniformMatrix4x3fv" => program_uniform_matrix_4x3fv,

        "glVertexArrayAttribFormat" => vertex_array_attrib_format,
        "glVertexArrayAttribIFormat" => vertex_array_attrib_i_format,
        "glVertexArrayAttribLFormat" => vertex_array_attrib_l_format,
        "glVertexArrayVertexBuffer" => vertex_array_vertex_buffer,
        "glVertexArrayElementBuffer" => vertex_array_element_buffer,
        "glVertexArrayAttribBinding" => vertex_array_attrib_binding,
        "glEnableVertexArrayAttrib" => enable_vertex_array_attrib,
        "glDisableVertexArrayAttrib" => disable_vertex_array_attrib,
        "glVertexArrayBindingDivisor" => vertex_array_binding_divisor,
        "glEnableVertexAttribArray" => enable_vertex_attrib_array,
        "glVertexAttribDivisor" => vertex_attrib_divisor,

        "glClearColor" => clear_color,
        "glClearDepth" => clear_depth,
        "glClear" => clear,
        "glDrawArrays" => draw_arrays,
        "glDrawArraysInstanced" => draw_arrays_instanced,
        "glDrawElements" => draw_elements,
        "glDrawElementsInstanced" => draw_elements_instanced,
    }
}
