//! Routing of GL debug output into the [`log`] facade, and object labels.

use crate::{
    gl::{
        self,
        types::{GLchar, GLenum, GLsizei, GLuint},
    },
    object::Kind,
    sizei, GLEnum, Id, Result,
};

/// The level a debug message of type `ty` and `severity` is logged at.
fn level(ty: GLenum, severity: GLenum) -> log::Level {
    if ty == gl::DEBUG_TYPE_ERROR {
        return log::Level::Error;
    }
    match severity {
        gl::DEBUG_SEVERITY_HIGH => log::Level::Error,
        gl::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        gl::DEBUG_SEVERITY_LOW => log::Level::Info,
        gl::DEBUG_SEVERITY_NOTIFICATION => log::Level::Trace,
        _ => log::Level::Debug,
    }
}

/// Read a debug message, which may or may not be nul-terminated.
///
/// # Safety
/// `message` must be null, or valid for `length` bytes if positive, or nul-terminated.
unsafe fn message_text(message: *const GLchar, length: GLsizei) -> String {
    if message.is_null() {
        return String::new();
    }
    let bytes = match usize::try_from(length) {
        Ok(length) => unsafe { std::slice::from_raw_parts(message.cast::<u8>(), length) },
        Err(_) => unsafe { std::ffi::CStr::from_ptr(message) }.to_bytes(),
    };
    String::from_utf8_lossy(bytes).into_owned()
}

extern "system" fn on_debug_message(
    source: GLenum,
    ty: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    _user_param: *mut std::ffi::c_void,
) {
    let level = level(ty, severity);
    if !log::log_enabled!(target: "glid::debug", level) {
        return;
    }
    let text = unsafe { message_text(message, length) };
    log::log!(
        target: "glid::debug",
        level,
        "GL message {id}: source = {source:#x}, type = {ty:#x}: {}",
        text.trim_end()
    );
}

/// Enable `GL_DEBUG_OUTPUT` and forward every debug message of the current context to
/// the [`log`] facade, under the `glid::debug` target.
///
/// Messages of type `GL_DEBUG_TYPE_ERROR` are logged as errors, other messages by
/// severity: high as errors, medium as warnings, low as info, notifications as trace.
///
/// With `synchronous`, messages are delivered on the thread and within the call that
/// caused them, at some cost to performance.
#[doc(alias = "glDebugMessageCallback")]
pub fn install_message_log(synchronous: bool) {
    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        if synchronous {
            gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        } else {
            gl::Disable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        }
        gl::DebugMessageCallback(Some(on_debug_message), std::ptr::null());
    }
    log::debug!("installed GL debug message log");
}

/// Attach a human-readable name to an object, shown in debug messages and by debuggers.
#[doc(alias = "glObjectLabel")]
pub fn label<K: Kind>(id: Id<K>, label: &str) -> Result<()> {
    unsafe {
        gl::ObjectLabel(
            K::TYPE.as_gl(),
            id.get(),
            sizei(label.len())?,
            label.as_ptr().cast(),
        );
    }
    Ok(())
}
