use glid::{
    buffer, debug, draw, gl,
    program::{
        self, uniform, ShaderType, UniformLocation, VertexAttributeIndex, VertexBindingIndex,
    },
    unique::{UniqueBuffer, UniqueProgram, UniqueVertexArray},
    vertex_array::{self, AttributeFormat, AttributeType, Components, FloatingAttribute},
};
use glutin::prelude::*;

#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
struct Vertex {
    pos: [f32; 2],
    color: [f32; 3],
}

const VERTICES: [Vertex; 3] = [
    Vertex {
        pos: [0.0, 0.6],
        color: [1.0, 0.2, 0.2],
    },
    Vertex {
        pos: [-0.6, -0.5],
        color: [0.2, 1.0, 0.2],
    },
    Vertex {
        pos: [0.6, -0.5],
        color: [0.2, 0.2, 1.0],
    },
];

const VERTEX_SHADER: &str = r"#version 450 core
layout(location = 0) uniform float scale;

layout(location = 0) in vec2 pos;
layout(location = 1) in vec3 color;

layout(location = 0) out vec3 v_color;

void main() {
    v_color = color;
    gl_Position = vec4(pos * scale, 0.0, 1.0);
}";

const FRAGMENT_SHADER: &str = r"#version 450 core
layout(location = 0) in vec3 v_color;
layout(location = 0) out vec4 color;

void main() {
    color = vec4(v_color, 1.0);
}";

struct App {
    window: Option<Window>,
}
impl winit::application::ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        event_loop.listen_device_events(winit::event_loop::DeviceEvents::Never);
        if self.window.is_none() {
            match Window::new(event_loop) {
                Ok(window) => self.window = Some(window),
                Err(err) => {
                    log::error!("failed to set up window: {err:#}");
                    event_loop.exit();
                }
            }
        }
    }
    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        use winit::event::WindowEvent as Event;
        match event {
            Event::CloseRequested
            | Event::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        state: winit::event::ElementState::Pressed,
                        physical_key:
                            winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            Event::RedrawRequested => {
                if let Some(window) = &mut self.window {
                    if let Err(err) = window.redraw() {
                        log::error!("redraw failed: {err:#}");
                        event_loop.exit();
                    }
                }
            }
            _ => (),
        }
    }
    fn about_to_wait(&mut self, _: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.window.request_redraw();
        }
    }
    fn suspended(&mut self, _: &winit::event_loop::ActiveEventLoop) {
        self.window.take();
    }
    fn exiting(&mut self, _: &winit::event_loop::ActiveEventLoop) {
        self.window.take();
    }
}

struct Window {
    // Field order: GL objects drop while the context is still current,
    // and the context drops before the window.
    program: UniqueProgram,
    vao: UniqueVertexArray,
    _vertices: UniqueBuffer,
    frame: u32,

    surface: glutin::surface::Surface<glutin::surface::WindowSurface>,
    context: glutin::context::PossiblyCurrentContext,
    window: winit::window::Window,
}
impl Window {
    fn new(event_loop: &winit::event_loop::ActiveEventLoop) -> anyhow::Result<Self> {
        use glutin::display::{GetGlDisplay, GlDisplay};
        use winit::raw_window_handle::HasWindowHandle;

        let (window, config) = glutin_winit::DisplayBuilder::new()
            .build(
                event_loop,
                glutin::config::ConfigTemplateBuilder::new().with_api(glutin::config::Api::OPENGL),
                |mut configs| configs.next().expect("no GL configs"),
            )
            .map_err(|err| anyhow::anyhow!("{err}"))?;
        anyhow::ensure!(window.is_none());

        let window = glutin_winit::finalize_window(
            event_loop,
            winit::window::WindowAttributes::default()
                .with_title("glid triangle")
                .with_inner_size(winit::dpi::PhysicalSize::new(512, 512))
                .with_resizable(false),
            &config,
        )?;

        let display = config.display();
        let rwh = window.window_handle()?.as_raw();
        let size = window.inner_size();
        // Safety: the window outlives the surface.
        let surface = unsafe {
            display.create_window_surface(
                &config,
                &glutin::surface::SurfaceAttributesBuilder::<glutin::surface::WindowSurface>::new()
                    .build(
                        rwh,
                        size.width.try_into()?,
                        size.height.try_into()?,
                    ),
            )?
        };
        // Safety: the window outlives the context.
        let context = unsafe {
            display.create_context(
                &config,
                &glutin::context::ContextAttributesBuilder::new()
                    .with_profile(glutin::context::GlProfile::Core)
                    .with_debug(true)
                    .with_context_api(glutin::context::ContextApi::OpenGl(Some(
                        glutin::context::Version::new(4, 5),
                    )))
                    .build(Some(rwh)),
            )
        }?
        .make_current(&surface)?;
        log::info!("got context {:?}", context.context_api());

        // Load global proc addresses. Only valid while this one display is in use.
        gl::load_with(|sym| {
            std::ffi::CString::new(sym)
                .map_or(std::ptr::null(), |sym| display.get_proc_address(&sym))
        });
        debug::install_message_log(true);

        let program = {
            let vertex = program::create_shader(ShaderType::Vertex, VERTEX_SHADER)?;
            let fragment = program::create_shader(ShaderType::Fragment, FRAGMENT_SHADER)?;
            // Shaders are deleted on drop, the program keeps what it linked.
            program::create_program(&[vertex.id(), fragment.id()])?
        };
        debug::label(program.id(), "triangle")?;
        for uniform in program::active_uniforms(&program) {
            let ty = uniform.typecode().map_or("unknown", |ty| ty.name());
            log::debug!("uniform {}: {ty}", uniform.name);
        }

        let vertices = UniqueBuffer::create(());
        buffer::data(&vertices, &VERTICES, buffer::Usage::default())?;

        let vao = UniqueVertexArray::create(());
        let binding = VertexBindingIndex(0);
        vertex_array::vertex_buffer(&vao, binding, &vertices, 0, std::mem::size_of::<Vertex>())?;
        for (index, components, offset) in [
            (0, Components::Vec2, std::mem::offset_of!(Vertex, pos)),
            (1, Components::Vec3, std::mem::offset_of!(Vertex, color)),
        ] {
            let attribute = VertexAttributeIndex(index);
            vertex_array::attribute_format(
                &vao,
                attribute,
                &AttributeFormat {
                    ty: AttributeType::Float(FloatingAttribute::F32),
                    components,
                    relative_offset: offset.try_into()?,
                },
            )?;
            vertex_array::attribute_binding(&vao, attribute, binding);
            vertex_array::enable_attribute(&vao, attribute);
        }

        Ok(Self {
            program,
            vao,
            _vertices: vertices,
            frame: 0,
            surface,
            context,
            window,
        })
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        self.frame = self.frame.wrapping_add(1);
        let scale = 0.75 + 0.25 * (self.frame as f32 / 60.0).sin();
        uniform::set::<f32>(&self.program, UniformLocation(0), &scale)?;

        draw::clear_color([0.0, 0.5, 0.8, 1.0]);
        draw::clear(draw::ClearMask::COLOR);

        self.program.bind();
        self.vao.bind();
        draw::draw_arrays(draw::Topology::Triangles, 0..VERTICES.len())?;
        glid::error::check_error()?;

        self.window.pre_present_notify();
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let event_loop = winit::event_loop::EventLoop::new()?;
    let mut app = App { window: None };
    event_loop.run_app(&mut app)?;
    Ok(())
}
