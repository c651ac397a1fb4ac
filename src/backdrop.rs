//! Backdrop builder and frame driver.
//!
//! [`Backdrop`] is the entry point: configure with method chaining, then
//! call `.run()` to open the window and animate until it closes. The frame
//! loop advances the active [`ParticleSystem`], eases the camera toward the
//! pointer and hands the flattened instances to the GPU. Theme hotkeys
//! (1/2/3) swap the particle system wholesale; switching to the already
//! active theme is a no-op.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::camera::Rig;
use crate::error::BackdropError;
use crate::gpu::{GpuState, ParticleInstance};
use crate::input::Input;
use crate::system::ParticleSystem;
use crate::theme::ThemeId;
use crate::time::Time;

/// A themed particle backdrop.
///
/// # Example
///
/// ```no_run
/// use backdrop::{Backdrop, ThemeId};
///
/// fn main() -> Result<(), backdrop::BackdropError> {
///     Backdrop::new()
///         .with_theme(ThemeId::Galaxy)
///         .with_title("my app")
///         .run()
/// }
/// ```
pub struct Backdrop {
    theme: ThemeId,
    title: String,
}

impl Backdrop {
    /// Create a backdrop with the default theme.
    pub fn new() -> Self {
        Self {
            theme: ThemeId::default(),
            title: "backdrop".to_string(),
        }
    }

    /// Set the initially active theme.
    pub fn with_theme(mut self, theme: ThemeId) -> Self {
        self.theme = theme;
        self
    }

    /// Set the window title prefix.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open the window and run until it closes.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.theme, self.title);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the frame callback and the event handlers share. Explicit
/// struct rather than loose fields so the switch logic is testable without
/// a window.
struct AppState {
    theme: ThemeId,
    system: ParticleSystem,
    input: Input,
    rig: Rig,
    time: Time,
}

impl AppState {
    fn new(theme: ThemeId, width: u32, height: u32) -> Self {
        Self {
            theme,
            system: ParticleSystem::new(theme),
            input: Input::new(width, height),
            rig: Rig::new(),
            time: Time::new(),
        }
    }

    /// Swap to `id`, rebuilding the particle system. Returns `false` (and
    /// touches nothing) when `id` is already active.
    fn switch_theme(&mut self, id: ThemeId) -> bool {
        if id == self.theme {
            return false;
        }
        self.theme = id;
        self.system = ParticleSystem::new(id);
        true
    }

    /// Advance simulation and camera by one frame, returning the flattened
    /// instances to draw.
    fn tick(&mut self) -> Vec<ParticleInstance> {
        if let Some(id) = self.input.theme_request() {
            self.switch_theme(id);
        }
        self.input.begin_frame();

        self.system.update();
        self.rig.ease_toward(self.input.pointer_ndc());

        let shape = self.theme.config().shape;
        self.system
            .particles()
            .iter()
            .map(|p| ParticleInstance::from_particle(p, shape))
            .collect()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    state: AppState,
    title: String,
}

const DEFAULT_SIZE: (u32, u32) = (1280, 720);

impl App {
    fn new(theme: ThemeId, title: String) -> Self {
        Self {
            window: None,
            gpu: None,
            state: AppState::new(theme, DEFAULT_SIZE.0, DEFAULT_SIZE.1),
            title,
        }
    }

    fn max_instances() -> u32 {
        ThemeId::ALL
            .iter()
            .map(|id| id.config().particle_count)
            .max()
            .unwrap_or(0)
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            window.set_title(&format!(
                "{} [{}] {:.0} fps",
                self.title,
                self.state.theme,
                self.state.time.fps()
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(DEFAULT_SIZE.0, DEFAULT_SIZE.1));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                eprintln!("{}", BackdropError::from(e));
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.state.input.set_window_size(size.width, size.height);

        match pollster::block_on(GpuState::new(window.clone(), Self::max_instances())) {
            Ok(gpu) => {
                self.window = Some(window);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                eprintln!("{}", BackdropError::from(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.state.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.state
                    .input
                    .set_window_size(physical_size.width, physical_size.height);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let (time, delta) = self.state.time.update();
                let instances = self.state.tick();

                if let Some(gpu) = &mut self.gpu {
                    let view_proj = self.state.rig.view_proj(gpu.aspect());
                    match gpu.render(view_proj, &instances, time, delta) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                            width: gpu.config.width,
                            height: gpu.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                // Title doubles as the active-theme indicator.
                if self.state.time.frame() % 30 == 0 {
                    self.update_title();
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
