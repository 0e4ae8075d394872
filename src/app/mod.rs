//! Winit-based Application Shell
//!
//! A small framework over the [winit](https://crates.io/crates/winit)
//! event loop:
//!
//! - [`App`]: builder for configuring and launching applications
//! - [`AppHandler`]: trait users implement to define application behavior
//! - `AppRunner`: internal event loop handler (not exposed)
//!
//! # Usage
//!
//! 1. Implement [`AppHandler`] for your application struct
//! 2. Use [`App`] to configure window settings
//! 3. Call [`App::run`] to start the event loop
//!
//! ```rust,ignore
//! struct Demo;
//!
//! impl AppHandler for Demo {
//!     fn init(renderer: &mut Renderer, _window: &Arc<Window>) -> ember::Result<Self> {
//!         renderer.set_pipeline(ember::renderer::FLAT_COLOR_SHADER, "flat", &layouts);
//!         Ok(Demo)
//!     }
//! }
//!
//! fn main() -> ember::Result<()> {
//!     env_logger::init();
//!     App::new().with_title("Demo").run::<Demo>()
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
pub use winit::window::{Window, WindowId};

use crate::errors::Result;
use crate::renderer::Renderer;
use crate::renderer::settings::RendererSettings;

/// Per-frame timing information passed to [`AppHandler::update`].
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Total elapsed time since the application started (in seconds).
    pub time: f32,
    /// Delta time since the last frame (in seconds).
    pub dt: f32,
    /// Total number of frames rendered since startup.
    pub frame_count: u64,
}

/// Trait for defining application behavior.
///
/// # Lifecycle
///
/// 1. [`init`](Self::init) — called once after the window and renderer
///    exist; load geometry, build the pipeline. A returned error is fatal
///    and aborts startup.
/// 2. [`on_event`](Self::on_event) — called for each window event.
/// 3. [`update`](Self::update) — called each frame before rendering.
pub trait AppHandler: Sized + 'static {
    /// Initializes the application.
    fn init(renderer: &mut Renderer, window: &Arc<Window>) -> Result<Self>;

    /// Handles window events before default processing. Return `true` to
    /// consume the event.
    #[allow(unused_variables)]
    fn on_event(
        &mut self,
        renderer: &mut Renderer,
        window: &Arc<Window>,
        event: &WindowEvent,
    ) -> bool {
        false
    }

    /// Updates application state once per frame before rendering.
    #[allow(unused_variables)]
    fn update(&mut self, renderer: &mut Renderer, window: &Arc<Window>, frame: &FrameState) {}
}

/// Application builder for configuring and launching the renderer.
///
/// Defaults to a fixed, non-resizable 640×480 window.
pub struct App {
    title: String,
    width: u32,
    height: u32,
    resizable: bool,
    settings: RendererSettings,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Ember".into(),
            width: 640,
            height: 480,
            resizable: false,
            settings: RendererSettings::default(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Allows the window to be resized (surface reconfiguration is handled
    /// automatically).
    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Sets the renderer settings.
    #[must_use]
    pub fn with_settings(mut self, settings: RendererSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Runs the application with the specified handler.
    ///
    /// Blocks until the application exits; the event loop takes ownership
    /// of the current thread.
    pub fn run<H: AppHandler>(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::<H>::new(self);
        event_loop.run_app(&mut runner)?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal application runner implementing winit's `ApplicationHandler`.
struct AppRunner<H: AppHandler> {
    config: App,

    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    user_state: Option<H>,

    start_time: Instant,
    last_loop_time: Instant,
    frame_count: u64,
}

impl<H: AppHandler> AppRunner<H> {
    fn new(config: App) -> Self {
        let now = Instant::now();
        Self {
            config,
            window: None,
            renderer: None,
            user_state: None,
            start_time: now,
            last_loop_time: now,
            frame_count: 0,
        }
    }

    fn update_logic(&mut self) {
        let now = Instant::now();
        let time = now.duration_since(self.start_time).as_secs_f32();
        let dt = now.duration_since(self.last_loop_time).as_secs_f32();
        self.last_loop_time = now;
        self.frame_count += 1;

        let (Some(window), Some(renderer), Some(user_state)) =
            (&self.window, &mut self.renderer, &mut self.user_state)
        else {
            return;
        };

        let frame_state = FrameState {
            time,
            dt,
            frame_count: self.frame_count,
        };
        user_state.update(renderer, window, &frame_state);
    }
}

impl<H: AppHandler> ApplicationHandler for AppRunner<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.width),
                f64::from(self.config.height),
            ))
            .with_resizable(self.config.resizable);

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        log::info!("Initializing renderer backend...");

        let size = window.inner_size();
        let mut renderer = match pollster::block_on(Renderer::init(
            window.clone(),
            &self.config.settings,
            size.width.max(1),
            size.height.max(1),
        )) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Fatal renderer error: {e}");
                event_loop.exit();
                return;
            }
        };

        match H::init(&mut renderer, &window) {
            Ok(user_state) => self.user_state = Some(user_state),
            Err(e) => {
                log::error!("Fatal application init error: {e}");
                event_loop.exit();
                return;
            }
        }

        self.renderer = Some(renderer);

        let now = Instant::now();
        self.start_time = now;
        self.last_loop_time = now;
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(renderer), Some(user_state)) =
            (&self.window, &mut self.renderer, &mut self.user_state)
        else {
            return;
        };

        if user_state.on_event(renderer, window, &event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                // Drain in-flight GPU work before handles start dropping.
                renderer.wait_for_idle();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                renderer.resize(physical_size.width, physical_size.height);
            }
            WindowEvent::RedrawRequested => {
                self.update_logic();
                if let Some(renderer) = &mut self.renderer {
                    renderer.render_frame();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.renderer.is_some()
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
    }
}
