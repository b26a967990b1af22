use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

use crate::assets::Assets;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::game::{DrawList, FrameContext, Game};
use crate::input::{key_char, InputState};
use crate::render::{create_graphics, Graphics, GraphicsEvent};

enum State {
    Ready(Graphics),
    Init(Option<EventLoopProxy<GraphicsEvent>>),
}

pub struct EngineContext {
    config: EngineConfig,
    event_loop: EventLoop<GraphicsEvent>,
}

struct App<G> {
    state: State,
    config: EngineConfig,
    game: G,
    assets: Assets,
    input: InputState,
    draw_list: DrawList,
    last_frame: Instant,
    fatal: Option<EngineError>,
}

impl<G: Game> App<G> {
    fn new(event_loop: &EventLoop<GraphicsEvent>, config: EngineConfig, game: G, assets: Assets) -> Self {
        Self {
            state: State::Init(Some(event_loop.create_proxy())),
            config,
            game,
            assets,
            input: InputState::default(),
            draw_list: DrawList::default(),
            last_frame: Instant::now(),
            fatal: None,
        }
    }

    fn draw(&mut self) {
        let State::Ready(gfx) = &mut self.state else {
            return;
        };

        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.draw_list.clear();
        let ctx = FrameContext {
            delta_time,
            input: &self.input,
        };
        self.game.frame(&ctx, &mut self.draw_list);
        gfx.draw(&self.assets, &self.draw_list);
    }

    fn resized(&mut self, size: PhysicalSize<u32>) {
        if let State::Ready(gfx) = &mut self.state {
            gfx.resize(size);
        }
    }

    fn scale_factor(&self) -> f64 {
        match &self.state {
            State::Ready(gfx) => gfx.window().scale_factor(),
            State::Init(_) => 1.0,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        log::error!("{err}");
        self.fatal = Some(err);
        event_loop.exit();
    }
}

impl<G: Game> ApplicationHandler<GraphicsEvent> for App<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let State::Init(proxy) = &mut self.state {
            if let Some(proxy) = proxy.take() {
                let win_attr = Window::default_attributes()
                    .with_title(self.config.title.clone())
                    .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
                    .with_resizable(false);

                let window = match event_loop.create_window(win_attr) {
                    Ok(window) => Arc::new(window),
                    Err(err) => return self.fail(event_loop, err.into()),
                };

                pollster::block_on(create_graphics(window, self.config.clear_color, proxy));
            }
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, graphics: GraphicsEvent) {
        match graphics {
            Ok(graphics) => {
                // Request a redraw now that graphics are ready
                graphics.request_redraw();
                self.last_frame = Instant::now();
                self.state = State::Ready(graphics);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::Resized(size) => self.resized(size),
            WindowEvent::RedrawRequested => self.draw(),
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.scale_factor();
                self.input.cursor_moved(position, scale);
            }
            WindowEvent::MouseInput { state, .. } => match state {
                ElementState::Pressed => self.game.mouse_down(self.input.pointer()),
                ElementState::Released => self.game.mouse_up(),
            },
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(key) = key_char(&event.logical_key) {
                    self.input.set_last_key(key);
                    self.game.key_down(key);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let State::Ready(gfx) = &self.state {
            gfx.request_redraw();
        }
    }
}

impl EngineContext {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let event_loop = EventLoop::<GraphicsEvent>::with_user_event().build()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        Ok(Self { config, event_loop })
    }

    /// Initialises `game`, then runs the event loop on the current thread
    /// until the window closes.
    pub fn run<G: Game>(self, mut game: G) -> Result<(), EngineError> {
        let Self { config, event_loop } = self;

        let mut assets = Assets::new(&config.asset_root);
        game.init(&mut assets)?;
        log::info!("{} assets loaded from {}", assets.len(), assets.root().display());

        let mut app = App::new(&event_loop, config, game, assets);
        event_loop.run_app(&mut app)?;
        match app.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
