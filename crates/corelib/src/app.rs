use std::path::Path;

use crate::backend::BackendImpl;
use crate::events::Event;
use crate::gfx::{Color, Font, SurfaceId, Texture, decode_rgba};
use crate::input::{KeyCode, KeyboardState, MouseButton, MouseState};
use crate::math::{Rect, UVec2, Vec2};
use crate::screen::Screen;

mod limiter;
mod window;

pub use window::*;

#[cfg(feature = "logs")]
pub mod logger;
#[cfg(feature = "logs")]
pub use logger::LogConfig;

use limiter::{FpsLimiter, LimitMode};

// effectively never reached, it only bounds the counter
const GAME_TICKS_WRAP: u64 = 999_999_999_999_999_999;

/// Owns the backend, the render surfaces and the frame clock, and drives
/// [`Screen`] implementations through the blocking main loop.
///
/// When a logical size smaller than the window size is configured the
/// screen draws to a logical surface that is stretch-blitted onto the real
/// one before presenting (pixel scaling).
pub struct App {
    backend: Box<dyn BackendImpl>,
    real_surface: SurfaceId,
    canvas_surface: Option<SurfaceId>,
    real_size: UVec2,
    logical_size: UVec2,
    scale: UVec2,
    clear_color: Color,
    limiter: FpsLimiter,
    mouse: MouseState,
    keyboard: KeyboardState,
    ticks: u64,
    running: bool,
}

impl App {
    pub fn new(mut backend: Box<dyn BackendImpl>, config: WindowConfig) -> Result<Self, String> {
        backend.set_title(&config.title);
        let real_surface = backend.create_surface(config.size)?;

        let (logical_size, canvas_surface) = match config.logical_size {
            Some(logical) if logical != config.size => {
                (logical, Some(backend.create_surface(logical)?))
            }
            _ => (config.size, None),
        };

        // integer scale, clamped so the pointer math stays defined when the
        // logical resolution is bigger than the window
        let scale = (config.size / logical_size).max(UVec2::ONE);

        let mode = match config.frame_rate {
            0 => LimitMode::Disabled,
            fps => LimitMode::from_fps(fps as f64),
        };

        log::debug!(
            "app created: window={}x{} logical={}x{} scale={:?} frame_rate={}",
            config.size.x,
            config.size.y,
            logical_size.x,
            logical_size.y,
            scale,
            config.frame_rate
        );

        Ok(Self {
            backend,
            real_surface,
            canvas_surface,
            real_size: config.size,
            logical_size,
            scale,
            clear_color: config.clear_color,
            limiter: FpsLimiter::new(mode),
            mouse: MouseState::default(),
            keyboard: KeyboardState::default(),
            ticks: 0,
            running: false,
        })
    }

    /// Run the blocking main loop until [`App::stop`] is called.
    ///
    /// Each iteration drains the backend events, dispatches them to the
    /// screen's hooks, calls `update`, presents the frame and waits out the
    /// rest of the frame's time budget. A [`Event::Quit`] terminates the
    /// process.
    pub fn run<S: Screen>(&mut self, screen: &mut S) -> Result<(), String> {
        self.running = true;
        log::debug!("main loop started");

        while self.running {
            self.mouse.tick();
            self.keyboard.tick();

            let events = self.backend.poll_events();
            for event in events {
                self.dispatch(event, screen);
            }

            screen.update(self);

            if let Some(canvas) = self.canvas_surface {
                self.backend.blit_scaled(canvas, self.real_surface);
            }
            self.backend.present(self.real_surface)?;

            self.advance_clock();
        }

        log::debug!("main loop stopped after {} ticks", self.ticks);
        Ok(())
    }

    /// Feed a single event through the input state and the screen's hooks.
    ///
    /// `run` calls this for every polled event; it is public so embedders
    /// with their own loop can drive screens manually.
    pub fn dispatch<S: Screen>(&mut self, event: Event, screen: &mut S) {
        match event {
            Event::Quit => {
                log::info!("quit event received, terminating");
                std::process::exit(0);
            }
            Event::KeyDown { key } => {
                self.keyboard.press(key);
                screen.key_down(self, key);
            }
            Event::KeyUp { key } => {
                self.keyboard.release(key);
                screen.key_up(self, key);
            }
            Event::MouseButtonDown { button, position } => {
                self.mouse.set_position(position);
                self.mouse.press(button);
                screen.mouse_button_down(self, button);
            }
            Event::MouseButtonUp { button, position } => {
                self.mouse.set_position(position);
                self.mouse.release(button);
                screen.mouse_button_up(self, button);
            }
            Event::MouseMove { position } => self.mouse.set_position(position),
        }
    }

    /// Request the main loop to exit after the current frame
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Fill the frame with a single color
    pub fn clear(&mut self, color: Color) {
        let target = self.draw_target();
        self.backend.clear(target, color);
    }

    /// The size the game logic draws to
    #[inline]
    pub fn size(&self) -> UVec2 {
        self.logical_size
    }

    /// The window size in real on-screen pixels
    #[inline]
    pub fn real_size(&self) -> UVec2 {
        self.real_size
    }

    /// Integer factor between logical and real pixels
    #[inline]
    pub fn scale(&self) -> UVec2 {
        self.scale
    }

    #[inline]
    pub fn is_scaled(&self) -> bool {
        self.canvas_surface.is_some()
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Frames elapsed since the loop started, wraps at a very large bound
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Last known pointer position in real window coordinates
    #[inline]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse.position()
    }

    /// Pointer position converted to logical coordinates
    pub fn scaled_mouse_pos(&self) -> Vec2 {
        (self.mouse.position().as_uvec2() / self.scale).as_vec2()
    }

    #[inline]
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keyboard.is_down(key)
    }

    #[inline]
    pub fn is_mouse_btn_down(&self, btn: MouseButton) -> bool {
        self.mouse.is_down(btn)
    }

    /// Set the window's title
    pub fn set_title(&mut self, title: &str) {
        self.backend.set_title(title);
    }

    /// Upload raw RGBA8 pixels as a texture
    pub fn texture_from_pixels(&mut self, size: UVec2, pixels: &[u8]) -> Result<Texture, String> {
        let id = self.backend.create_texture(size, pixels)?;
        Ok(Texture::new(id, size.as_vec2()))
    }

    /// Decode encoded image bytes (png, jpeg, webp) into a texture
    pub fn texture_from_bytes(&mut self, bytes: &[u8]) -> Result<Texture, String> {
        let (size, pixels) = decode_rgba(bytes)?;
        self.texture_from_pixels(size, &pixels)
    }

    /// Read and decode an image file into a texture
    pub fn texture_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Texture, String> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        self.texture_from_bytes(&bytes)
    }

    /// Copy part of a texture into a new texture
    pub fn clip_texture(&mut self, texture: &Texture, region: Rect) -> Result<Texture, String> {
        let id = self.backend.clip_texture(texture.id(), region)?;
        Ok(Texture::new(id, region.size()))
    }

    /// Load a font face at a fixed pixel size
    pub fn load_font(&mut self, data: &[u8], size: f32) -> Result<Font, String> {
        let id = self.backend.load_font(data, size)?;
        Ok(Font::new(id, size))
    }

    /// Direct access to the backend, mostly useful for downcasting in tests
    /// or for custom loop integrations
    pub fn backend_mut(&mut self) -> &mut dyn BackendImpl {
        self.backend.as_mut()
    }

    /// The pieces a drawing layer needs: the backend, the surface the frame
    /// is drawn to and its size
    pub fn draw_context(&mut self) -> (&mut dyn BackendImpl, SurfaceId, UVec2) {
        let target = self.draw_target();
        let size = self.logical_size;
        (self.backend.as_mut(), target, size)
    }

    fn draw_target(&self) -> SurfaceId {
        self.canvas_surface.unwrap_or(self.real_surface)
    }

    fn advance_clock(&mut self) {
        self.limiter.tick();
        self.ticks += 1;
        if self.ticks > GAME_TICKS_WRAP {
            self.ticks = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCmd, HeadlessBackend};
    use crate::math::{uvec2, vec2};

    fn test_app(config: WindowConfig) -> App {
        App::new(Box::new(HeadlessBackend::new()), config.frame_rate(0)).unwrap()
    }

    struct CountingScreen {
        updates: u32,
        stop_after: u32,
    }

    impl Screen for CountingScreen {
        fn update(&mut self, app: &mut App) {
            self.updates += 1;
            if self.updates >= self.stop_after {
                app.stop();
            }
        }
    }

    #[test]
    fn test_run_presents_once_per_update() {
        let mut app = test_app(WindowConfig::default());
        let mut screen = CountingScreen {
            updates: 0,
            stop_after: 3,
        };

        app.run(&mut screen).unwrap();

        assert_eq!(screen.updates, 3);
        assert_eq!(app.ticks(), 3);

        let backend = app.backend_mut().downcast_mut::<HeadlessBackend>().unwrap();
        assert_eq!(backend.frames_presented(), 3);
    }

    #[test]
    fn test_scaled_window_blits_logical_surface() {
        let mut app = test_app(WindowConfig::default().size(600, 600).logical_size(300, 300));
        assert!(app.is_scaled());
        assert_eq!(app.scale(), uvec2(2, 2));
        assert_eq!(app.size(), uvec2(300, 300));
        assert_eq!(app.real_size(), uvec2(600, 600));

        let mut screen = CountingScreen {
            updates: 0,
            stop_after: 1,
        };
        app.run(&mut screen).unwrap();

        let backend = app.backend_mut().downcast_mut::<HeadlessBackend>().unwrap();
        let scaled_blits = backend
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::BlitScaled { .. }))
            .count();
        assert_eq!(scaled_blits, 1, "one stretch-blit per presented frame");
    }

    #[test]
    fn test_unscaled_when_logical_matches_real() {
        let app = test_app(WindowConfig::default().size(640, 480).logical_size(640, 480));
        assert!(!app.is_scaled());
        assert_eq!(app.scale(), uvec2(1, 1));
    }

    #[test]
    fn test_scaled_mouse_pos_divides_by_scale() {
        let mut app = test_app(WindowConfig::default().size(600, 600).logical_size(150, 300));
        assert_eq!(app.scale(), uvec2(4, 2));

        struct Noop;
        impl Screen for Noop {}
        let mut screen = Noop;

        app.dispatch(
            Event::MouseMove {
                position: vec2(101.0, 57.0),
            },
            &mut screen,
        );

        assert_eq!(app.mouse_position(), vec2(101.0, 57.0));
        assert_eq!(app.scaled_mouse_pos(), vec2(25.0, 28.0));
    }

    #[test]
    fn test_dispatch_updates_input_state_and_hooks() {
        struct Recorder {
            keys: Vec<KeyCode>,
            buttons: Vec<MouseButton>,
        }

        impl Screen for Recorder {
            fn key_down(&mut self, _app: &mut App, key: KeyCode) {
                self.keys.push(key);
            }

            fn mouse_button_down(&mut self, app: &mut App, button: MouseButton) {
                assert!(app.is_mouse_btn_down(button), "state updates before hook");
                self.buttons.push(button);
            }
        }

        let mut app = test_app(WindowConfig::default());
        let mut screen = Recorder {
            keys: Vec::new(),
            buttons: Vec::new(),
        };

        app.dispatch(Event::KeyDown { key: KeyCode::Up }, &mut screen);
        assert!(app.is_key_down(KeyCode::Up));

        app.dispatch(
            Event::MouseButtonDown {
                button: MouseButton::Left,
                position: vec2(10.0, 10.0),
            },
            &mut screen,
        );

        app.dispatch(Event::KeyUp { key: KeyCode::Up }, &mut screen);
        assert!(!app.is_key_down(KeyCode::Up));

        assert_eq!(screen.keys, vec![KeyCode::Up]);
        assert_eq!(screen.buttons, vec![MouseButton::Left]);
    }

    #[test]
    fn test_clip_texture_keeps_the_region_size() {
        let mut app = test_app(WindowConfig::default());
        let sheet = app.texture_from_pixels(uvec2(4, 4), &[0; 64]).unwrap();

        let region = Rect::new(vec2(2.0, 0.0), vec2(2.0, 4.0));
        let frame = app.clip_texture(&sheet, region).unwrap();

        assert_ne!(frame.id(), sheet.id());
        assert_eq!(frame.size(), vec2(2.0, 4.0));
    }

    #[test]
    fn test_default_update_clears_with_configured_color() {
        let color = Color::rgb_u8(20, 30, 40);
        let mut app = test_app(WindowConfig::default().clear_color(color));

        struct Bare;
        impl Screen for Bare {}

        // drive one frame manually through the trait's default body
        let mut screen = Bare;
        Screen::update(&mut screen, &mut app);

        let backend = app.backend_mut().downcast_mut::<HeadlessBackend>().unwrap();
        assert!(matches!(
            backend.commands()[0],
            DrawCmd::Clear { color: c, .. } if c == color
        ));
    }
}
