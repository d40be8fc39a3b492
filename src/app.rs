use crate::config::Config;
use crate::core::input::{self, KeyAction};
use crate::core::{FramePacer, SpecialKey};
use crate::error::Result;
use crate::pipeline::{Framebuffer, Painter, RenderStep};
use crate::renderers::{Event, WindowHost};
use log::{debug, info, trace, warn};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

const TITLE_INTERVAL: Duration = Duration::from_secs(1);

/// All state the render loop touches, owned in one place and handed to each
/// callback by `&mut`.
///
/// `frame` is only ever replaced together with `width`/`height`, so any tick
/// sees a buffer of exactly `width * height` pixels.
pub struct App<P: Painter> {
    title: String,
    width: usize,
    height: usize,
    frame: Framebuffer,
    render: RenderStep<P>,
    pacer: FramePacer,
    last_title: Instant,
    open: bool,
}

impl<P: Painter> App<P> {
    pub fn new(config: &Config, painter: P, now: Instant) -> Result<Self> {
        let frame = Framebuffer::new(config.width, config.height)?;
        Ok(Self {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            frame,
            render: RenderStep::new(painter),
            pacer: FramePacer::new(config.target_fps, now),
            last_title: now,
            open: true,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Route one host event to its callback.
    pub fn handle<H: WindowHost>(
        &mut self,
        event: Event,
        host: &mut H,
    ) -> Result<ControlFlow<()>> {
        match event {
            Event::Timer => return Ok(self.on_timer(host)),
            Event::Redraw => self.on_tick(Instant::now, host)?,
            Event::Resize { width, height } => self.on_resize(width, height, host)?,
            Event::Key { code, x, y } => self.on_key(code, x, y, host),
            Event::SpecialKey { key, x, y } => self.on_special_key(key, x, y),
            Event::CloseRequested => self.on_close_requested(host),
        }
        Ok(ControlFlow::Continue(()))
    }

    pub fn on_init<H: WindowHost>(&mut self, host: &mut H) {
        host.set_viewport(self.width, self.height);
        host.schedule_timer(self.pacer.budget());
    }

    pub fn on_resize<H: WindowHost>(
        &mut self,
        width: usize,
        height: usize,
        host: &mut H,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            debug!("Ignoring resize to {}x{}", width, height);
            return Ok(());
        }
        self.frame.allocate(width, height)?;
        self.width = width;
        self.height = height;
        host.set_viewport(width, height);
        debug!("Resized to {}x{}", width, height);
        Ok(())
    }

    /// Render and present one frame, then record how long it has been since the
    /// last one. `clock` is read only after the host has taken the frame, so the
    /// measured duration includes this frame's own render and present.
    pub fn on_tick<H, C>(&mut self, clock: C, host: &mut H) -> Result<()>
    where
        H: WindowHost,
        C: FnOnce() -> Instant,
    {
        if !self.open {
            trace!("Tick after close, skipping");
            return Ok(());
        }
        self.render.render(&mut self.frame, host)?;

        let now = clock();
        self.pacer.tick(now);
        trace!("FPS: {:6.2}", self.pacer.fps());

        if now.saturating_duration_since(self.last_title) >= TITLE_INTERVAL {
            self.last_title = now;
            debug!("{}", self.pacer);
            host.set_title(&format!("{} | {}", self.title, self.pacer));
        }
        Ok(())
    }

    /// Timer fired: ask for a redraw and re-arm with the pacer's delay, or stop
    /// once the window is gone.
    pub fn on_timer<H: WindowHost>(&mut self, host: &mut H) -> ControlFlow<()> {
        if !self.open {
            info!("Window closed, exiting");
            host.request_process_exit();
            return ControlFlow::Break(());
        }
        host.request_redraw();
        host.schedule_timer(self.pacer.delay());
        ControlFlow::Continue(())
    }

    pub fn on_key<H: WindowHost>(&mut self, code: u8, _x: i32, _y: i32, host: &mut H) {
        match input::dispatch_key(code) {
            KeyAction::Quit => self.close(host),
            KeyAction::Ignore => {}
            KeyAction::Unhandled => info!("Unhandled key: {}", code),
        }
    }

    pub fn on_special_key(&mut self, key: SpecialKey, _x: i32, _y: i32) {
        match input::dispatch_special_key(key) {
            KeyAction::Ignore => {}
            KeyAction::Quit | KeyAction::Unhandled => info!("Unhandled special key: {}", key),
        }
    }

    /// The window went away without us asking.
    pub fn on_close_requested<H: WindowHost>(&mut self, host: &mut H) {
        if self.open {
            warn!("Window closed externally");
        }
        self.close(host);
    }

    fn close<H: WindowHost>(&mut self, host: &mut H) {
        if !self.open {
            return;
        }
        info!("Destroying window: {}", self.title);
        host.request_window_close();
        self.open = false;
    }
}

/// Drive `app` from `host` until the app closes or the host runs dry.
pub fn run<P: Painter, H: WindowHost>(app: &mut App<P>, host: &mut H) -> Result<()> {
    info!("Assigning callback functions");
    app.on_init(host);

    info!("Starting application");
    while let Some(event) = host.next_event() {
        if app.handle(event, host)?.is_break() {
            break;
        }
    }
    Ok(())
}
