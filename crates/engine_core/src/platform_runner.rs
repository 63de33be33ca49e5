// crates/engine_core/src/platform_runner.rs

use std::sync::Arc;
use std::time::Instant;

use engine_shared::{DrawList, Flow, GameLogic, TickInput};
use tracing::{debug, info, warn};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

use crate::app::App;
use crate::engine_loop::FramePacer;
use crate::error::HostError;
use crate::input::{EngineAction, InputPoller};
use crate::inspector::{self, HostStats};
use crate::renderer::Renderer;
use crate::{gui, logging};

/// OS and GPU handles, built once in [`PlatformRunner::start`] and dropped
/// when the event loop returns. The game never sees any of it.
pub struct HostContext {
    pub window: Arc<Window>,
    renderer: Renderer,
}

/// Per-frame scratch carried between ticks and redraws.
#[derive(Default)]
struct FrameState {
    draw_list: DrawList,
    stats: HostStats,
}

/// Owns App and runs the platform (winit) event loop.
/// This isolates OS interaction from the game.
pub struct PlatformRunner<G: GameLogic> {
    app: App<G>,
}

impl<G: GameLogic> PlatformRunner<G> {
    pub fn new(app: App<G>) -> Self {
        Self { app }
    }

    pub fn start(mut self) -> Result<(), HostError> {
        let event_loop = EventLoop::new()?;
        let field = self.app.game.field_size();
        let (width, height) = self.app.config.window_size(field);
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(&self.app.config.title)
                .with_inner_size(LogicalSize::new(width, height))
                .build(&event_loop)?,
        );

        // GUI + renderer initialization
        self.app.gui.init(&window);
        let renderer = pollster::block_on(Renderer::new(Arc::clone(&window)))?;
        let mut host = HostContext { window, renderer };

        let mut pacer = FramePacer::new(self.app.config.tick_rate, Instant::now());
        let mut poller = InputPoller::new();
        let mut frame = FrameState::default();

        self.app.game.on_load();

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => {
                self.handle_window_event(&mut host, &mut poller, &mut frame, event, elwt);
            }

            Event::AboutToWait => {
                if self.tick(&host, &mut poller, &mut pacer, &mut frame) == Flow::Exit {
                    info!(ticks = pacer.ticks(), "game requested exit");
                    elwt.exit();
                    return;
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(pacer.next_deadline()));
            }

            Event::LoopExiting => self.app.game.on_unload(),

            _ => {}
        })?;

        Ok(())
    }

    fn handle_window_event(
        &mut self,
        host: &mut HostContext,
        poller: &mut InputPoller,
        frame: &mut FrameState,
        event: WindowEvent,
        elwt: &EventLoopWindowTarget<()>,
    ) {
        // Give GUI first shot at all window events (for focus, etc.).
        let consumed = self.app.gui.handle_event(&host.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                info!("window close requested");
                poller.request_quit();
            }

            // Low-level input: delegate to InputPoller unless GUI owns the device.
            WindowEvent::KeyboardInput { .. } => {
                if !consumed && !self.app.gui.wants_keyboard_input() {
                    poller.handle_event(&event);
                }
            }
            WindowEvent::MouseInput { .. } => {
                if !consumed && !self.app.gui.wants_pointer_input() {
                    poller.handle_event(&event);
                }
            }
            WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorLeft { .. }
            | WindowEvent::Focused(_) => {
                poller.handle_event(&event);
            }

            WindowEvent::Resized(size) => {
                debug!(width = size.width, height = size.height, "resized");
                host.renderer.resize(size);
            }

            WindowEvent::RedrawRequested => self.redraw(host, frame, elwt),

            _ => {}
        }
    }

    /// Run at most one tick, if one is due.
    fn tick(
        &mut self,
        host: &HostContext,
        poller: &mut InputPoller,
        pacer: &mut FramePacer,
        frame: &mut FrameState,
    ) -> Flow {
        let now = Instant::now();
        if !pacer.poll(now) {
            return Flow::Continue;
        }

        let viewport = host.renderer.viewport(self.app.game.field_size());
        let polled = poller.drain(&self.app.input_map, |x, y| viewport.to_field(x, y));

        for action in &polled.engine {
            match action {
                EngineAction::ToggleInspector => {
                    self.app.gui.toggle_inspector();
                    debug!(open = self.app.gui.show_inspector, "inspector toggled");
                }
            }
        }

        let input = TickInput {
            tick: pacer.ticks(),
            elapsed_ms: pacer.elapsed_ms(now),
            intents: polled.intents,
            clicks: polled.clicks,
        };
        let size = host.renderer.size();
        frame.stats = HostStats {
            ticks: input.tick,
            elapsed_ms: input.elapsed_ms,
            surface: (size.width, size.height),
            field_scale: viewport.scale,
            intent_bits: input.intents.bits(),
        };

        let flow = self.app.game.update(&input);
        if flow == Flow::Continue {
            host.window.request_redraw();
        }
        flow
    }

    fn redraw(
        &mut self,
        host: &mut HostContext,
        frame: &mut FrameState,
        elwt: &EventLoopWindowTarget<()>,
    ) {
        let field = self.app.game.field_size();
        self.app.game.draw(frame.stats.elapsed_ms, &mut frame.draw_list);

        let viewport = host.renderer.viewport(field);
        let rows = if self.app.gui.show_inspector {
            self.app.game.inspect()
        } else {
            Vec::new()
        };
        let stats = frame.stats;
        let texts = &frame.draw_list.texts;

        let gui_frame = self.app.gui.draw(&host.window, |ctx, inspector_open| {
            gui::paint_texts(ctx, texts, &viewport);
            if *inspector_open {
                inspector::show(ctx, &stats, &rows, inspector_open);
            }
        });

        match host.renderer.render(&frame.draw_list, field, gui_frame.as_ref()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface lost or outdated, reconfiguring");
                let size = host.window.inner_size();
                if size == host.renderer.size() {
                    host.renderer.reconfigure();
                } else {
                    host.renderer.resize(size);
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                logging::fatal("renderer out of GPU memory, exiting");
                elwt.exit();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("surface timeout, skipping this frame");
            }
        }
    }
}
