// crates/engine_core/src/gui.rs
use egui::{Align2, Color32, Context, FontId, LayerId, Pos2};
use engine_shared::{Rgb, TextAnchor, TextItem};
use winit::{event::WindowEvent, window::Window};

use crate::renderer::viewport::FieldViewport;

/// Tessellated egui output for one frame, ready for the renderer.
pub struct GuiFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

pub struct GuiSystem {
    pub ctx: Context,
    // State is an Option because it requires the Window to be created first
    state: Option<egui_winit::State>,
    pub show_inspector: bool,
}

impl GuiSystem {
    pub fn new(show_inspector: bool) -> Self {
        Self {
            ctx: Context::default(),
            state: None,
            show_inspector,
        }
    }

    /// Initialize the integration once the window exists
    pub fn init(&mut self, window: &Window) {
        self.state = Some(egui_winit::State::new(
            self.ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
        ));
    }

    /// Forward window events to egui. Returns true if egui consumed it.
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        match &mut self.state {
            Some(state) => state.on_window_event(window, event).consumed,
            None => false,
        }
    }

    pub fn wants_keyboard_input(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }

    pub fn wants_pointer_input(&self) -> bool {
        self.ctx.wants_pointer_input()
    }

    pub fn toggle_inspector(&mut self) {
        self.show_inspector = !self.show_inspector;
    }

    /// Prepare the frame, run the UI closure, and output draw data.
    /// `None` until [`GuiSystem::init`] has run.
    pub fn draw(
        &mut self,
        window: &Window,
        run_ui: impl FnOnce(&Context, &mut bool),
    ) -> Option<GuiFrame> {
        let state = self.state.as_mut()?;

        let raw_input = state.take_egui_input(window);
        self.ctx.begin_frame(raw_input);

        run_ui(&self.ctx, &mut self.show_inspector);

        let output = self.ctx.end_frame();
        state.handle_platform_output(window, output.platform_output);

        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        Some(GuiFrame {
            primitives,
            textures: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        })
    }
}

/// Screen position (egui points), font size and alignment for one text item.
pub(crate) fn text_placement(
    item: &TextItem,
    viewport: &FieldViewport,
    pixels_per_point: f32,
) -> (Pos2, f32, Align2) {
    let ppp = pixels_per_point.max(f32::EPSILON);
    let (sx, sy) = viewport.to_screen(item.x, item.y);
    let align = match item.anchor {
        TextAnchor::TopLeft => Align2::LEFT_TOP,
        TextAnchor::TopCenter => Align2::CENTER_TOP,
    };
    let size = item.size.points() * viewport.scale / ppp;
    (Pos2::new(sx / ppp, sy / ppp), size, align)
}

fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// HUD, overlay and menu texts sit on egui's background layer, beneath any
/// window such as the inspector.
fn text_layer() -> LayerId {
    LayerId::background()
}

pub(crate) fn paint_texts(ctx: &Context, texts: &[TextItem], viewport: &FieldViewport) {
    if viewport.is_empty() {
        return;
    }
    let painter = ctx.layer_painter(text_layer());
    let ppp = ctx.pixels_per_point();
    for item in texts {
        let (pos, size, align) = text_placement(item, viewport, ppp);
        painter.text(pos, align, &item.text, FontId::proportional(size), color32(item.color));
    }
}
