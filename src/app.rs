use crate::menu;
use crate::render::{self, PlotSurface};
use spectrum_core::{ContextMenu, EditorConfig, SpectrumEditor};
use web_sys as web;

/// Everything the event handlers share: the editor (sole owner of the
/// spectrum) and the DOM surfaces it is drawn on.
pub struct App {
    pub editor: SpectrumEditor,
    pub freq: PlotSurface,
    pub time: PlotSurface,
    pub menu: web::HtmlElement,
}

impl App {
    pub fn new(
        config: EditorConfig,
        freq_canvas: web::HtmlCanvasElement,
        time_canvas: web::HtmlCanvasElement,
        menu_el: web::HtmlElement,
    ) -> anyhow::Result<Self> {
        let editor = SpectrumEditor::new(config);
        let (fx, fy) = render::frequency_plot_axes(&editor);
        let (tx, ty) = render::time_plot_axes(&editor);
        let freq = PlotSurface::new(freq_canvas, fx, fy)?;
        let time = PlotSurface::new(time_canvas, tx, ty)?;
        menu::hide(&menu_el);
        Ok(Self {
            editor,
            freq,
            time,
            menu: menu_el,
        })
    }

    pub fn redraw(&self) {
        render::draw_frequency_plot(&self.freq, &self.editor);
        render::draw_time_plot(&self.time, &self.editor);
    }

    /// Recompute both plot rects after a resize, then repaint.
    pub fn relayout(&mut self) {
        self.freq.layout();
        self.time.layout();
        self.redraw();
    }

    /// Bring the menu element in line with the editor's menu state.
    pub fn sync_menu(&self) {
        if self.editor.context_menu() == ContextMenu::Hidden && !menu::is_hidden(&self.menu) {
            menu::hide(&self.menu);
        }
    }
}
