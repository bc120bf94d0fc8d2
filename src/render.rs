//! Canvas 2D rendering of the frequency and time plots.
//!
//! Each draw call repaints the whole canvas from the editor's current state.

use crate::constants::{
    AXIS_STROKE, BACKGROUND, BAR_FILL, BAR_FILL_RATIO, BAR_HIGHLIGHT_FILL, BAR_STROKE,
    GRID_STROKE, LABEL_FILL, LABEL_FONT_PX, PLOT_MARGINS, TITLE_FONT_PX, WAVE_STROKE,
};
use crate::dom;
use spectrum_core::{
    frequency_axis, AxisRange, ContextMenu, PlotGeometry, PlotRect, SpectrumEditor,
    AMPLITUDE_TICK, FREQUENCY_TICK_HZ, TIME_TICK_SEC, WAVEFORM_TICK,
};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A canvas with its 2D context and the geometry of its plot area.
pub struct PlotSurface {
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pub geometry: PlotGeometry,
    scale: f32,
}

impl PlotSurface {
    pub fn new(canvas: web::HtmlCanvasElement, x: AxisRange, y: AxisRange) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let mut surface = Self {
            canvas,
            ctx,
            geometry: PlotGeometry::new(
                PlotRect {
                    left: 0.0,
                    top: 0.0,
                    right: 0.0,
                    bottom: 0.0,
                },
                x,
                y,
            ),
            scale: 1.0,
        };
        surface.layout();
        Ok(surface)
    }

    /// Resize the backing store and recompute the plot rect.
    pub fn layout(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        self.scale = dom::device_pixel_ratio() as f32;
        self.geometry.rect = PlotRect::inset(
            self.canvas.width() as f32,
            self.canvas.height() as f32,
            PLOT_MARGINS.scaled(self.scale),
        );
    }

    fn font(&self, px: f32) -> String {
        format!("{:.0}px sans-serif", px * self.scale)
    }
}

/// Geometry for the frequency plot: 0 Hz at the left edge, the last bin at the right.
pub fn frequency_plot_axes(editor: &SpectrumEditor) -> (AxisRange, AxisRange) {
    (frequency_axis(editor.bins()), editor.config().amplitude_axis)
}

pub fn time_plot_axes(editor: &SpectrumEditor) -> (AxisRange, AxisRange) {
    let cfg = editor.config();
    (AxisRange::new(0.0, cfg.window_sec), cfg.waveform_axis)
}

struct AxisLabels<'a> {
    x_ticks: Vec<f32>,
    y_ticks: Vec<f32>,
    x_fmt: &'a dyn Fn(f32) -> String,
    y_fmt: &'a dyn Fn(f32) -> String,
    x_title: &'a str,
    y_title: &'a str,
}

fn draw_frame(surface: &PlotSurface, labels: &AxisLabels) {
    let ctx = &surface.ctx;
    let g = &surface.geometry;
    let r = g.rect;
    let (cw, ch) = (surface.canvas.width() as f64, surface.canvas.height() as f64);

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, cw, ch);
    if r.is_degenerate() {
        return;
    }

    // Grid
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(surface.scale as f64);
    ctx.begin_path();
    for &x in &labels.x_ticks {
        let px = g.x_to_px(x) as f64;
        ctx.move_to(px, r.top as f64);
        ctx.line_to(px, r.bottom as f64);
    }
    for &y in &labels.y_ticks {
        let py = g.y_to_px(y) as f64;
        ctx.move_to(r.left as f64, py);
        ctx.line_to(r.right as f64, py);
    }
    ctx.stroke();

    // Axes
    ctx.set_stroke_style_str(AXIS_STROKE);
    ctx.begin_path();
    ctx.move_to(r.left as f64, r.top as f64);
    ctx.line_to(r.left as f64, r.bottom as f64);
    ctx.line_to(r.right as f64, r.bottom as f64);
    ctx.stroke();

    // Tick labels
    let pad = 6.0 * surface.scale as f64;
    ctx.set_fill_style_str(LABEL_FILL);
    ctx.set_font(&surface.font(LABEL_FONT_PX));
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for &x in &labels.x_ticks {
        let _ = ctx.fill_text(&(labels.x_fmt)(x), g.x_to_px(x) as f64, r.bottom as f64 + pad);
    }
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for &y in &labels.y_ticks {
        let _ = ctx.fill_text(&(labels.y_fmt)(y), r.left as f64 - pad, g.y_to_px(y) as f64);
    }

    // Axis titles
    ctx.set_font(&surface.font(TITLE_FONT_PX));
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    let _ = ctx.fill_text(
        labels.x_title,
        ((r.left + r.right) * 0.5) as f64,
        ch - pad * 0.5,
    );
    ctx.save();
    let _ = ctx.translate(pad * 0.5, ((r.top + r.bottom) * 0.5) as f64);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    ctx.set_text_baseline("top");
    let _ = ctx.fill_text(labels.y_title, 0.0, 0.0);
    ctx.restore();
    ctx.set_text_align("start");
    ctx.set_text_baseline("alphabetic");
}

pub fn draw_frequency_plot(surface: &PlotSurface, editor: &SpectrumEditor) {
    let g = &surface.geometry;
    let labels = AxisLabels {
        x_ticks: g.x.ticks(FREQUENCY_TICK_HZ),
        y_ticks: g.y.ticks(AMPLITUDE_TICK),
        x_fmt: &|v: f32| format!("{:.0}", v),
        y_fmt: &|v: f32| format!("{:.1}", v),
        x_title: "Frequency (Hz)",
        y_title: "Amplitude",
    };
    draw_frame(surface, &labels);
    if g.rect.is_degenerate() {
        return;
    }

    let ctx = &surface.ctx;
    let bins = editor.bins();
    let highlighted = match editor.context_menu() {
        ContextMenu::Open { index } => Some(index),
        ContextMenu::Hidden => None,
    };
    let slot_px = g.rect.width() / bins.last_index().max(1) as f32;
    let bar_w = (slot_px * BAR_FILL_RATIO) as f64;
    let base_y = g.y_to_px(0.0) as f64;

    ctx.set_stroke_style_str(BAR_STROKE);
    ctx.set_line_width(surface.scale as f64);
    for (i, (hz, amplitude)) in editor.spectrum().iter(bins).enumerate() {
        if amplitude <= 0.0 {
            continue;
        }
        let cx = g.x_to_px(hz) as f64;
        let top = g.y_to_px(amplitude) as f64;
        let fill = if highlighted == Some(i) {
            BAR_HIGHLIGHT_FILL
        } else {
            BAR_FILL
        };
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(cx - bar_w * 0.5, top, bar_w, base_y - top);
        ctx.stroke_rect(cx - bar_w * 0.5, top, bar_w, base_y - top);
    }
}

pub fn draw_time_plot(surface: &PlotSurface, editor: &SpectrumEditor) {
    let g = &surface.geometry;
    let labels = AxisLabels {
        x_ticks: g.x.ticks(TIME_TICK_SEC),
        y_ticks: g.y.ticks(WAVEFORM_TICK),
        x_fmt: &|v: f32| format!("{:.2}", v),
        y_fmt: &|v: f32| format!("{:.0}", v),
        x_title: "Time (seconds)",
        y_title: "Amplitude",
    };
    draw_frame(surface, &labels);
    let r = g.rect;
    if r.is_degenerate() {
        return;
    }

    let ctx = &surface.ctx;
    ctx.save();
    ctx.begin_path();
    ctx.rect(r.left as f64, r.top as f64, r.width() as f64, r.height() as f64);
    ctx.clip();

    ctx.set_stroke_style_str(WAVE_STROKE);
    ctx.set_line_width(2.0 * surface.scale as f64);
    ctx.begin_path();
    for (i, s) in editor.waveform().iter().enumerate() {
        let x = g.x_to_px(s.time) as f64;
        let y = g.y_to_px(s.amplitude) as f64;
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();
    ctx.restore();
}
