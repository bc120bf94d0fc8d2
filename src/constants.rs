use spectrum_core::Margins;

// Element ids expected in index.html
pub const FREQ_CANVAS_ID: &str = "freq-canvas";
pub const TIME_CANVAS_ID: &str = "time-canvas";
pub const CONTEXT_MENU_ID: &str = "context-menu";
pub const DELETE_ITEM_ID: &str = "delete-freq";

// Optional config overrides read from the time canvas
pub const SAMPLES_ATTR: &str = "data-samples";
pub const WINDOW_ATTR: &str = "data-window";

// Plot margins in CSS pixels; scaled by devicePixelRatio at layout time
pub const PLOT_MARGINS: Margins = Margins {
    left: 56.0,
    top: 12.0,
    right: 24.0,
    bottom: 44.0,
};

// Bar width as a fraction of one bin slot
pub const BAR_FILL_RATIO: f32 = 0.6;

// Palette
pub const BACKGROUND: &str = "#ffffff";
pub const GRID_STROKE: &str = "#e3e3e3";
pub const AXIS_STROKE: &str = "#666666";
pub const LABEL_FILL: &str = "#444444";
pub const BAR_FILL: &str = "rgba(75, 192, 192, 0.5)";
pub const BAR_STROKE: &str = "rgba(75, 192, 192, 1)";
pub const BAR_HIGHLIGHT_FILL: &str = "rgba(230, 90, 90, 0.55)";
pub const WAVE_STROKE: &str = "rgba(153, 102, 255, 1)";

// Text, in CSS pixels
pub const LABEL_FONT_PX: f32 = 11.0;
pub const TITLE_FONT_PX: f32 = 12.0;
