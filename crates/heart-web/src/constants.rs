// Page wiring and frontend tuning constants.

// Element id of the drawing canvas
pub const CANVAS_ID: &str = "heartCanvas";

// Query parameter selecting the preset, e.g. `?variant=classic`
pub const VARIANT_QUERY_PARAM: &str = "variant";

// Fallback surface size when the window reports nothing usable
pub const FALLBACK_WIDTH: f64 = 800.0;
pub const FALLBACK_HEIGHT: f64 = 600.0;

// Frame-rate sampling window for debug logs (seconds)
pub const FPS_SAMPLE_SECS: f64 = 5.0;
