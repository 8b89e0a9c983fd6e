/// Application-wide configuration for the wheel front end.
///
/// Item source endpoint queried on load and refresh.
pub const API_ENDPOINT: &str = "/api/items";
/// Category requested when neither the query string nor the select supply one.
pub const DEFAULT_CATEGORY: &str = "Sides";
/// Status line shown while the wheel is idle.
pub const DEFAULT_STATUS_TEXT: &str = "Ready";
/// Status line shown while a spin is running.
pub const SPINNING_STATUS_TEXT: &str = "Spinning...";
/// Status line shown when the item source request fails.
pub const LOAD_FAILED_TEXT: &str = "Failed to load items";
/// Status line shown when the category has no items.
pub const NO_ITEMS_MESSAGE: &str = "No items found for this category.";
/// Spin button captions before and after the first spin of a load.
pub const SPIN_LABEL: &str = "🎲 Spin";
pub const SPIN_AGAIN_LABEL: &str = "🎲 Spin Again";
/// The canvas is kept square, at most this many pixels on a side.
pub const MAX_CANVAS_SIZE: f64 = 360.0;
/// Horizontal padding kept between the canvas and its container.
pub const CANVAS_PADDING: f64 = 40.0;
