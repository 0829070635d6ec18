//! Type definitions for the transformation pipeline

use serde::{Deserialize, Serialize};

/// Configuration driving the substitution pipeline.
///
/// The color is required; dimensions and viewBox fall back to the 20x20 icon
/// defaults when omitted (both in [`TransformConfig::new`] and when
/// deserializing from JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Target stroke/fill color, hex-like form e.g. "#RRGGBB". Not validated.
    pub color: String,
    /// Width of the svg element in pixels. Default: 20
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height of the svg element in pixels. Default: 20
    #[serde(default = "default_height")]
    pub height: u32,
    /// viewBox attribute value, "minX minY width height". Default: "0 0 20 20"
    #[serde(default = "default_view_box", rename = "viewBox")]
    pub view_box: String,
}

fn default_width() -> u32 {
    20
}

fn default_height() -> u32 {
    20
}

fn default_view_box() -> String {
    "0 0 20 20".to_string()
}

impl TransformConfig {
    /// Create a config with the given color and default dimensions.
    ///
    /// Use struct update syntax to override individual fields:
    /// ```rust
    /// use svg2html::TransformConfig;
    ///
    /// let config = TransformConfig {
    ///     width: 24,
    ///     height: 24,
    ///     ..TransformConfig::new("#FF0000")
    /// };
    /// assert_eq!(config.view_box, "0 0 20 20");
    /// ```
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
            width: default_width(),
            height: default_height(),
            view_box: default_view_box(),
        }
    }
}
