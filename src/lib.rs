//! svg2html - Convert SVG markup into HTML-embeddable icon fragments
//!
//! This library rewrites raw SVG source into cleaned, recolored markup ready
//! to be inlined into an HTML document. The input is processed line by line
//! through four ordered substitution stages:
//!
//! 1. Namespace-prefix stripping (`svg:rect` → `rect`)
//! 2. `width`/`height`/`viewBox` normalization on the svg tag
//! 3. `stroke="#..."` recoloring
//! 4. `fill="#..."` recoloring
//!
//! There is no DOM parsing and no validation; lines the stages do not match
//! pass through unchanged.
//!
//! # Example
//!
//! ```rust
//! use svg2html::{recolor, transform, TransformConfig};
//!
//! let config = TransformConfig::new("#FF0000");
//! let html = transform("<path stroke=\"#000000\"/>", &config);
//! assert_eq!(html, "<path stroke=\"#FF0000\"/>");
//!
//! // Same thing with default 20x20 dimensions:
//! let html = recolor("<path stroke=\"#000000\"/>", "#FF0000");
//! assert_eq!(html, "<path stroke=\"#FF0000\"/>");
//! ```

pub mod document;
pub mod transform;
pub mod types;

pub use document::{load_config, svg_file_to_html, transform_file, DocumentError};
pub use transform::transform;
pub use types::*;

/// Recolor SVG source using the default 20x20 icon dimensions.
///
/// Shorthand for [`transform`] with `TransformConfig::new(color)`.
///
/// # Example
/// ```rust
/// let html = svg2html::recolor("<path fill=\"#000\"/>", "#00FF00");
/// assert_eq!(html, "<path fill=\"#00FF00\"/>");
/// ```
pub fn recolor(svg_text: &str, color: &str) -> String {
    transform(svg_text, &TransformConfig::new(color))
}
