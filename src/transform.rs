//! The line-by-line substitution pipeline.
//!
//! Pure string rewriting, no DOM manipulation. Each line passes through four
//! ordered stages: namespace-prefix stripping, svg-tag attribute
//! normalization, stroke recoloring, fill recoloring. A stage whose pattern
//! does not match leaves the line untouched, so the pipeline never fails.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use crate::types::TransformConfig;

lazy_static! {
    static ref RE_WIDTH: Regex = Regex::new(r#"width="\d+""#).unwrap();
    static ref RE_HEIGHT: Regex = Regex::new(r#"height="\d+""#).unwrap();
    static ref RE_VIEW_BOX: Regex =
        Regex::new(r#"viewBox="[-\d\.]+ [-\d\.]+ [\d\.]+ [\d\.]+""#).unwrap();
    static ref RE_STROKE: Regex = Regex::new(r##"stroke="#\w+""##).unwrap();
    static ref RE_FILL: Regex = Regex::new(r##"fill="#\w+""##).unwrap();
}

/// Transform SVG source into an HTML-embeddable fragment.
///
/// Splits the input on `\n` and rewrites each line independently; the output
/// always has the same number of lines as the input. Attributes that span
/// physical lines are not matched by the attribute stages.
///
/// # Example
/// ```rust
/// use svg2html::{transform, TransformConfig};
///
/// let config = TransformConfig::new("#FF0000");
/// let html = transform("<svg:circle fill=\"#000000\"/>", &config);
/// assert_eq!(html, "<circle fill=\"#FF0000\"/>");
/// ```
pub fn transform(svg_text: &str, config: &TransformConfig) -> String {
    svg_text
        .split('\n')
        .map(|line| transform_line(line, config))
        .collect::<Vec<_>>()
        .join("\n")
}

fn transform_line(line: &str, config: &TransformConfig) -> String {
    let line = strip_namespace_prefix(line);
    let line = normalize_svg_tag(&line, config);
    let line = recolor_stroke(&line, &config.color);
    recolor_fill(&line, &config.color)
}

/// Remove the `svg:`/`:svg` tag qualification left by namespaced serializers.
///
/// `:svg` is stripped before `svg:` so a qualified root like `<svg:svg>`
/// collapses to `<svg>` rather than losing the tag name.
fn strip_namespace_prefix(line: &str) -> String {
    line.replace(":svg", "").replace("svg:", "")
}

/// Rewrite `width`, `height` and `viewBox` attributes to the configured
/// dimensions. Decimal widths/heights (`width="24.5"`) are left alone; the
/// viewBox pattern accepts signed/decimal origins and decimal extents.
fn normalize_svg_tag(line: &str, config: &TransformConfig) -> String {
    let width = format!(r#"width="{}""#, config.width);
    let height = format!(r#"height="{}""#, config.height);
    let view_box = format!(r#"viewBox="{}""#, config.view_box);

    let line = RE_WIDTH.replace_all(line, NoExpand(&width));
    let line = RE_HEIGHT.replace_all(&line, NoExpand(&height));
    RE_VIEW_BOX
        .replace_all(&line, NoExpand(&view_box))
        .into_owned()
}

/// Replace `stroke="#..."` values with the configured color.
///
/// Only `#`-prefixed values match; `stroke="none"` and `stroke="currentColor"`
/// pass through. The replacement is inserted literally (NoExpand), so a
/// configured color containing `$` cannot trigger capture expansion.
fn recolor_stroke(line: &str, color: &str) -> String {
    let replacement = format!(r#"stroke="{}""#, color);
    RE_STROKE
        .replace_all(line, NoExpand(&replacement))
        .into_owned()
}

/// Replace `fill="#..."` values with the configured color. Same matching
/// rules as [`recolor_stroke`].
fn recolor_fill(line: &str, color: &str) -> String {
    let replacement = format!(r#"fill="{}""#, color);
    RE_FILL
        .replace_all(line, NoExpand(&replacement))
        .into_owned()
}
