//! Block-flow layout over the document's direct children.
//!
//! Constants mirror a browser's defaults for a bare page: 8px body margin,
//! 16px base font size, 1.5 line height. Blocks stack top to bottom in
//! child order; child order is paint order.

use artboard_dom::Node;
use artboard_protocol::Rect;

pub const PAGE_MARGIN: f64 = 8.0;
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const LINE_HEIGHT_FACTOR: f64 = 1.5;

/// Vertical extent one block contributes and the rect it paints, given the
/// running flow offset `y` and the content width of the page.
pub fn place_block(node: &Node, y: f64, content_width: f64) -> (Rect, f64) {
    let width = node
        .style("width")
        .and_then(parse_px)
        .unwrap_or(content_width);

    let font_size = node
        .style("fontSize")
        .and_then(parse_px)
        .unwrap_or(DEFAULT_FONT_SIZE);

    let (pad_v, _pad_h) = node
        .style("padding")
        .map(parse_shorthand)
        .unwrap_or((0.0, 0.0));

    let (margin_v, _margin_h) = node
        .style("margin")
        .map(parse_shorthand)
        .unwrap_or((0.0, 0.0));

    let intrinsic = node
        .style("height")
        .and_then(parse_px)
        .unwrap_or(font_size * LINE_HEIGHT_FACTOR);

    let height = intrinsic + 2.0 * pad_v;
    let rect = Rect::new(PAGE_MARGIN, y + margin_v, width, height);
    let advance = height + 2.0 * margin_v;
    (rect, advance)
}

/// `"28px"` → `28.0`; bare numbers are accepted too. Anything else is `None`
/// and the caller falls back to its default — style values are opaque
/// strings and never validated.
fn parse_px(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}

/// The 1-2 component px shorthand: `"12px"` is both axes, `"12px 16px"` is
/// vertical then horizontal. Unparseable components read as 0.
fn parse_shorthand(value: &str) -> (f64, f64) {
    let mut parts = value.split_whitespace().map(|p| parse_px(p).unwrap_or(0.0));
    let vertical = parts.next().unwrap_or(0.0);
    let horizontal = parts.next().unwrap_or(vertical);
    (vertical, horizontal)
}
