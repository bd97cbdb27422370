/// SVG serialization of paint commands

use crate::rendering::paint::PaintCommand;
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize `commands` into a single `<svg>` root of `width × height`.
///
/// Numbers use the shortest round-trip `f64` formatting so the output is
/// byte-stable across runs.
pub fn write_svg(width: u32, height: u32, commands: &[PaintCommand]) -> String {
    // ~90 bytes per rect keeps reallocations rare for typical boards
    let mut svg = String::with_capacity(128 + commands.len() * 96);
    // Writing into a String cannot fail
    let _ = write!(
        svg,
        r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        SVG_NS, width, height, width, height
    );
    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect { rect, rgba } => {
                let (r, g, b, a) = rgba;
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="rgba({},{},{},{})"/>"#,
                    rect.x, rect.y, rect.width, rect.height, r, g, b, a
                );
            }
        }
    }
    svg.push_str("</svg>");
    svg
}
