//! Rendering of a walked board into SVG markup

pub mod layout;
pub mod paint;
pub mod svg;

use crate::board::Board;
use crate::{Error, Result};
use base64::Engine as Base64Engine;
use paint::{PaintCommand, Rgb};

/// A rendered identicon: a square canvas covered by one solid rectangle per
/// board cell.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorImage {
    pub size: u32,
    pub commands: Vec<PaintCommand>,
}

impl VectorImage {
    /// Paint `board` with `tint` onto a `size × size` canvas.
    pub fn render(board: &Board, tint: Rgb, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_dimension("size", size));
        }
        Ok(Self {
            size,
            commands: paint::paint_board(board, tint, size),
        })
    }

    /// SVG markup of the image.
    pub fn as_markup(&self) -> String {
        svg::write_svg(self.size, self.size, &self.commands)
    }

    /// Standard (padded) base64 of the UTF-8 markup.
    pub fn as_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.as_markup())
    }
}
