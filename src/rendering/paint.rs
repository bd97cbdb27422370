/// Intensity normalization, tinting and the paint command set

use crate::board::Board;
use crate::direction::DirectionSequence;
use crate::rendering::layout::{layout_cells, Rect};
use sha2::{Digest, Sha256};

/// Opaque alpha for every painted cell.
pub const OPAQUE: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Tint derived from the second hash: SHA-256 of the direction string,
    /// first three digest bytes as red, green, blue.
    pub fn from_directions(directions: &DirectionSequence) -> Self {
        let digest = Sha256::digest(directions.to_string().as_bytes());
        Self {
            r: digest[0],
            g: digest[1],
            b: digest[2],
        }
    }

    /// Scale each channel by `intensity / 255`, rounding half away from zero.
    pub fn scaled(self, intensity: f64) -> (u8, u8, u8, u8) {
        let channel = |weight: u8| (intensity * f64::from(weight) / 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b), OPAQUE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect { rect: Rect, rgba: (u8, u8, u8, u8) },
}

/// Rescale every counter into `[0, 255]`.
///
/// A board whose counters are all equal (zero iterations, or a one-cell
/// board) maps to all zeros instead of dividing by zero.
pub fn normalize(board: &Board) -> Vec<f64> {
    let (min, max) = board.bounds();
    if max == min {
        return vec![0.0; board.cells().len()];
    }
    let range = f64::from(max - min);
    board
        .cells()
        .iter()
        .map(|&count| f64::from(count - min) / range * 255.0)
        .collect()
}

/// Turn a walked board into one solid rectangle per cell on a
/// `canvas × canvas` surface.
pub fn paint_board(board: &Board, tint: Rgb, canvas: u32) -> Vec<PaintCommand> {
    let intensities = normalize(board);
    layout_cells(board.size(), canvas)
        .into_iter()
        .zip(intensities)
        .map(|(rect, intensity)| PaintCommand::SolidRect {
            rect,
            rgba: tint.scaled(intensity),
        })
        .collect()
}
