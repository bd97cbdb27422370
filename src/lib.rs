//! Drunken-bishop identicons
//!
//! Turns any string (a "slug") into a deterministic SVG identicon. The slug
//! is hashed with SHA-256, the digest is read as a walk of compass steps, and
//! a walker replays that walk over a small square board counting how often it
//! lands on each cell. The counts are then normalized and tinted with a color
//! derived from a second hash, and every cell becomes one rectangle of the
//! output image.
//!
//! # Features
//!
//! - **server** (default): a tiny JSON-over-HTTP API and the `bishopicon`
//!   binary
//!
//! # Example
//!
//! ```
//! use bishopicon::{Identicon, IdenticonConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IdenticonConfig {
//!     board_size: 9,
//!     ..Default::default()
//! };
//!
//! let icon = Identicon::new("octocat", &config)?;
//! assert_eq!(icon.board().size(), 9);
//! let svg = icon.image().as_markup();
//! assert!(svg.starts_with("<svg"));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod board;
pub mod direction;
pub mod rendering;

#[cfg(feature = "server")]
pub mod server;

pub use board::Board;
pub use direction::{Direction, DirectionSequence};
pub use rendering::paint::Rgb;
pub use rendering::VectorImage;

/// Parameters of a single identicon
///
/// The defaults match the public HTTP routes: a 7×7 board walked three times
/// and drawn on a 300×300 canvas.
///
/// # Examples
///
/// ```
/// let cfg = bishopicon::IdenticonConfig::default();
/// assert_eq!((cfg.board_size, cfg.iterations, cfg.size), (7, 3, 300));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdenticonConfig {
    /// Number of cells along each side of the board
    pub board_size: u32,
    /// How many times the direction sequence is replayed
    pub iterations: u32,
    /// Width and height of the output canvas
    pub size: u32,
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            board_size: 7,
            iterations: 3,
            size: 300,
        }
    }
}

impl IdenticonConfig {
    /// Reject dimensions the board or the canvas cannot address.
    ///
    /// Zero iterations is allowed and yields a flat, unvisited board.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(Error::invalid_dimension("board_size", self.board_size));
        }
        if self.size == 0 {
            return Err(Error::invalid_dimension("size", self.size));
        }
        Ok(())
    }
}

/// A computed identicon together with the intermediate stages that produced
/// it.
#[derive(Debug, Clone)]
pub struct Identicon {
    directions: DirectionSequence,
    board: Board,
    tint: Rgb,
    image: VectorImage,
}

impl Identicon {
    pub fn new(slug: &str, config: &IdenticonConfig) -> Result<Self> {
        config.validate()?;
        let directions = DirectionSequence::from_slug(slug);
        let board = Board::walk(config.board_size, &directions, config.iterations)?;
        let tint = Rgb::from_directions(&directions);
        let image = VectorImage::render(&board, tint, config.size)?;
        log::debug!(
            "identicon slug={:?} board={} iterations={} size={} tint={:?}",
            slug,
            config.board_size,
            config.iterations,
            config.size,
            tint
        );
        Ok(Self {
            directions,
            board,
            tint,
            image,
        })
    }

    pub fn directions(&self) -> &DirectionSequence {
        &self.directions
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tint(&self) -> Rgb {
        self.tint
    }

    pub fn image(&self) -> &VectorImage {
        &self.image
    }

    pub fn into_image(self) -> VectorImage {
        self.image
    }
}

/// Compute the identicon image for `slug`.
///
/// Fails with [`Error::InvalidDimension`] when `board_size` or `size` is zero.
///
/// No upper bounds are enforced here: the board allocates `board_size²`
/// counters and the walk takes `iterations × 64` steps, so callers taking
/// untrusted input should cap both first (the HTTP routes do). Visit counters
/// saturate at `u32::MAX`.
pub fn compute_identicon(
    slug: &str,
    board_size: u32,
    iterations: u32,
    size: u32,
) -> Result<VectorImage> {
    let config = IdenticonConfig {
        board_size,
        iterations,
        size,
    };
    Identicon::new(slug, &config).map(Identicon::into_image)
}
