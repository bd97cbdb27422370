/// Cell geometry for the rendered board

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Lay out `cells × cells` equal rectangles over a `canvas × canvas` square.
/// Rectangles come back in row-major order: row 0 left to right, then row 1.
pub fn layout_cells(cells: usize, canvas: u32) -> Vec<Rect> {
    let cell = f64::from(canvas) / cells as f64;
    let mut rects = Vec::with_capacity(cells * cells);
    for row in 0..cells {
        for column in 0..cells {
            rects.push(Rect {
                x: column as f64 * cell,
                y: row as f64 * cell,
                width: cell,
                height: cell,
            });
        }
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_tile_the_canvas() {
        let rects = layout_cells(7, 300);
        assert_eq!(rects.len(), 49);
        let area: f64 = rects.iter().map(Rect::area).sum();
        assert!((area - 300.0 * 300.0).abs() < 1e-6);

        let last = rects.last().unwrap();
        assert!((last.right() - 300.0).abs() < 1e-9);
        assert!((last.bottom() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn neighbours_share_edges() {
        let rects = layout_cells(3, 90);
        for row in 0..3 {
            for column in 0..2 {
                let left = rects[row * 3 + column];
                let right = rects[row * 3 + column + 1];
                assert!((left.right() - right.x).abs() < 1e-9);
                assert_eq!(left.y, right.y);
            }
        }
        assert_eq!(rects[3].y, 30.0);
    }
}
