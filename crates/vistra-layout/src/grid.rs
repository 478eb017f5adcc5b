//! Grid strategy: row-major square-ish grid, plus matrix cell sizing.

use crate::element::GraphNode;
use crate::model::LayoutResult;
use vistra_core::LayoutConfig;
use vistra_core::geom::{Point, point};

/// Places node `i` at the center of cell `(i / cols, i % cols)` where
/// `cols = ceil(sqrt(n))`. The final row is left-aligned; no balancing.
pub fn layout_grid(nodes: &[GraphNode], config: &LayoutConfig) -> LayoutResult {
    let mut result = LayoutResult::default();
    let n = nodes.len();
    if n == 0 {
        return result;
    }

    let cols = (n as f64).sqrt().ceil() as usize;
    let rows = n.div_ceil(cols);
    let cell_w = config.width / cols as f64;
    let cell_h = config.height / rows as f64;

    for (i, node) in nodes.iter().enumerate() {
        let row = i / cols;
        let col = i % cols;
        result.place(
            node.id.clone(),
            point(
                (col as f64 + 0.5) * cell_w,
                (row as f64 + 0.5) * cell_h,
            ),
        );
    }
    result
}

/// Resolved geometry for a `rows x cols` matrix: uniform square cells with a
/// gutter, the whole block centered in the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixLayout {
    pub rows: usize,
    pub cols: usize,
    pub cell: f64,
    pub gap: f64,
    /// Top-left corner of the first cell.
    pub origin: Point,
}

impl MatrixLayout {
    pub fn cell_origin(&self, row: usize, col: usize) -> Point {
        point(
            self.origin.x + col as f64 * (self.cell + self.gap),
            self.origin.y + row as f64 * (self.cell + self.gap),
        )
    }

    pub fn cell_center(&self, row: usize, col: usize) -> Point {
        let o = self.cell_origin(row, col);
        point(o.x + self.cell / 2.0, o.y + self.cell / 2.0)
    }
}

/// Computes the matrix cell size:
/// `min(floor((w - gap*(cols+1))/cols), floor((h - gap*(rows+1))/rows), cap)`,
/// clamped at zero for degenerate canvases.
pub fn matrix_layout(rows: usize, cols: usize, config: &LayoutConfig) -> MatrixLayout {
    let gap = config.gap;
    let fit = |span: f64, count: usize| {
        if count == 0 {
            0.0
        } else {
            ((span - gap * (count + 1) as f64) / count as f64).floor()
        }
    };

    let cell = fit(config.width, cols)
        .min(fit(config.height, rows))
        .min(config.max_cell_size)
        .max(0.0);

    let block_w = cols as f64 * cell + (cols + 1) as f64 * gap;
    let block_h = rows as f64 * cell + (rows + 1) as f64 * gap;
    let origin = point(
        (config.width - block_w) / 2.0 + gap,
        (config.height - block_h) / 2.0 + gap,
    );

    MatrixLayout {
        rows,
        cols,
        cell,
        gap,
        origin,
    }
}
