//! Grid template: matrix visualizations with highlight-driven emphasis.

use crate::template::{Chrome, EMPHASIS_SCALE, ResolvedCell, Scene};
use tracing::debug;
use vistra_anim::{ElementId, Orchestrator, Visual};
use vistra_core::LayoutConfig;
use vistra_layout::{GridCell, matrix_layout};

/// Composes matrix cell sizing with tweening. Cells mostly sit still, so the
/// tweens here are emphasis pulses; positions only move when the matrix shape
/// or canvas changes between frames.
pub struct GridTemplate {
    config: LayoutConfig,
    pub chrome: Chrome,
    orchestrator: Orchestrator,
}

impl GridTemplate {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            chrome: Chrome::default(),
            orchestrator: Orchestrator::new(),
        }
    }

    pub fn with_chrome(mut self, chrome: Chrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Resolves one frame of a `rows x cols` matrix at `now`.
    ///
    /// `highlights` holds row-major linear indices (a step's highlight list);
    /// a cell is emphasized when it carries a highlight flag of its own or
    /// its linear index appears there. Cells outside the declared shape are
    /// skipped.
    pub fn frame(
        &mut self,
        cells: &[GridCell],
        rows: usize,
        cols: usize,
        highlights: &[usize],
        now: f64,
    ) -> Scene {
        let matrix = matrix_layout(rows, cols, &self.config);

        let mut live: Vec<(ElementId, &GridCell, bool)> = Vec::with_capacity(cells.len());
        for cell in cells {
            if cell.row >= rows || cell.col >= cols {
                debug!(row = cell.row, col = cell.col, "cell outside matrix shape, skipping");
                continue;
            }
            let highlighted =
                cell.is_highlighted || highlights.contains(&(cell.row * cols + cell.col));
            let center = matrix.cell_center(cell.row, cell.col);
            let scale = if cell.is_current || highlighted {
                EMPHASIS_SCALE
            } else {
                1.0
            };
            let id = ElementId::Cell(cell.row, cell.col);
            self.orchestrator
                .retarget(id.clone(), Visual::at(center.x, center.y).with_scale(scale), now);
            live.push((id, cell, highlighted));
        }
        self.orchestrator.sync(live.iter().map(|(id, _, _)| id));
        let animating = self.orchestrator.advance(now);

        let mut scene = Scene {
            chrome: self.chrome.clone(),
            animating,
            ..Scene::default()
        };
        for (id, cell, highlighted) in &live {
            let Some(v) = self.orchestrator.sample(id, now) else {
                continue;
            };
            scene.cells.push(ResolvedCell {
                row: cell.row,
                col: cell.col,
                x: v.x,
                y: v.y,
                size: matrix.cell,
                scale: v.scale,
                value: cell.value.clone(),
                is_current: cell.is_current,
                is_visited: cell.is_visited,
                is_highlighted: *highlighted,
            });
        }
        scene
    }
}
