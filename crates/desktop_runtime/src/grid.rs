//! Pure pointer-to-grid-cell geometry for the icon grids.
//!
//! The presentation layer measures a live grid container and hands the engine
//! an abstract [`GridLayout`] descriptor; the engine itself never touches the
//! DOM, which keeps drop-target resolution testable off-browser.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A zero-based logical slot in an icon grid.
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Uniform-track grid geometry descriptor.
///
/// Cell sizes are derived by evenly dividing the content box across the track
/// count; per-track explicit sizes are deliberately not modeled.
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: f64,
    pub cell_height: f64,
    pub gap: f64,
    pub padding: f64,
}

impl GridLayout {
    /// Builds a layout for a container of `width`×`height` CSS pixels with
    /// uniform tracks, an inter-cell `gap`, and symmetric `padding`.
    pub fn uniform(width: f64, height: f64, columns: u32, rows: u32, gap: f64, padding: f64) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let cell_width = (width - padding * 2.0 - gap * (columns - 1) as f64) / columns as f64;
        let cell_height = (height - padding * 2.0 - gap * (rows - 1) as f64) / rows as f64;
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
            gap,
            padding,
        }
    }

    /// Builds a fixed-column layout with square cells, as used by the folder
    /// mini-desktop (row height mirrors the computed column width).
    pub fn fixed_columns(width: f64, columns: u32, rows: u32, gap: f64, padding: f64) -> Self {
        let columns = columns.max(1);
        let cell_width = (width - padding * 2.0 - gap * (columns - 1) as f64) / columns as f64;
        Self {
            columns,
            rows: rows.max(1),
            cell_width,
            cell_height: cell_width,
            gap,
            padding,
        }
    }

    /// Resolves a pointer position (relative to the container origin) to the
    /// grid cell it falls inside.
    ///
    /// Coordinates before the first cell, inside a gap, or past the last cell
    /// yield `None`; callers must treat that as "no drop target" rather than
    /// clamping into an edge cell.
    pub fn cell_at(&self, rel_x: f64, rel_y: f64) -> Option<GridCell> {
        let col = track_index(rel_x - self.padding, self.cell_width, self.gap, self.columns)?;
        let row = track_index(rel_y - self.padding, self.cell_height, self.gap, self.rows)?;
        Some(GridCell { row, col })
    }
}

/// Walks tracks accumulating `cell + gap` until `pos` falls inside one.
fn track_index(pos: f64, cell: f64, gap: f64, count: u32) -> Option<u32> {
    if cell <= 0.0 {
        return None;
    }
    let mut start = 0.0;
    for index in 0..count {
        if pos >= start && pos < start + cell {
            return Some(index);
        }
        start += cell + gap;
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn spec_layout() -> GridLayout {
        // 500x400 container, 4 columns, 3 rows, 10px gap, 20px padding:
        // cells are 107.5 x 113.33 wide/tall.
        GridLayout::uniform(500.0, 400.0, 4, 3, 10.0, 20.0)
    }

    #[test]
    fn uniform_layout_divides_content_box_evenly() {
        let layout = spec_layout();
        assert_eq!(layout.cell_width, (500.0 - 40.0 - 30.0) / 4.0);
        assert_eq!(layout.cell_height, (400.0 - 40.0 - 20.0) / 3.0);
    }

    #[test]
    fn pointer_inside_a_cell_resolves_to_its_indices() {
        let layout = spec_layout();

        // First cell spans [20, 127.5) horizontally.
        assert_eq!(layout.cell_at(25.0, 25.0), Some(GridCell { row: 0, col: 0 }));
        // Third column starts at 20 + 2*(107.5 + 10) = 255.
        assert_eq!(
            layout.cell_at(260.0, 150.0),
            Some(GridCell { row: 1, col: 2 })
        );
        // Last cell in the grid.
        assert_eq!(
            layout.cell_at(480.0, 380.0),
            Some(GridCell { row: 2, col: 3 })
        );
    }

    #[test]
    fn pointer_in_a_gap_has_no_drop_target() {
        let layout = spec_layout();
        // Horizontal gap between columns 0 and 1 spans [127.5, 137.5).
        assert_eq!(layout.cell_at(130.0, 25.0), None);
    }

    #[test]
    fn pointer_outside_the_grid_has_no_drop_target() {
        let layout = spec_layout();
        assert_eq!(layout.cell_at(5.0, 25.0), None, "inside leading padding");
        assert_eq!(layout.cell_at(-10.0, 25.0), None, "before the container");
        assert_eq!(layout.cell_at(495.0, 25.0), None, "past the last column");
        assert_eq!(layout.cell_at(25.0, 395.0), None, "past the last row");
    }

    #[test]
    fn fixed_column_layout_uses_square_cells() {
        // Folder grid: 4 columns in a 460px-wide container with 10px gap and
        // 20px padding leaves 97.5px tracks.
        let layout = GridLayout::fixed_columns(460.0, 4, 4, 10.0, 20.0);
        assert_eq!(layout.cell_width, 97.5);
        assert_eq!(layout.cell_height, 97.5);
        assert_eq!(layout.cell_at(30.0, 30.0), Some(GridCell { row: 0, col: 0 }));
        assert_eq!(
            layout.cell_at(130.0, 240.0),
            Some(GridCell { row: 2, col: 1 })
        );
    }

    #[test]
    fn degenerate_container_yields_no_cells() {
        let layout = GridLayout::uniform(30.0, 30.0, 4, 3, 10.0, 20.0);
        assert!(layout.cell_width <= 0.0);
        assert_eq!(layout.cell_at(15.0, 15.0), None);
    }
}
