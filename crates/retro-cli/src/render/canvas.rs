// crates/retro-cli/src/render/canvas.rs

use retro_core::{Vec2, ViewConfig};

/// Character grid covering a view's axis bounds. Row 0 is the top (max y).
pub struct Canvas {
    cols: usize,
    rows: usize,
    view: ViewConfig,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize, view: &ViewConfig) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            view: view.clone(),
            cells: vec![' '; cols * rows],
        }
    }

    /// Cell for `p`, or `None` when it lies outside the view.
    pub fn cell(&self, p: Vec2) -> Option<(usize, usize)> {
        if !self.view.contains(p) {
            return None;
        }
        let col = ((p.x - self.view.x_range.0) / self.view.width() * (self.cols - 1) as f64).round() as usize;
        let row = ((self.view.y_range.1 - p.y) / self.view.height() * (self.rows - 1) as f64).round() as usize;
        Some((col.min(self.cols - 1), row.min(self.rows - 1)))
    }

    pub fn plot(&mut self, p: Vec2, ch: char) {
        if let Some((c, r)) = self.cell(p) {
            self.cells[r * self.cols + c] = ch;
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = ' ');
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.cols).map(|row| row.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_center() {
        let c = Canvas::new(61, 21, &ViewConfig::default());
        assert_eq!(c.cell(Vec2::ZERO), Some((30, 10)));
        assert_eq!(c.cell(Vec2::new(-3.0, 3.0)), Some((0, 0)));
        assert_eq!(c.cell(Vec2::new(3.0, -3.0)), Some((60, 20)));
        assert_eq!(c.cell(Vec2::new(3.5, 0.0)), None);
        assert_eq!(c.cell(Vec2::new(0.0, -3.01)), None);
        assert_eq!(c.cell(Vec2::new(f64::NAN, 0.0)), None);
    }

    #[test]
    fn later_plots_overwrite() {
        let mut c = Canvas::new(5, 3, &ViewConfig::square(1.0, ""));
        c.plot(Vec2::ZERO, '.');
        c.plot(Vec2::ZERO, 'E');
        let lines: Vec<String> = c.lines().collect();
        assert_eq!(lines, vec!["     ", "  E  ", "     "]);
    }
}
