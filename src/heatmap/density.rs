use anyhow::{bail, Result};

use crate::heatmap::config::HeatmapConfig;

/// A downsampled grid of non-negative gaze density values, row-major.
/// Written once during accumulation, then normalized in place to [0, 1] by
/// its own maximum; a grid that never saw any mass stays all-zero.
#[derive(Debug, Clone)]
pub struct DensityMap {
    cols: usize,
    rows: usize,
    cells: Vec<f64>,
}

impl DensityMap {
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> f64 {
        self.cells[row * self.cols + col]
    }

    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    /// Grid coordinates of the cell holding the maximum value.
    pub fn argmax(&self) -> (usize, usize) {
        let mut best = (0, 0);
        let mut best_value = f64::NEG_INFINITY;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let value = self.get(col, row);
                if value > best_value {
                    best_value = value;
                    best = (col, row);
                }
            }
        }
        best
    }

    fn normalize(&mut self) {
        let max = self.max();
        if max > 0.0 {
            for cell in &mut self.cells {
                *cell /= max;
            }
        }
    }
}

/// Accumulate a Gaussian kernel per point onto the full grid by direct
/// summation, then normalize by the grid's own maximum.
///
/// Grids are small (screen resolution over cell size), so direct summation
/// beats anything fancier here. An empty point list produces an all-zero
/// map, not an error.
pub fn build_density_map(
    points: &[(f64, f64)],
    grid_width: u32,
    grid_height: u32,
    config: &HeatmapConfig,
) -> Result<DensityMap> {
    if config.cell_size == 0 {
        bail!("cell_size must be positive");
    }
    if config.sigma <= 0.0 {
        bail!("sigma must be positive, got {}", config.sigma);
    }

    let cols = (grid_width / config.cell_size) as usize;
    let rows = (grid_height / config.cell_size) as usize;
    if cols == 0 || rows == 0 {
        bail!(
            "degenerate grid {}x{} for cell_size {}",
            grid_width,
            grid_height,
            config.cell_size
        );
    }

    let mut map = DensityMap {
        cols,
        rows,
        cells: vec![0.0; cols * rows],
    };

    let denom = 2.0 * config.sigma * config.sigma;
    let cell = config.cell_size as f64;

    for &(x, y) in points {
        let grid_x = x / cell;
        let grid_y = y / cell;

        for row in 0..rows {
            let dy = row as f64 - grid_y;
            for col in 0..cols {
                let dx = col as f64 - grid_x;
                map.cells[row * cols + col] += (-(dx * dx + dy * dy) / denom).exp();
            }
        }
    }

    map.normalize();
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cell_size: u32, sigma: f64) -> HeatmapConfig {
        HeatmapConfig {
            cell_size,
            sigma,
            worker_count: 1,
        }
    }

    #[test]
    fn identical_points_peak_at_their_cell() {
        let points = vec![(100.0, 60.0); 40];
        let map = build_density_map(&points, 200, 120, &config(2, 3.0)).unwrap();

        assert_eq!(map.cols(), 100);
        assert_eq!(map.rows(), 60);
        // Normalized maximum sits exactly on the cell containing the point.
        assert_eq!(map.argmax(), (50, 30));
        assert!((map.get(50, 30) - 1.0).abs() < 1e-12);
        assert!(map.cells().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn empty_points_leave_the_grid_all_zero() {
        let map = build_density_map(&[], 100, 100, &config(2, 3.0)).unwrap();
        assert_eq!(map.max(), 0.0);
        assert!(map.cells().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn density_falls_off_with_distance_from_the_point() {
        let map = build_density_map(&[(50.0, 50.0)], 100, 100, &config(2, 2.0)).unwrap();
        let peak = map.get(25, 25);
        assert!(peak > map.get(30, 25));
        assert!(map.get(30, 25) > map.get(40, 25));
    }

    #[test]
    fn degenerate_configuration_is_an_error() {
        assert!(build_density_map(&[], 100, 100, &config(0, 3.0)).is_err());
        assert!(build_density_map(&[], 100, 100, &config(2, 0.0)).is_err());
        assert!(build_density_map(&[], 1, 100, &config(2, 3.0)).is_err());
    }
}
