use serde::{Deserialize, Serialize};

use crate::heatmap::density::DensityMap;

/// Cells at or below this normalized intensity render fully transparent,
/// cutting overdraw from near-zero Gaussian tails.
const RENDER_FLOOR: f64 = 0.01;

/// Gradient stops from cold to hot: blue, cyan, green, yellow, red.
const STOPS: [(f64, (u8, u8, u8)); 5] = [
    (0.0, (0, 0, 255)),
    (0.25, (0, 255, 255)),
    (0.5, (0, 255, 0)),
    (0.75, (255, 255, 0)),
    (1.0, (255, 0, 0)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}

/// Map a normalized intensity to the gradient, interpolating linearly
/// between the two bracketing stops. Alpha ramps with intensity so zero
/// density composites as fully transparent over the source image.
pub fn intensity_to_color(intensity: f64) -> Rgba {
    let intensity = intensity.clamp(0.0, 1.0);

    for pair in STOPS.windows(2) {
        let (lo_pos, lo) = pair[0];
        let (hi_pos, hi) = pair[1];
        if intensity <= hi_pos {
            let t = (intensity - lo_pos) / (hi_pos - lo_pos);
            return Rgba {
                r: (lo.0 as f64 + t * (hi.0 as f64 - lo.0 as f64)) as u8,
                g: (lo.1 as f64 + t * (hi.1 as f64 - lo.1 as f64)) as u8,
                b: (lo.2 as f64 + t * (hi.2 as f64 - lo.2 as f64)) as u8,
                a: (255.0 * (intensity * 1.5).min(1.0)) as u8,
            };
        }
    }

    Rgba {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    }
}

/// A rendered heatmap, one RGBA pixel per density cell, row-major.
#[derive(Debug, Clone)]
pub struct ColorGrid {
    cols: usize,
    rows: usize,
    pixels: Vec<Rgba>,
}

impl ColorGrid {
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Rgba {
        self.pixels[row * self.cols + col]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}

/// Render a normalized density map through the gradient.
pub fn render_color_grid(map: &DensityMap) -> ColorGrid {
    let pixels = map
        .cells()
        .iter()
        .map(|&value| {
            if value > RENDER_FLOOR {
                intensity_to_color(value)
            } else {
                Rgba::TRANSPARENT
            }
        })
        .collect();

    ColorGrid {
        cols: map.cols(),
        rows: map.rows(),
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::config::HeatmapConfig;
    use crate::heatmap::density::build_density_map;

    #[test]
    fn gradient_endpoints_and_midpoint() {
        let cold = intensity_to_color(0.0);
        assert_eq!((cold.r, cold.g, cold.b, cold.a), (0, 0, 255, 0));

        let mid = intensity_to_color(0.5);
        assert_eq!((mid.r, mid.g, mid.b), (0, 255, 0));

        let hot = intensity_to_color(1.0);
        assert_eq!((hot.r, hot.g, hot.b, hot.a), (255, 0, 0, 255));
    }

    #[test]
    fn interpolates_inside_a_segment() {
        // Halfway between blue and cyan.
        let color = intensity_to_color(0.125);
        assert_eq!(color.r, 0);
        assert_eq!(color.g, 127);
        assert_eq!(color.b, 255);
        // Alpha ramp: 255 * 1.5 * 0.125.
        assert_eq!(color.a, 47);
    }

    #[test]
    fn out_of_range_intensity_is_clamped() {
        assert_eq!(intensity_to_color(-1.0), intensity_to_color(0.0));
        assert_eq!(intensity_to_color(2.0), intensity_to_color(1.0));
    }

    #[test]
    fn near_zero_cells_render_transparent() {
        let config = HeatmapConfig {
            cell_size: 2,
            sigma: 1.0,
            worker_count: 1,
        };
        let map = build_density_map(&[(10.0, 10.0)], 100, 100, &config).unwrap();
        let grid = render_color_grid(&map);

        assert_eq!(grid.cols(), map.cols());
        assert_eq!(grid.rows(), map.rows());
        // The peak cell is saturated red, the far corner is transparent.
        assert_eq!(grid.get(5, 5).a, 255);
        assert_eq!(grid.get(49, 49), Rgba::TRANSPARENT);
    }
}
