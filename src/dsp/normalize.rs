//! Zero-seeded min/max range normalization

/// Global value range of a smoothed grid, seeded with zero
///
/// Seeding with 0 anchors the displayed dynamic range at zero even when
/// every cell is strictly positive or strictly negative. A silent or
/// constant-valued waveform therefore yields min == max == 0; `scale`
/// divides by zero in that case, so callers must check `is_flat` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRange {
    pub min: f32,
    pub max: f32,
}

impl IntensityRange {
    /// Fold the grid into its zero-seeded global min/max
    pub fn from_grid(grid: &[Vec<f32>]) -> Self {
        let mut min = 0.0f32;
        let mut max = 0.0f32;

        for row in grid {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
            }
        }

        Self { min, max }
    }

    /// Linear scaling into [0, 1] within the range
    ///
    /// Undefined for a flat range; the caller guards that case.
    pub fn scale(&self, x: f32) -> f32 {
        (x - self.min) / (self.max - self.min)
    }

    /// True when the range is degenerate (no dynamic range to display)
    pub fn is_flat(&self) -> bool {
        self.max == self.min
    }
}
