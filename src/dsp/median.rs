//! 3x3 median smoothing over the frame x bin grid

/// Median of a value set, sorting in place
///
/// Odd count: middle of the sorted values. Even count: mean of the two
/// middle values. The 3x3 filter always passes 9 values, but the even
/// branch keeps the helper total for other callers.
pub fn median(values: &mut [f32]) -> f32 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let half = values.len() / 2;

    if values.len() % 2 == 1 {
        values[half]
    } else {
        (values[half - 1] + values[half]) / 2.0
    }
}

/// Apply a 3x3 median filter, shrinking the grid by one on each border
///
/// Output cell (i, j) is the median of the 9 source cells centered at
/// source (i+1, j+1). Border rows and columns are dropped, not padded or
/// clamped: an R x C input yields (R-2) x (C-2). Inputs with R < 3 or
/// C < 3 yield an empty grid, which is a valid degenerate result.
pub fn median_filter(grid: &[Vec<f32>]) -> Vec<Vec<f32>> {
    let mut filtered = Vec::new();

    if grid.len() < 3 {
        return filtered;
    }

    for i in 1..grid.len() - 1 {
        if grid[i].len() < 3 {
            continue;
        }

        let mut row = Vec::with_capacity(grid[i].len() - 2);

        for j in 1..grid[i].len() - 1 {
            let mut values = [
                grid[i - 1][j],
                grid[i][j],
                grid[i + 1][j],
                grid[i - 1][j - 1],
                grid[i][j - 1],
                grid[i + 1][j - 1],
                grid[i - 1][j + 1],
                grid[i][j + 1],
                grid[i + 1][j + 1],
            ];

            row.push(median(&mut values));
        }

        filtered.push(row);
    }

    filtered
}
