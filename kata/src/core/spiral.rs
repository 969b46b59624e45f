//! Spiral read-out of a rectangular grid.

/// True if `grid` has at least one row and every row matches the first row's length.
pub fn is_rectangular<T>(grid: &[Vec<T>]) -> bool {
    match grid.first() {
        Some(first) => grid.iter().all(|row| row.len() == first.len()),
        None => false,
    }
}

/// Read `grid` clockwise from the top-left corner, shrinking inward.
///
/// Returns an empty vector when the grid is empty or ragged.
pub fn spiral_order<T: Copy>(grid: &[Vec<T>]) -> Vec<T> {
    if !is_rectangular(grid) {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(grid.len() * grid[0].len());
    // Half-open bounds: rows top..bottom, columns left..right.
    let (mut top, mut bottom) = (0, grid.len());
    let (mut left, mut right) = (0, grid[0].len());

    while top < bottom && left < right {
        out.extend_from_slice(&grid[top][left..right]);
        top += 1;

        for row in &grid[top..bottom] {
            out.push(row[right - 1]);
        }
        right -= 1;

        if top < bottom {
            out.extend(grid[bottom - 1][left..right].iter().rev());
            bottom -= 1;
        }

        if left < right {
            for row in grid[top..bottom].iter().rev() {
                out.push(row[left]);
            }
            left += 1;
        }
    }

    out
}
