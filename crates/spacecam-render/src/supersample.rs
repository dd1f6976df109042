//! Stratified sub-pixel sample positions.

/// Sub-pixel offsets of an `n`×`n` stratified grid, row by row.
///
/// Each offset lies in `(-0.5, 0.5)` on both axes. `n == 0` yields no samples.
pub fn supersampling_offsets(n: u32) -> Vec<(f64, f64)> {
    let step = |i: u32| (f64::from(i) + 0.5) / f64::from(n) - 0.5;
    (0..n)
        .flat_map(|j| (0..n).map(move |i| (step(i), step(j))))
        .collect()
}
