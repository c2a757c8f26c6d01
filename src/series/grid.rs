//! Time grids for evaluating a series

/// `num` evenly spaced points from `start` to `stop`, both inclusive.
///
/// Points are computed as `start + i * step` and the final point is pinned
/// to `stop` so rounding never leaves it short.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut points: Vec<f64> = (0..num).map(|i| i as f64 * step + start).collect();
            points[num - 1] = stop;
            points
        }
    }
}

/// Sample indices `0.0, 1.0, .. count - 1` as a time grid.
///
/// Paired with a frequency divided by the sample rate this evaluates a
/// series directly at audio sample positions.
pub fn sample_indices(count: usize) -> Vec<f64> {
    (0..count).map(|i| i as f64).collect()
}

/// Grid spanning `periods` cycles of `frequency` with `samples` points
pub fn plot_grid(frequency: f64, samples: usize, periods: f64) -> Vec<f64> {
    linspace(0.0, periods / frequency, samples)
}
