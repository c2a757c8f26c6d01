use std::f64::consts::PI;

use super::Series;

/// Half-wave rectified sine.
///
/// The base `1/pi + sin(wt)/2` accounts for the fundamental; the loop then
/// adds `terms - 1` even cosine harmonics at twice the fundamental and up.
/// With fewer than two terms only the base is returned.
pub fn half_rectified_sine(time: &[f64], frequency: f64, terms: usize) -> Series {
    let signal = time
        .iter()
        .map(|&t| 1.0 / PI + (2.0 * PI * frequency * t).sin() / 2.0)
        .collect();

    let mut series = Series::with_signal(signal, terms.max(1));
    series.push_harmonic(frequency, 0.5);

    if terms < 2 {
        return series;
    }

    for k in 1..terms {
        let denominator = (4 * k * k - 1) as f64;
        let omega = (k * 4) as f64 * PI * frequency;

        for (value, &t) in series.signal.iter_mut().zip(time) {
            *value -= (2.0 / PI) * (omega * t).cos() / denominator;
        }

        series.push_harmonic(frequency * k as f64 * 2.0, 2.0 / (PI * denominator));
    }

    series
}

/// Full-wave rectified sine.
///
/// Starts from the DC level `2/pi`, reported as a harmonic at 0 Hz, then
/// subtracts cosine harmonics for `k` in `1..terms`. The loop stops one short
/// of `terms`, so a call with `terms` harmonics in total includes the DC entry.
pub fn full_rectified_sine(time: &[f64], frequency: f64, terms: usize) -> Series {
    let mut series = Series::with_signal(vec![2.0 / PI; time.len()], terms.max(1));
    series.push_harmonic(0.0, 2.0 / PI);

    for k in 1..terms {
        let denominator = (4 * k * k - 1) as f64;
        let omega = (k * 2) as f64 * PI * frequency;

        for (value, &t) in series.signal.iter_mut().zip(time) {
            *value -= (4.0 / PI) * (omega * t).cos() / denominator;
        }

        series.push_harmonic(frequency * k as f64, 4.0 / (PI * denominator));
    }

    series
}
