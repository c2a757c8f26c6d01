use std::f64::consts::PI;

use super::Series;

/// Sawtooth wave built from the first `terms` sine harmonics, odd and even
pub fn sawtooth_wave(time: &[f64], frequency: f64, terms: usize) -> Series {
    let mut series = Series::with_signal(vec![0.0; time.len()], terms);

    for k in 1..=terms {
        let coefficient = (2.0 / PI) * (1.0 / k as f64);
        let omega = (k * 2) as f64 * PI * frequency;

        for (value, &t) in series.signal.iter_mut().zip(time) {
            *value += coefficient * (omega * t).sin();
        }

        series.push_harmonic(frequency * k as f64, 1.0 / (PI * k as f64));
    }

    series
}
