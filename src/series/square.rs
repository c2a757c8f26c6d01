use std::f64::consts::PI;

use super::Series;

/// Square wave built from the first `terms` odd sine harmonics.
///
/// The reported amplitude of harmonic `2k - 1` is `(2 / pi) / (2k - 1)`,
/// half of the coefficient actually used in the signal.
pub fn square_wave(time: &[f64], frequency: f64, terms: usize) -> Series {
    let mut series = Series::with_signal(vec![0.0; time.len()], terms);

    for k in 1..=terms {
        let odd = 2 * k - 1;
        let coefficient = (4.0 / PI) * (1.0 / odd as f64);
        let omega = (odd * 2) as f64 * PI * frequency;

        for (value, &t) in series.signal.iter_mut().zip(time) {
            *value += coefficient * (omega * t).sin();
        }

        series.push_harmonic(frequency * odd as f64, (2.0 / PI) * (1.0 / odd as f64));
    }

    series
}
