use std::f64::consts::PI;

use super::Series;

/// Plain sine at the fundamental. The term count is ignored.
pub fn sine_wave(time: &[f64], frequency: f64, _terms: usize) -> Series {
    let signal = time.iter().map(|&t| (2.0 * PI * frequency * t).sin()).collect();

    let mut series = Series::with_signal(signal, 1);
    series.push_harmonic(frequency, 1.0);
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::grid::linspace;

    #[test]
    fn test_sine_matches_closed_form() {
        let time = linspace(0.0, 0.02, 64);
        let series = sine_wave(&time, 50.0, 15);

        for (value, t) in series.signal.iter().zip(&time) {
            assert_eq!(*value, (2.0 * PI * 50.0 * t).sin());
        }
    }

    #[test]
    fn test_sine_single_harmonic() {
        let series = sine_wave(&[0.0, 0.001], 440.0, 99);
        assert_eq!(series.frequencies, vec![440.0]);
        assert_eq!(series.amplitudes, vec![1.0]);
    }

    #[test]
    fn test_sine_quarter_period() {
        // t = 1 / (4 f) lands on the peak
        let series = sine_wave(&[0.0, 0.005], 50.0, 1);
        assert!(series.signal[0].abs() < 1e-12);
        assert!((series.signal[1] - 1.0).abs() < 1e-12);
    }
}
