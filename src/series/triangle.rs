use std::f64::consts::PI;

use super::Series;

/// Triangle wave built from the first `terms` odd cosine harmonics.
///
/// Terms are subtracted, so the signal starts at its minimum at `t = 0`.
pub fn triangle_wave(time: &[f64], frequency: f64, terms: usize) -> Series {
    let mut series = Series::with_signal(vec![0.0; time.len()], terms);

    for k in 1..=terms {
        let odd = 2 * k - 1;
        let coefficient = (8.0 / (PI * PI)) * (1.0 / (odd * odd) as f64);
        let omega = (odd * 2) as f64 * PI * frequency;

        for (value, &t) in series.signal.iter_mut().zip(time) {
            *value -= coefficient * (omega * t).cos();
        }

        let scaled = PI * odd as f64;
        series.push_harmonic(frequency * odd as f64, 4.0 / (scaled * scaled));
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_harmonics() {
        let series = triangle_wave(&[], 10.0, 3);
        assert_eq!(series.frequencies, vec![10.0, 30.0, 50.0]);
        assert!((series.amplitudes[0] - 4.0 / (PI * PI)).abs() < 1e-15);
        assert!((series.amplitudes[1] - 4.0 / (9.0 * PI * PI)).abs() < 1e-15);
    }

    #[test]
    fn test_triangle_amplitudes_decrease() {
        let series = triangle_wave(&[], 50.0, 20);
        assert!(series.amplitudes.windows(2).all(|w| w[1].abs() < w[0].abs()));
    }

    #[test]
    fn test_triangle_negative_start() {
        // Sum of 8 / (pi^2 (2k-1)^2) over all k is 1
        let series = triangle_wave(&[0.0, 0.01], 50.0, 500);
        assert!((series.signal[0] + 1.0).abs() < 1e-3);
        assert!((series.signal[1] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_triangle_three_terms_exact() {
        let f = 47.3;
        let time = [0.0013, 0.0071, 0.0192];
        let series = triangle_wave(&time, f, 3);

        for (value, &t) in series.signal.iter().zip(&time) {
            let expected = 0.0
                - (8.0 / (PI * PI)) * (1.0 / 1.0) * (2.0 * PI * f * t).cos()
                - (8.0 / (PI * PI)) * (1.0 / 9.0) * (6.0 * PI * f * t).cos()
                - (8.0 / (PI * PI)) * (1.0 / 25.0) * (10.0 * PI * f * t).cos();
            assert_eq!(*value, expected);
        }
        assert_eq!(series.frequencies, vec![f * 1.0, f * 3.0, f * 5.0]);
        assert_eq!(
            series.amplitudes,
            vec![
                4.0 / ((PI * 1.0) * (PI * 1.0)),
                4.0 / ((PI * 3.0) * (PI * 3.0)),
                4.0 / ((PI * 5.0) * (PI * 5.0)),
            ]
        );
    }
}
