//! Truncated Fourier series for the classic periodic waveforms.
//!
//! Every function here takes the same three inputs (a time grid in seconds,
//! a fundamental frequency in Hz and a term count) and returns a [`Series`]:
//! the evaluated signal plus the frequencies and amplitudes of the harmonics
//! that were summed. The functions are pure and share no state.

pub mod grid;
mod rectified;
mod sawtooth;
mod sine;
mod square;
mod triangle;

pub use rectified::{full_rectified_sine, half_rectified_sine};
pub use sawtooth::sawtooth_wave;
pub use sine::sine_wave;
pub use square::square_wave;
pub use triangle::triangle_wave;

/// Term count used when the caller has no preference
pub const DEFAULT_TERMS: usize = 15;

/// Coerce a numeric term count to `usize` by truncation toward zero.
///
/// Negative values and NaN become 0, which leaves every harmonic loop empty.
pub fn terms_from(value: f64) -> usize {
    value.trunc() as usize
}

/// One retained harmonic of a truncated series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// Frequency in Hz
    pub frequency: f64,
    /// Coefficient magnitude as reported by the series
    pub amplitude: f64,
}

/// Result of evaluating a truncated series on a time grid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// Signal value at each point of the time grid
    pub signal: Vec<f64>,
    /// Frequency of each harmonic, in the order the terms were generated
    pub frequencies: Vec<f64>,
    /// Amplitude of each harmonic, parallel to `frequencies`
    pub amplitudes: Vec<f64>,
}

impl Series {
    /// Start a series with a preallocated signal and room for `terms` harmonics
    pub(crate) fn with_signal(signal: Vec<f64>, terms: usize) -> Self {
        Self {
            signal,
            frequencies: Vec::with_capacity(terms),
            amplitudes: Vec::with_capacity(terms),
        }
    }

    /// Record a harmonic at the end of the spectrum
    pub(crate) fn push_harmonic(&mut self, frequency: f64, amplitude: f64) {
        self.frequencies.push(frequency);
        self.amplitudes.push(amplitude);
    }

    /// Iterate harmonics as (frequency, amplitude) pairs
    pub fn harmonics(&self) -> impl Iterator<Item = Harmonic> + '_ {
        self.frequencies
            .iter()
            .zip(&self.amplitudes)
            .map(|(&frequency, &amplitude)| Harmonic { frequency, amplitude })
    }

    /// Number of harmonics in the spectrum
    pub fn harmonic_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Highest harmonic frequency, or `None` for an empty spectrum
    pub fn max_frequency(&self) -> Option<f64> {
        self.frequencies.iter().copied().reduce(f64::max)
    }

    /// Smallest and largest signal value, or `None` for an empty signal
    pub fn signal_range(&self) -> Option<(f64, f64)> {
        let mut values = self.signal.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Split into the raw (signal, frequencies, amplitudes) triple
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.signal, self.frequencies, self.amplitudes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_truncate() {
        assert_eq!(terms_from(3.9), 3);
        assert_eq!(terms_from(15.0), 15);
        assert_eq!(terms_from(0.2), 0);
    }

    #[test]
    fn test_terms_negative_and_nan_saturate() {
        assert_eq!(terms_from(-2.0), 0);
        assert_eq!(terms_from(f64::NAN), 0);
    }

    #[test]
    fn test_harmonics_pairs_in_order() {
        let mut series = Series::with_signal(vec![], 2);
        series.push_harmonic(50.0, 0.5);
        series.push_harmonic(150.0, 0.25);

        let pairs: Vec<Harmonic> = series.harmonics().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], Harmonic { frequency: 50.0, amplitude: 0.5 });
        assert_eq!(pairs[1], Harmonic { frequency: 150.0, amplitude: 0.25 });
        assert_eq!(series.max_frequency(), Some(150.0));
    }

    #[test]
    fn test_signal_range() {
        let series = Series::with_signal(vec![0.5, -1.0, 2.0], 0);
        assert_eq!(series.signal_range(), Some((-1.0, 2.0)));
        assert_eq!(Series::default().signal_range(), None);
        assert_eq!(Series::default().max_frequency(), None);
    }

    #[test]
    fn test_every_waveform_matches_grid_length() {
        let time = grid::linspace(0.0, 0.04, 137);
        let outputs = [
            sine_wave(&time, 50.0, 7),
            square_wave(&time, 50.0, 7),
            triangle_wave(&time, 50.0, 7),
            sawtooth_wave(&time, 50.0, 7),
            half_rectified_sine(&time, 50.0, 7),
            full_rectified_sine(&time, 50.0, 7),
        ];

        for series in &outputs {
            assert_eq!(series.signal.len(), time.len());
            assert_eq!(series.frequencies.len(), series.amplitudes.len());
        }
    }

    #[test]
    fn test_empty_grid_gives_empty_signal() {
        let outputs = [
            sine_wave(&[], 50.0, 5),
            square_wave(&[], 50.0, 5),
            triangle_wave(&[], 50.0, 5),
            sawtooth_wave(&[], 50.0, 5),
            half_rectified_sine(&[], 50.0, 5),
            full_rectified_sine(&[], 50.0, 5),
        ];

        for series in &outputs {
            assert!(series.signal.is_empty());
            assert!(!series.frequencies.is_empty());
        }
    }

    #[test]
    fn test_repeat_calls_are_bit_identical() {
        let time = grid::linspace(0.0, 0.1, 250);
        assert_eq!(sine_wave(&time, 60.0, 12), sine_wave(&time, 60.0, 12));
        assert_eq!(square_wave(&time, 60.0, 12), square_wave(&time, 60.0, 12));
        assert_eq!(triangle_wave(&time, 60.0, 12), triangle_wave(&time, 60.0, 12));
        assert_eq!(sawtooth_wave(&time, 60.0, 12), sawtooth_wave(&time, 60.0, 12));
        assert_eq!(
            half_rectified_sine(&time, 60.0, 12),
            half_rectified_sine(&time, 60.0, 12)
        );
        assert_eq!(
            full_rectified_sine(&time, 60.0, 12),
            full_rectified_sine(&time, 60.0, 12)
        );
    }
}
