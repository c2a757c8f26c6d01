use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::series::{self, Series};

/// Waveform name that does not match any known series
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaveformError {
    #[error("unknown waveform '{0}' (expected one of sine, square, triangle, sawtooth, full_rec, half_rec)")]
    Unknown(String),
}

/// Supported waveform series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Triangle,
    Sawtooth,
    FullRectified,
    HalfRectified,
}

impl Waveform {
    /// Every waveform, in display order
    pub const ALL: [Waveform; 6] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
        Waveform::FullRectified,
        Waveform::HalfRectified,
    ];

    /// Lookup key used in config files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
            Waveform::FullRectified => "full_rec",
            Waveform::HalfRectified => "half_rec",
        }
    }

    /// Human readable label for display
    pub fn label(self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Triangle => "Triangle",
            Waveform::Sawtooth => "Sawtooth",
            Waveform::FullRectified => "Full-rectified sine",
            Waveform::HalfRectified => "Half-rectified sine",
        }
    }

    /// Position in [`Waveform::ALL`]
    pub fn index(self) -> usize {
        match self {
            Waveform::Sine => 0,
            Waveform::Square => 1,
            Waveform::Triangle => 2,
            Waveform::Sawtooth => 3,
            Waveform::FullRectified => 4,
            Waveform::HalfRectified => 5,
        }
    }

    /// Next waveform, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous waveform, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Evaluate this waveform's truncated series on `time`
    pub fn synthesize(self, time: &[f64], frequency: f64, terms: usize) -> Series {
        match self {
            Waveform::Sine => series::sine_wave(time, frequency, terms),
            Waveform::Square => series::square_wave(time, frequency, terms),
            Waveform::Triangle => series::triangle_wave(time, frequency, terms),
            Waveform::Sawtooth => series::sawtooth_wave(time, frequency, terms),
            Waveform::FullRectified => series::full_rectified_sine(time, frequency, terms),
            Waveform::HalfRectified => series::half_rectified_sine(time, frequency, terms),
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = WaveformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|w| w.name() == key)
            .ok_or_else(|| WaveformError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Waveform {
    type Error = WaveformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Waveform> for String {
    fn from(waveform: Waveform) -> Self {
        waveform.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::grid::linspace;

    #[test]
    fn test_names_round_trip() {
        for wf in Waveform::ALL {
            assert_eq!(wf.name().parse::<Waveform>(), Ok(wf));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Square".parse::<Waveform>(), Ok(Waveform::Square));
        assert_eq!(" half_rec ".parse::<Waveform>(), Ok(Waveform::HalfRectified));
    }

    #[test]
    fn test_unknown_name() {
        let err = "noise".parse::<Waveform>().unwrap_err();
        assert_eq!(err, WaveformError::Unknown("noise".to_string()));
        assert!(err.to_string().contains("noise"));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Waveform::Sine.prev(), Waveform::HalfRectified);
        assert_eq!(Waveform::HalfRectified.next(), Waveform::Sine);
        for wf in Waveform::ALL {
            assert_eq!(wf.next().prev(), wf);
        }
    }

    #[test]
    fn test_dispatch_matches_free_functions() {
        let time = linspace(0.0, 0.05, 40);
        assert_eq!(
            Waveform::Sawtooth.synthesize(&time, 40.0, 9),
            series::sawtooth_wave(&time, 40.0, 9)
        );
        assert_eq!(
            Waveform::FullRectified.synthesize(&time, 40.0, 9),
            series::full_rectified_sine(&time, 40.0, 9)
        );
    }

    #[test]
    fn test_serde_uses_names() {
        let wf: Waveform = serde_yaml::from_str("full_rec").unwrap();
        assert_eq!(wf, Waveform::FullRectified);
        assert_eq!(serde_yaml::to_string(&Waveform::Triangle).unwrap().trim(), "triangle");
        assert!(serde_yaml::from_str::<Waveform>("pulse").is_err());
    }
}
