//! Truncated Fourier series for periodic waveforms.
//!
//! The [`series`] module holds the math: one pure function per waveform,
//! each returning the evaluated signal and the harmonics that were summed.
//! [`Waveform`] dispatches to them by kind. The remaining modules are the
//! callers used by the `fourier-synth` binary: YAML configuration, tone
//! playback and a terminal view of the signal and its spectrum.

pub mod audio;
pub mod config;
pub mod series;
pub mod types;
pub mod ui;

pub use series::{Harmonic, Series, DEFAULT_TERMS};
pub use types::waveform::{Waveform, WaveformError};
