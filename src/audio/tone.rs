use crate::series::grid::sample_indices;
use crate::types::waveform::Waveform;

/// Render a tone buffer for playback.
///
/// The series is evaluated at sample positions `0, 1, ..` with the frequency
/// expressed in cycles per sample, then converted to `f32` and scaled by
/// `volume`. No normalisation is applied, so series that overshoot 1.0
/// (square, sawtooth) are passed through as-is.
pub fn render_tone(
    waveform: Waveform,
    frequency: f64,
    terms: usize,
    sample_rate: f64,
    duration: f64,
    volume: f32,
) -> Vec<f32> {
    let count = (sample_rate * duration).ceil().max(0.0) as usize;
    let positions = sample_indices(count);

    waveform
        .synthesize(&positions, frequency / sample_rate, terms)
        .signal
        .into_iter()
        .map(|sample| sample as f32 * volume)
        .collect()
}
