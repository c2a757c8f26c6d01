use tracing::debug;

use crate::config::{FourierConfig, PlotConfig, MAX_TERMS};
use crate::series::grid::plot_grid;
use crate::series::Series;
use crate::types::waveform::Waveform;

const FREQUENCY_STEP: f64 = 10.0;
const MIN_FREQUENCY: f64 = 10.0;
const MAX_FREQUENCY: f64 = 20_000.0;

/// Parameter currently focused for editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Wave,
    Frequency,
    Terms,
}

/// UI application state
/// Holds the editable parameters and the series computed from them
pub struct App {
    /// Current waveform
    pub waveform: Waveform,
    /// Fundamental frequency in Hz
    pub frequency: f64,
    /// Number of series terms
    pub terms: usize,
    /// Time-domain grid settings
    pub plot: PlotConfig,
    /// Currently selected parameter for editing
    pub selected_param: Parameter,
    /// Series evaluated on the plot grid for the current parameters
    pub series: Series,
    /// (time, value) points of the current signal for charting
    pub points: Vec<(f64, f64)>,
    /// Last status message shown under the charts
    pub status: String,
    /// Whether a tone is currently playing
    pub playing: bool,
    /// Whether playback was requested since the last loop iteration
    play_requested: bool,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create app from a loaded configuration
    pub fn new(config: &FourierConfig) -> Self {
        let mut app = Self {
            waveform: config.wave,
            frequency: config.frequency,
            terms: config.terms,
            plot: config.plot.clone(),
            selected_param: Parameter::Wave,
            series: Series::default(),
            points: Vec::new(),
            status: String::new(),
            playing: false,
            play_requested: false,
            should_quit: false,
        };
        app.recompute();
        app
    }

    /// Re-evaluate the series for the current parameters
    pub fn recompute(&mut self) {
        let time = plot_grid(self.frequency, self.plot.samples, self.plot.periods);
        self.series = self.waveform.synthesize(&time, self.frequency, self.terms);
        self.points = time.into_iter().zip(self.series.signal.iter().copied()).collect();

        debug!(
            wave = %self.waveform,
            frequency = self.frequency,
            terms = self.terms,
            harmonics = self.series.harmonic_count(),
            "recomputed series"
        );
    }

    /// Time span covered by the plot grid, in seconds
    pub fn time_span(&self) -> f64 {
        self.plot.periods / self.frequency
    }

    /// Cycle to next parameter
    pub fn next_parameter(&mut self) {
        self.selected_param = match self.selected_param {
            Parameter::Wave => Parameter::Frequency,
            Parameter::Frequency => Parameter::Terms,
            Parameter::Terms => Parameter::Wave,
        };
    }

    /// Cycle to previous parameter
    pub fn prev_parameter(&mut self) {
        self.selected_param = match self.selected_param {
            Parameter::Wave => Parameter::Terms,
            Parameter::Frequency => Parameter::Wave,
            Parameter::Terms => Parameter::Frequency,
        };
    }

    /// Increase selected parameter value
    pub fn increase_value(&mut self) {
        match self.selected_param {
            Parameter::Wave => self.waveform = self.waveform.next(),
            Parameter::Frequency => {
                self.frequency = step_up(self.frequency, FREQUENCY_STEP, MAX_FREQUENCY);
            }
            Parameter::Terms => {
                if self.terms < MAX_TERMS {
                    self.terms += 1;
                }
            }
        }
        self.recompute();
    }

    /// Decrease selected parameter value
    pub fn decrease_value(&mut self) {
        match self.selected_param {
            Parameter::Wave => self.waveform = self.waveform.prev(),
            Parameter::Frequency => {
                self.frequency = step_down(self.frequency, FREQUENCY_STEP, MIN_FREQUENCY);
            }
            Parameter::Terms => {
                if self.terms > 1 {
                    self.terms -= 1;
                }
            }
        }
        self.recompute();
    }

    /// Jump straight to a waveform
    pub fn select_waveform(&mut self, waveform: Waveform) {
        if self.waveform != waveform {
            self.waveform = waveform;
            self.recompute();
        }
    }

    /// Ask the main loop to play the current tone
    pub fn request_play(&mut self) {
        if !self.playing {
            self.play_requested = true;
        }
    }

    /// Consume a pending play request
    pub fn take_play_request(&mut self) -> bool {
        std::mem::take(&mut self.play_requested)
    }

    /// Mark playback as started
    pub fn playback_started(&mut self) {
        self.playing = true;
        self.status = format!(
            "Playing {} at {:.0} Hz, {} terms",
            self.waveform.label(),
            self.frequency,
            self.terms
        );
    }

    /// Record the outcome of a playback
    pub fn playback_finished(&mut self, result: Result<(), String>) {
        self.playing = false;
        self.status = match result {
            Ok(()) => String::new(),
            Err(err) => format!("Playback failed: {}", err),
        };
    }

    /// Mark app for quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Add `step`, stopping at `max`; a value already past `max` stays put
fn step_up(value: f64, step: f64, max: f64) -> f64 {
    if value >= max { value } else { (value + step).min(max) }
}

/// Subtract `step`, stopping at `min`; a value already below `min` stays put
fn step_down(value: f64, step: f64, min: f64) -> f64 {
    if value <= min { value } else { (value - step).max(min) }
}
