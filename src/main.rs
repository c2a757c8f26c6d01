use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, thread, time::Duration};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fourier_synth::audio::{list_audio_devices, play_tone};
use fourier_synth::config::FourierConfig;
use fourier_synth::series::{grid::plot_grid, terms_from};
use fourier_synth::ui::{app::App, events, render};
use fourier_synth::Waveform;

/// Explore truncated Fourier series of classic waveforms
#[derive(Parser, Debug)]
#[command(name = "fourier-synth")]
#[command(about = "Truncated Fourier series explorer with tone playback", long_about = None)]
struct Args {
    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Waveform: sine, square, triangle, sawtooth, full_rec, half_rec
    #[arg(short = 'w', long = "wave")]
    wave: Option<Waveform>,

    /// Fundamental frequency in Hz
    #[arg(short = 'f', long = "frequency")]
    frequency: Option<f64>,

    /// Number of series terms (fractional values are truncated)
    #[arg(short = 'n', long = "terms")]
    terms: Option<f64>,

    /// Play the tone once
    #[arg(short = 'p', long = "play")]
    play: bool,

    /// Print the harmonic table instead of starting the terminal view
    #[arg(long = "print")]
    print: bool,

    /// List available audio output devices and exit
    #[arg(short = 'l', long = "list")]
    list_devices: bool,
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();

    if args.list_devices {
        println!("Available Audio Output Devices:");
        for (i, device) in list_audio_devices()?.iter().enumerate() {
            println!("  {}: {}", i, device);
        }
        return Ok(());
    }

    let config = build_config(&args)?;

    if args.print {
        print_series(&config);
        if args.play {
            play_tone(config.wave, config.frequency, config.terms, &config.tone)?;
        }
        return Ok(());
    }

    run_ui(&config, args.play)
}

/// Log to stderr, filtered by RUST_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the config file if given, then apply command line overrides
fn build_config(args: &Args) -> Result<FourierConfig> {
    let mut config = match &args.config {
        Some(path) => FourierConfig::load(path)?,
        None => FourierConfig::default(),
    };

    if let Some(wave) = args.wave {
        config.wave = wave;
    }
    if let Some(frequency) = args.frequency {
        config.frequency = frequency;
    }
    if let Some(terms) = args.terms {
        config.terms = terms_from(terms);
    }

    config.validate()?;
    Ok(config)
}

/// Print the harmonic table and signal extent for the configured series
fn print_series(config: &FourierConfig) {
    let time = plot_grid(config.frequency, config.plot.samples, config.plot.periods);
    let series = config.wave.synthesize(&time, config.frequency, config.terms);

    println!(
        "{} at {} Hz, {} terms",
        config.wave.label(),
        config.frequency,
        config.terms
    );
    println!("{:>5}  {:>12}  {:>12}", "k", "freq [Hz]", "amplitude");
    for (k, harmonic) in series.harmonics().enumerate() {
        println!("{:>5}  {:>12.3}  {:>12.6}", k + 1, harmonic.frequency, harmonic.amplitude);
    }

    if let Some((lo, hi)) = series.signal_range() {
        println!("signal: {} samples, min {:.6}, max {:.6}", series.signal.len(), lo, hi);
    }
}

/// Run the terminal view until the user quits
fn run_ui(config: &FourierConfig, play_on_start: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    if play_on_start {
        app.request_play();
    }

    let result = run_ui_loop(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_ui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &FourierConfig,
) -> Result<()> {
    let (done_tx, done_rx) = crossbeam_channel::unbounded::<Result<(), String>>();

    loop {
        while let Ok(result) = done_rx.try_recv() {
            if let Err(err) = &result {
                warn!("tone playback failed: {}", err);
            }
            app.playback_finished(result);
        }

        terminal.draw(|f| render::render(f, app))?;

        events::handle_events(app)?;

        if app.take_play_request() {
            app.playback_started();

            let (wave, frequency, terms) = (app.waveform, app.frequency, app.terms);
            let tone = config.tone.clone();
            let done_tx = done_tx.clone();
            thread::spawn(move || {
                let result = play_tone(wave, frequency, terms, &tone).map_err(|err| format!("{:#}", err));
                let _ = done_tx.send(result);
            });
        }

        if app.should_quit {
            info!("quitting");
            break;
        }

        // ~60 FPS
        thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
