use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::app::{App, Parameter};

/// Lowest amplitude shown on the log-scaled spectrum
const SPECTRUM_FLOOR: f64 = 1e-4;

/// Render the TUI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Parameters
            Constraint::Min(10),    // Time domain
            Constraint::Length(12), // Spectrum
            Constraint::Length(4),  // Status + help
        ])
        .split(frame.size());

    render_title(frame, chunks[0]);
    render_parameters(frame, chunks[1], app);
    render_signal(frame, chunks[2], app);
    render_spectrum(frame, chunks[3], app);
    render_help(frame, chunks[4], app);
}

/// Render title bar
fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Fourier Synth - Truncated Series Explorer")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, area);
}

/// Render the wave / frequency / terms selector row
fn render_parameters(frame: &mut Frame, area: Rect, app: &App) {
    let style_for = |param: Parameter| {
        if app.selected_param == param {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let line = Line::from(vec![
        Span::styled(format!("Wave: {}", app.waveform.label()), style_for(Parameter::Wave)),
        Span::raw("   |   "),
        Span::styled(format!("Frequency: {:.0} Hz", app.frequency), style_for(Parameter::Frequency)),
        Span::raw("   |   "),
        Span::styled(format!("Terms: {}", app.terms), style_for(Parameter::Terms)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(Block::default().title("Parameters").borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render the time-domain signal as a line chart
fn render_signal(frame: &mut Frame, area: Rect, app: &App) {
    let span = app.time_span();
    let (lo, hi) = app.series.signal_range().unwrap_or((-1.0, 1.0));
    let pad = ((hi - lo) * 0.1).max(0.1);
    let y_bounds = [lo - pad, hi + pad];

    let dataset = Dataset::default()
        .name(app.waveform.name())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&app.points);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().title("Time Domain").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Time [seconds]")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, span])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.4}", span / 2.0)),
                    Span::raw(format!("{:.4}", span)),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(vec![
                    Span::raw(format!("{:.2}", y_bounds[0])),
                    Span::raw(format!("{:.2}", y_bounds[1])),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Render harmonic amplitudes as bars on a log scale
fn render_spectrum(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title("Frequency [Hertz] (log amplitude, 1e-4 to 1)")
        .borders(Borders::ALL);

    let count = u16::try_from(app.series.harmonic_count().max(1)).unwrap_or(u16::MAX);
    let inner_width = block.inner(area).width;
    let bar_width = (inner_width / count).saturating_sub(1).clamp(1, 9);

    let bars: Vec<Bar> = app
        .series
        .harmonics()
        .map(|h| {
            Bar::default()
                .value(log_bar(h.amplitude))
                .label(Line::from(format!("{:.0}", h.frequency)))
                .text_value(String::new())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Blue))
        .max(100);

    frame.render_widget(chart, area);
}

/// Render status and key help
fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.status.is_empty() {
        Line::from(format!(
            "{} harmonics, highest {:.0} Hz",
            app.series.harmonic_count(),
            app.series.max_frequency().unwrap_or(0.0)
        ))
    } else {
        Line::from(Span::styled(app.status.clone(), Style::default().fg(Color::Yellow)))
    };

    let lines = vec![
        status,
        Line::from("←/→: Select  |  ↑/↓: Adjust  |  1-6: Wave  |  P: Play tone  |  Q: Quit"),
    ];

    let help = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(help, area);
}

/// Map an amplitude onto 0..=100 over the decades [1e-4, 1]
fn log_bar(amplitude: f64) -> u64 {
    let decades = -SPECTRUM_FLOOR.log10();
    let scaled = (amplitude.abs().max(SPECTRUM_FLOOR).log10() + decades) / decades * 100.0;
    scaled.round().clamp(0.0, 100.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FourierConfig;
    use crate::series::Series;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_log_bar_endpoints() {
        assert_eq!(log_bar(1.0), 100);
        assert_eq!(log_bar(1e-4), 0);
        assert_eq!(log_bar(1e-9), 0);
        assert_eq!(log_bar(0.0), 0);
    }

    #[test]
    fn test_log_bar_decades() {
        assert_eq!(log_bar(1e-2), 50);
        assert_eq!(log_bar(0.1), 75);
    }

    #[test]
    fn test_render_default_app() {
        let app = App::new(&FourierConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
    }

    #[test]
    fn test_render_spectrum_wider_than_u16() {
        // 65536 harmonics would wrap to zero bars if narrowed with `as u16`
        let mut app = App::new(&FourierConfig::default());
        app.series = Series {
            signal: vec![0.0; app.points.len()],
            frequencies: (0..65_536).map(|k| k as f64).collect(),
            amplitudes: vec![0.1; 65_536],
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
    }
}
