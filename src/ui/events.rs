use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::app::App;
use crate::types::waveform::Waveform;

/// Handle keyboard events and update app state
pub fn handle_events(app: &mut App) -> anyhow::Result<()> {
    // Poll for events with timeout
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, key);
            }
        }
    }
    Ok(())
}

/// Process individual key press
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Navigate parameters (vim-style: h=left, l=right)
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => app.next_parameter(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => app.prev_parameter(),

        // Adjust values (vim-style: k=up, j=down)
        KeyCode::Char('k') | KeyCode::Up => app.increase_value(),
        KeyCode::Char('j') | KeyCode::Down => app.decrease_value(),

        KeyCode::Char('p') | KeyCode::Char(' ') => app.request_play(),

        // Quick waveform selection
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            app.select_waveform(Waveform::ALL[index]);
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FourierConfig;
    use crate::ui::app::Parameter;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quick_select() {
        let mut app = App::new(&FourierConfig::default());
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.waveform, Waveform::FullRectified);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.waveform, Waveform::Square);
    }

    #[test]
    fn test_navigation_and_adjust() {
        let mut app = App::new(&FourierConfig::default());
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_param, Parameter::Frequency);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.frequency, 60.0);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.frequency, 50.0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&FourierConfig::default());
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::new(&FourierConfig::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
