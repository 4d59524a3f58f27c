//! Keyboard handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::{Focus, Menu, MenuItem, OpenMenu, UiState};
use crate::{state::AppState, theme::Theme};

/// Apply one key press to the application.
///
/// A dialog swallows every key until dismissed, an open menu swallows every
/// key until closed, and the rest goes to the focused control.
pub fn handle_key(key: KeyEvent, app: &mut AppState, ui: &mut UiState) {
    debug!("Key: {:?}", key);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        ui.should_quit = true;
        return;
    }

    if ui.dialog().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            ui.dismiss_dialog();
        }
        return;
    }

    if let Some(open) = ui.menu.as_mut() {
        match key.code {
            KeyCode::Up => open.up(),
            KeyCode::Down => open.down(),
            KeyCode::Left | KeyCode::Right => open.switch(),
            KeyCode::Enter => {
                let item = open.selected_item();
                ui.menu = None;
                apply_menu_item(item, app);
            }
            KeyCode::Esc | KeyCode::F(1) | KeyCode::F(2) => ui.menu = None,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::F(1) => ui.menu = Some(OpenMenu::new(Menu::File)),
        KeyCode::F(2) => ui.menu = Some(OpenMenu::new(Menu::Theme)),
        KeyCode::Char('s') if ctrl => app.save_state(),
        KeyCode::Char('o') if ctrl => app.load_state(),
        KeyCode::Tab => ui.focus = ui.focus.next(),
        KeyCode::BackTab => ui.focus = ui.focus.prev(),
        KeyCode::Enter => activate(ui.focus, app),
        KeyCode::Char(c) if ui.focus == Focus::Entry && !ctrl => app.entry.push(c),
        KeyCode::Backspace if ui.focus == Focus::Entry => {
            app.entry.pop();
        }
        KeyCode::Left if ui.focus != Focus::Entry => ui.focus = ui.focus.prev(),
        KeyCode::Right if ui.focus != Focus::Entry => ui.focus = ui.focus.next(),
        _ => {}
    }
}

/// Press the focused control. Enter on the entry starts the timer.
fn activate(focus: Focus, app: &mut AppState) {
    match focus {
        Focus::Entry | Focus::Start => app.start(),
        Focus::Pause => app.pause(),
        Focus::Stop => app.stop(),
        Focus::Reset => app.reset(),
    }
}

fn apply_menu_item(item: MenuItem, app: &mut AppState) {
    match item {
        MenuItem::SaveState => app.save_state(),
        MenuItem::LoadState => app.load_state(),
        MenuItem::DarkTheme => app.set_theme(Theme::Dark),
        MenuItem::LightTheme => app.set_theme(Theme::Light),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::ManualClock, config::Config, state::Notice};
    use chrono::{Duration, NaiveDate};

    fn setup() -> (AppState, UiState, ManualClock) {
        let clock = ManualClock::new(
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        );
        let app = AppState::new(&Config::default(), Box::new(clock.clone()));
        (app, UiState::new(), clock)
    }

    fn press(code: KeyCode, app: &mut AppState, ui: &mut UiState) {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), app, ui);
    }

    fn type_text(text: &str, app: &mut AppState, ui: &mut UiState) {
        for c in text.chars() {
            press(KeyCode::Char(c), app, ui);
        }
    }

    #[test]
    fn typing_then_enter_starts_a_countdown() {
        let (mut app, mut ui, _) = setup();
        type_text("25", &mut app, &mut ui);
        press(KeyCode::Enter, &mut app, &mut ui);
        assert!(app.timer().running);
        assert_eq!(app.timer_label, "00:25:00");
    }

    #[test]
    fn backspace_edits_the_entry() {
        let (mut app, mut ui, _) = setup();
        type_text("123", &mut app, &mut ui);
        press(KeyCode::Backspace, &mut app, &mut ui);
        assert_eq!(app.entry, "12");
    }

    #[test]
    fn buttons_are_reached_with_tab() {
        let (mut app, mut ui, clock) = setup();
        press(KeyCode::Tab, &mut app, &mut ui);
        assert_eq!(ui.focus, Focus::Start);
        press(KeyCode::Enter, &mut app, &mut ui);
        assert!(app.timer().running);

        clock.advance(Duration::seconds(2));
        press(KeyCode::Tab, &mut app, &mut ui);
        press(KeyCode::Enter, &mut app, &mut ui);
        assert!(app.timer().paused);

        press(KeyCode::Right, &mut app, &mut ui);
        press(KeyCode::Right, &mut app, &mut ui);
        assert_eq!(ui.focus, Focus::Reset);
        press(KeyCode::Enter, &mut app, &mut ui);
        assert!(!app.timer().paused);
        assert_eq!(app.timer_label, "00:00:00");
    }

    #[test]
    fn letters_do_not_edit_entry_when_a_button_has_focus() {
        let (mut app, mut ui, _) = setup();
        press(KeyCode::Tab, &mut app, &mut ui);
        type_text("abc", &mut app, &mut ui);
        assert!(app.entry.is_empty());
    }

    #[test]
    fn theme_menu_switches_theme() {
        let (mut app, mut ui, _) = setup();
        press(KeyCode::F(2), &mut app, &mut ui);
        press(KeyCode::Down, &mut app, &mut ui);
        press(KeyCode::Enter, &mut app, &mut ui);
        assert_eq!(app.theme, Theme::Light);
        assert!(ui.menu.is_none());
    }

    #[test]
    fn dialog_blocks_input_until_dismissed() {
        let (mut app, mut ui, _) = setup();
        ui.show_notices(vec![Notice::Info("hello".to_string())]);

        type_text("5", &mut app, &mut ui);
        assert!(app.entry.is_empty());

        press(KeyCode::Esc, &mut app, &mut ui);
        assert!(ui.dialog().is_none());
        type_text("5", &mut app, &mut ui);
        assert_eq!(app.entry, "5");
    }

    #[test]
    fn ctrl_q_quits_even_with_a_dialog_open() {
        let (mut app, mut ui, _) = setup();
        ui.show_notices(vec![Notice::Completed]);
        handle_key(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            &mut app,
            &mut ui,
        );
        assert!(ui.should_quit);
    }
}
