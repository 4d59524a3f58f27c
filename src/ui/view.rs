//! Screen layout and drawing

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::{DialogKind, Focus, Menu, UiState};
use crate::{state::AppState, theme::Palette};

const HELP: &str =
    "Tab focus · Enter press · F1 File · F2 Theme · Ctrl-S save · Ctrl-O load · Ctrl-Q quit";

pub fn render(f: &mut Frame, app: &AppState, ui: &UiState) {
    let palette = app.theme.palette();
    let base = Style::default().bg(palette.background).fg(palette.foreground);
    f.render_widget(Block::default().style(base), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu bar
            Constraint::Min(1),
            Constraint::Length(3), // Timer
            Constraint::Length(1), // Current time
            Constraint::Length(1),
            Constraint::Length(3), // Entry
            Constraint::Length(3), // Buttons
            Constraint::Min(1),
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_menu_bar(f, chunks[0], ui, &palette);

    let timer = Paragraph::new(app.timer_label.as_str())
        .style(base.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(base),
        );
    f.render_widget(timer, centered_width(30, chunks[2]));

    let clock = Paragraph::new(app.clock_label.as_str())
        .style(base)
        .alignment(Alignment::Center);
    f.render_widget(clock, chunks[3]);

    render_entry(f, centered_width(30, chunks[5]), app, ui, &palette);
    render_buttons(f, centered_width(60, chunks[6]), ui, &palette);

    let help = Paragraph::new(HELP)
        .style(base.add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[8]);

    if let Some(open) = ui.menu {
        render_menu(f, chunks[0], open.menu, open.selected, &palette);
    }

    if let Some(dialog) = ui.dialog() {
        let area = centered_rect(50, 30, f.area());
        let border = match dialog.kind {
            DialogKind::Info => base,
            DialogKind::Error => base.fg(Color::Red),
        };
        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(dialog.message.as_str()),
            Line::from(""),
            Line::from(Span::styled("[ OK ]", base.add_modifier(Modifier::REVERSED))),
        ])
        .style(base)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", dialog.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }
}

fn render_menu_bar(f: &mut Frame, area: Rect, ui: &UiState, palette: &Palette) {
    let bar = button_style(palette, false);
    let spans: Vec<Span> = Menu::ALL
        .iter()
        .map(|menu| {
            let open = ui.menu.is_some_and(|m| m.menu == *menu);
            Span::styled(format!(" {} ", menu.title()), button_style(palette, open))
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
}

fn render_menu(f: &mut Frame, bar: Rect, menu: Menu, selected: usize, palette: &Palette) {
    let offset: u16 = Menu::ALL
        .iter()
        .take_while(|m| **m != menu)
        .map(|m| m.title().len() as u16 + 2)
        .sum();
    let items = menu.items();
    let width = items.iter().map(|i| i.label().len() as u16).max().unwrap_or(0) + 4;
    let area = Rect {
        x: bar.x + offset,
        y: bar.y + 1,
        width,
        height: items.len() as u16 + 2,
    }
    .intersection(f.area());

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Line::from(Span::styled(
                format!(" {} ", item.label()),
                button_style(palette, i == selected),
            ))
        })
        .collect();
    let list = Paragraph::new(lines).style(button_style(palette, false)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(button_style(palette, false)),
    );
    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

fn render_entry(f: &mut Frame, area: Rect, app: &AppState, ui: &UiState, palette: &Palette) {
    let focused = ui.focus == Focus::Entry;
    let text = if focused {
        format!("{}_", app.entry)
    } else {
        app.entry.clone()
    };
    let border = if focused {
        Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.foreground)
    };
    let entry = Paragraph::new(text)
        .style(Style::default().bg(palette.background).fg(palette.foreground))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Focus::Entry.label())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(entry, area);
}

fn render_buttons(f: &mut Frame, area: Rect, ui: &UiState, palette: &Palette) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (button, cell) in Focus::BUTTONS.iter().zip(cells.iter()) {
        let style = button_style(palette, ui.focus == *button);
        let widget = Paragraph::new(button.label())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        f.render_widget(widget, *cell);
    }
}

fn button_style(palette: &Palette, highlighted: bool) -> Style {
    let style = Style::default()
        .bg(palette.button_background)
        .fg(palette.button_foreground);
    if highlighted {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style
    }
}

/// Horizontally center a fixed-width strip inside `r`
fn centered_width(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect {
        x: r.x + (r.width - width) / 2,
        width,
        ..r
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::ManualClock, config::Config, state::Notice, ui::OpenMenu};
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;

    fn app() -> AppState {
        let clock = ManualClock::new(
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 30, 15)
                .unwrap(),
        );
        AppState::new(&Config::default(), Box::new(clock))
    }

    fn screen(app: &AppState, ui: &UiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app, ui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_labels_buttons_and_menus() {
        let text = screen(&app(), &UiState::new());
        for needle in [
            "00:00:00",
            "Current Time: 09:30:15",
            "Start",
            "Pause",
            "Stop",
            "Reset",
            "File",
            "Theme",
        ] {
            assert!(text.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn draws_open_menu_and_dialog() {
        let mut ui = UiState::new();
        ui.menu = Some(OpenMenu::new(Menu::File));
        ui.show_notices(vec![Notice::Completed]);
        let text = screen(&app(), &ui);
        assert!(text.contains("Save state"));
        assert!(text.contains("Time's up!"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut ui = UiState::new();
        ui.menu = Some(OpenMenu::new(Menu::Theme));
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        terminal.draw(|f| render(f, &app(), &ui)).unwrap();
    }
}
