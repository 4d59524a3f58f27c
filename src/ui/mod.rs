//! Terminal user interface
//!
//! `UiState` holds what only matters on screen (focus, open menu, dialogs);
//! the timer itself lives in [`AppState`](crate::state::AppState).

pub mod input;
pub mod terminal;
pub mod view;

use std::collections::VecDeque;

use crate::{
    services::notification::{APP_TITLE, COMPLETION_MESSAGE},
    state::Notice,
};

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Entry,
    Start,
    Pause,
    Stop,
    Reset,
}

impl Focus {
    pub const BUTTONS: [Focus; 4] = [Focus::Start, Focus::Pause, Focus::Stop, Focus::Reset];

    pub fn next(self) -> Self {
        match self {
            Focus::Entry => Focus::Start,
            Focus::Start => Focus::Pause,
            Focus::Pause => Focus::Stop,
            Focus::Stop => Focus::Reset,
            Focus::Reset => Focus::Entry,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Entry => Focus::Reset,
            Focus::Start => Focus::Entry,
            Focus::Pause => Focus::Start,
            Focus::Stop => Focus::Pause,
            Focus::Reset => Focus::Stop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Entry => "Minutes",
            Focus::Start => "Start",
            Focus::Pause => "Pause",
            Focus::Stop => "Stop",
            Focus::Reset => "Reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    SaveState,
    LoadState,
    DarkTheme,
    LightTheme,
}

impl Menu {
    pub const ALL: [Menu; 2] = [Menu::File, Menu::Theme];

    pub fn title(self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Theme => "Theme",
        }
    }

    pub fn items(self) -> &'static [MenuItem] {
        match self {
            Menu::File => &[MenuItem::SaveState, MenuItem::LoadState],
            Menu::Theme => &[MenuItem::DarkTheme, MenuItem::LightTheme],
        }
    }

    fn other(self) -> Self {
        match self {
            Menu::File => Menu::Theme,
            Menu::Theme => Menu::File,
        }
    }
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::SaveState => "Save state",
            MenuItem::LoadState => "Load state",
            MenuItem::DarkTheme => "Dark theme",
            MenuItem::LightTheme => "Light theme",
        }
    }
}

/// An open drop-down menu and its highlighted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMenu {
    pub menu: Menu,
    pub selected: usize,
}

impl OpenMenu {
    pub fn new(menu: Menu) -> Self {
        Self { menu, selected: 0 }
    }

    pub fn selected_item(&self) -> MenuItem {
        self.menu.items()[self.selected]
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % self.menu.items().len();
    }

    pub fn up(&mut self) {
        let len = self.menu.items().len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn switch(&mut self) {
        *self = Self::new(self.menu.other());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// Modal message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: APP_TITLE.to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: APP_TITLE.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    pub menu: Option<OpenMenu>,
    dialogs: VecDeque<Dialog>,
    pub should_quit: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dialog currently on top, if any
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialogs.pop_front();
    }

    /// Queue a dialog per notice. Returns how many completions were among them.
    pub fn show_notices(&mut self, notices: Vec<Notice>) -> usize {
        let mut completions = 0;
        for notice in notices {
            let dialog = match notice {
                Notice::Completed => {
                    completions += 1;
                    Dialog::info(COMPLETION_MESSAGE)
                }
                Notice::Info(message) => Dialog::info(message),
                Notice::Error(message) => Dialog::error(message),
            };
            self.dialogs.push_back(dialog);
        }
        completions
    }
}
