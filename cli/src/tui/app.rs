use hard75_core::{AppService, ChecklistTracker, Group, TrackerKind};
use ratatui::widgets::TableState;
use tracing::warn;

use crate::Repo;

pub enum InputMode {
    Normal,
    Renaming,
}

pub struct App {
    pub trackers: [ChecklistTracker<Repo>; 2],
    pub tab: usize,
    pub day: usize,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub message: Option<String>,
    pub username: String,
    pub day_counter: u32,
}

impl App {
    pub fn new(repo: Repo) -> App {
        let app = AppService::load(repo.clone());
        let trackers = [
            ChecklistTracker::load(repo.clone(), TrackerKind::Nutrition),
            ChecklistTracker::load(repo, TrackerKind::Workout),
        ];
        let mut state = TableState::default();
        state.select(Some(0));
        App {
            trackers,
            tab: 0,
            day: 0,
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            message: None,
            username: app.username().to_string(),
            day_counter: app.day_counter(),
        }
    }

    pub fn tracker(&self) -> &ChecklistTracker<Repo> {
        &self.trackers[self.tab]
    }

    pub fn group(&self) -> Option<&Group> {
        self.tracker().period().group(self.day).ok()
    }

    fn group_len(&self) -> usize {
        self.group().map(|g| g.len()).unwrap_or(0)
    }

    pub fn switch_tab(&mut self) {
        self.tab = (self.tab + 1) % self.trackers.len();
        self.message = None;
        self.clamp_selection();
    }

    pub fn next_day(&mut self) {
        let days = self.tracker().period().groups().len();
        self.day = (self.day + 1) % days;
        self.clamp_selection();
    }

    pub fn previous_day(&mut self) {
        let days = self.tracker().period().groups().len();
        self.day = if self.day == 0 { days - 1 } else { self.day - 1 };
        self.clamp_selection();
    }

    pub fn next(&mut self) {
        let len = self.group_len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.group_len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn clamp_selection(&mut self) {
        let len = self.group_len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }

    pub fn toggle_status(&mut self) {
        let Some(item) = self.state.selected() else { return };
        let (tab, day) = (self.tab, self.day);
        match self.trackers[tab].toggle(day, item) {
            Ok(outcome) if outcome.period_reset => {
                self.message = Some("Congratulations! Every item this week is done. Starting over.".to_string());
            }
            Ok(_) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    pub fn reset_day(&mut self) {
        let (tab, day) = (self.tab, self.day);
        let tracker = &mut self.trackers[tab];
        if let Err(e) = tracker.reset_group(day) {
            self.message = Some(e.to_string());
            return;
        }
        if let Err(e) = tracker.save() {
            warn!(error = %e, "failed to save after reset");
            self.message = Some(format!("Could not save: {}", e));
        }
    }

    pub fn delete_item(&mut self) {
        let Some(item) = self.state.selected() else { return };
        let (tab, day) = (self.tab, self.day);
        match self.trackers[tab].remove_item(day, item) {
            Ok(removed) => self.message = Some(format!("Removed {}", removed.name)),
            Err(e) => self.message = Some(e.to_string()),
        }
        self.clamp_selection();
    }

    pub fn enter_rename_mode(&mut self) {
        let Some(i) = self.state.selected() else { return };
        let Some(name) = self.group().and_then(|g| g.item(i)).map(|item| item.name.clone()) else { return };
        self.cursor_position = name.chars().count();
        self.input = name;
        self.input_mode = InputMode::Renaming;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_rename(&mut self) {
        let name = self.input.trim().to_string();
        if let (false, Some(item)) = (name.is_empty(), self.state.selected()) {
            let (tab, day) = (self.tab, self.day);
            if let Err(e) = self.trackers[tab].rename_item(day, item, name) {
                self.message = Some(e.to_string());
            }
        }
        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }
}
