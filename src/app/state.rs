use crate::tui::theme::Role;

use super::actions::Action;

/// State of the palette preview screen.
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    /// Index into `Role::ALL`
    pub selected: usize,
    pub show_help: bool,
    pub should_quit: bool,
}

impl PreviewState {
    pub fn selected_role(&self) -> Role {
        Role::ALL[self.selected.min(Role::ALL.len() - 1)]
    }

    pub fn apply(&mut self, action: Action) {
        let last = Role::ALL.len() - 1;
        match action {
            Action::Quit => self.should_quit = true,
            Action::Up => self.selected = if self.selected == 0 { last } else { self.selected - 1 },
            Action::Down => self.selected = if self.selected >= last { 0 } else { self.selected + 1 },
            Action::GoTop => self.selected = 0,
            Action::GoBottom => self.selected = last,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Resize => {}
        }
    }
}
