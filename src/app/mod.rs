pub mod actions;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::tui::{self, theme::Theme, TuiTerminal};
use anyhow::Context;
use std::time::Duration;

use state::PreviewState;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Interactive palette preview.
pub struct App<'a> {
    cfg: &'a Config,
    theme: &'a Theme,
    state: PreviewState,
}

impl<'a> App<'a> {
    pub fn new(cfg: &'a Config, theme: &'a Theme) -> Self {
        Self {
            cfg,
            theme,
            state: PreviewState::default(),
        }
    }

    pub fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        tracing::debug!("preview started");
        while !self.state.should_quit {
            tui::draw(terminal, self.cfg, self.theme, &self.state)?;
            let Some(ev) = input::poll_event(POLL_INTERVAL).context("read terminal event")? else {
                continue;
            };
            if let Some(action) = input::map_input_to_action(ev) {
                self.state.apply(action);
            }
        }
        Ok(())
    }
}
