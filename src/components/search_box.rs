// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Free-text search input.
//!
//! The box only edits text. Submitting with `Enter` hands the term back to
//! the caller, `Esc` gives up focus and leaves the applied search as it was.

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchBoxAction {
    Submit(String),
    Cancel,
}

pub(crate) struct SearchBox {
    input: Input,
}

impl SearchBox {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchBoxAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => Some(SearchBoxAction::Submit(self.input.value().to_string())),
            KeyCode::Esc => Some(SearchBoxAction::Cancel),
            _ => {
                self.input.handle_event(event);
                None
            }
        }
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let border_colour = if focused { theme.accent_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Search brand or model ")
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);

        let text = if self.input.value().is_empty() && !focused {
            Paragraph::new("Press / to search").style(Style::default().fg(theme.muted_colour))
        } else {
            Paragraph::new(self.input.value()).style(Style::default().fg(theme.foreground_colour))
        };

        f.render_widget(text.block(block), area);

        if focused {
            let scroll = self.input.visual_scroll(inner.width.saturating_sub(1) as usize);
            let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + cursor, inner.y));
        }
    }
}
