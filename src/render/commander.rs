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

//! Render the command line.
//!
//! While the commander is active this shows its input and cursor. Otherwise
//! the line carries the latest status message, or a short key reference.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, MainView};

const LISTING_HINTS: &str =
    "/ search  b/f/c filters  [ ] { } price  x reset  o sort  n/p page  w wishlist  t theme  : command  q quit";
const WISHLIST_HINTS: &str = "space remove  enter details  w listing  t theme  : command  q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let base = Style::default().bg(app.theme.status_bg);

    let line = if commander.active() {
        Paragraph::new(format!(":{}", commander.input.value())).style(base.fg(app.theme.foreground_colour))
    } else if let Some(status) = &app.status {
        Paragraph::new(status.as_str()).style(base.fg(app.theme.accent_colour))
    } else {
        let hints = match app.main_view {
            MainView::Listing => LISTING_HINTS,
            MainView::Wishlist => WISHLIST_HINTS,
        };
        Paragraph::new(hints).style(base.fg(app.theme.muted_colour))
    };

    f.render_widget(line, container[0]);

    if commander.active() {
        let cursor_x = container[0].x + 1 + commander.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
