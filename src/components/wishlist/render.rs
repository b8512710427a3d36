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

//! UI rendering logic for the wishlist view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::WishlistView, render::icons::FAVOURITE, theme::Theme};

impl WishlistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header_text = format!("{FAVOURITE} Wishlist | {} saved", self.cars().len());
        let header = Paragraph::new(header_text)
            .style(Style::default().fg(theme.foreground_colour))
            .block(header_block);
        f.render_widget(header, chunks[0]);

        if self.cars().is_empty() {
            let empty = Paragraph::new("Your wishlist is empty. Press space on a car to save it.")
                .style(Style::default().fg(theme.muted_colour))
                .block(Block::default().padding(Padding::uniform(1)));
            f.render_widget(empty, chunks[1]);
            return;
        }

        // Everything listed here is saved.
        self.car_table.draw(f, chunks[1], theme, |_| true);
    }
}
