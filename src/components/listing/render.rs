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

//! UI rendering logic for the listing view.
//!
//! Draws a header summarising the result set and the current page, then
//! delegates the rows to the car table.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use carfinder::{model::Pagination, storage::StoragePort, wishlist::Wishlist};

use crate::{components::ListingView, theme::Theme};

impl ListingView {
    pub(crate) fn draw<P: StoragePort>(
        &mut self,
        f: &mut Frame,
        area: Rect,
        pagination: &Pagination,
        loading: bool,
        wishlist: &Wishlist<P>,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header_text = listing_header(pagination, loading);
        let header = Paragraph::new(header_text)
            .style(Style::default().fg(theme.foreground_colour))
            .block(header_block);
        f.render_widget(header, chunks[0]);

        if self.cars().is_empty() && !loading {
            let empty = Paragraph::new("No cars found. Try adjusting your filters or search.")
                .style(Style::default().fg(theme.muted_colour))
                .block(Block::default().padding(Padding::uniform(1)));
            f.render_widget(empty, chunks[1]);
            return;
        }

        self.car_table.draw(f, chunks[1], theme, |id| wishlist.contains(id));
    }
}

fn listing_header(pagination: &Pagination, loading: bool) -> String {
    let mut text = format!("Cars | {} results", pagination.total_items);

    if pagination.total_pages > 0 {
        let prev = if pagination.has_prev() { "< " } else { "" };
        let next = if pagination.has_next() { " >" } else { "" };
        let _ = write!(
            text,
            " | {prev}Page {} of {}{next}",
            pagination.page, pagination.total_pages
        );
    }

    if loading {
        text.push_str(" | Loading...");
    }

    text
}
