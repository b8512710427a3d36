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

//! Car details popup.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use carfinder::model::Car;

use crate::{
    render::icons::{FAVOURITE, NOT_FAVOURITE},
    theme::Theme,
    util::format::format_price,
};

pub(crate) fn draw_details(f: &mut Frame, area: Rect, car: &Car, saved: bool, theme: &Theme) {
    let popup = centered(area, 70, 18);

    let label = Style::default().fg(theme.muted_colour);
    let value = Style::default().fg(theme.foreground_colour);

    let row = |name: &'static str, text: String| {
        Line::from(vec![Span::styled(format!("{name:<14}"), label), Span::styled(text, value)])
    };

    let saved_line = if saved {
        Line::from(Span::styled(format!("{FAVOURITE} Saved to wishlist"), Style::default().fg(theme.saved_fg)))
    } else {
        Line::from(Span::styled(format!("{NOT_FAVOURITE} Not saved"), label))
    };

    let mut lines = vec![
        Line::from(Span::styled(format_price(car.price), Style::default().fg(theme.table_price_fg).bold())),
        Line::default(),
        row("Year", car.year.to_string()),
        row("Fuel type", car.fuel_type.clone()),
        row("Seats", car.seating_capacity.to_string()),
        row("Transmission", car.transmission.clone()),
        row("Image", car.image.clone()),
        Line::default(),
    ];
    lines.extend(car.description.lines().map(|l| Line::styled(l.to_string(), value)));
    lines.push(Line::default());
    lines.push(saved_line);
    lines.push(Line::styled("Space save/unsave  Esc close", label));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .title(format!(" {} ", car.title()))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.background_colour));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
