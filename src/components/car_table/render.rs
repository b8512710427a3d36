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

//! UI rendering logic for the car table.
//!
//! This module handles the visual representation of car rows, including
//! column layout, the saved-to-wishlist marker, highlighting and theme
//! application using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::CarTable,
    render::icons::{FAVOURITE, NOT_FAVOURITE},
    theme::Theme,
    util::format::format_price,
};

impl CarTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, is_saved: impl Fn(u32) -> bool) {
        let rows = self.cars.iter().map(|car| {
            let marker = if is_saved(car.id) {
                Line::from(FAVOURITE).style(Style::default().fg(theme.saved_fg))
            } else {
                Line::from(NOT_FAVOURITE).style(Style::default().fg(theme.muted_colour))
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(Line::from(car.brand.as_str()).style(Style::default().fg(theme.table_brand_fg))),
                Cell::from(Line::from(car.model.as_str()).style(Style::default().fg(theme.table_model_fg))),
                Cell::from(Line::from(car.year.to_string()).style(Style::default().fg(theme.table_year_fg))),
                Cell::from(
                    Line::from(format_price(car.price))
                        .style(Style::default().fg(theme.table_price_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(Line::from(car.fuel_type.as_str()).style(Style::default().fg(theme.table_detail_fg))),
                Cell::from(
                    Line::from(car.seating_capacity.to_string())
                        .style(Style::default().fg(theme.table_detail_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(Line::from(car.transmission.as_str()).style(Style::default().fg(theme.table_detail_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(20),
                Constraint::Percentage(22),
                Constraint::Length(5),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(6),
                Constraint::Min(10),
            ],
        )
        .column_spacing(2)
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Brand"),
                Cell::from("Model"),
                Cell::from("Year"),
                Cell::from(Line::from("Price").alignment(Alignment::Right)),
                Cell::from("Fuel"),
                Cell::from(Line::from("Seats").alignment(Alignment::Right)),
                Cell::from("Transmission"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
