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

//! Render the filter bar.
//!
//! One line summarising the active filters and sort order. Unset filters are
//! shown as "Any" so the user can see which keys will change something.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use carfinder::{model::FilterCriteria, query::CarQuery};

use crate::{App, render::icons::SORT, util::format::format_price};

pub(crate) fn draw_filters(f: &mut Frame, area: Rect, app: &App) {
    let label = Style::default().fg(app.theme.muted_colour);
    let value = Style::default().fg(app.theme.accent_colour);

    let mut spans = Vec::new();
    for (name, text) in filter_summary(&app.query) {
        spans.push(Span::styled(format!(" {name} "), label));
        spans.push(Span::styled(text, value));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn filter_summary(query: &CarQuery) -> Vec<(&'static str, String)> {
    let FilterCriteria {
        brand,
        min_price,
        max_price,
        fuel_type,
        seating_capacity,
    } = &query.filters;

    let any = || "Any".to_string();

    vec![
        ("Brand", brand.clone().unwrap_or_else(any)),
        ("Fuel", fuel_type.clone().unwrap_or_else(any)),
        ("Seats", seating_capacity.map(|s| s.to_string()).unwrap_or_else(any)),
        ("Min", min_price.map(format_price).unwrap_or_else(any)),
        ("Max", max_price.map(format_price).unwrap_or_else(any)),
        (SORT, sort_label(query)),
    ]
}

fn sort_label(query: &CarQuery) -> String {
    match &query.sort {
        Some(spec) => spec.label().map(str::to_string).unwrap_or_else(|| spec.to_string()),
        None => "Unsorted".to_string(),
    }
}
