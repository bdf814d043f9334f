//! Panel bar and panel line charts.

use tracing::debug;

use crate::cell::Cell;
use crate::chart::description::{PanelChart, SeriesChart};

/// Flat rows for a panel chart.
///
/// Each panel is flattened with `inner`; the header comes from the first
/// panel prefixed with an empty cell, and every row is prefixed with the
/// title of its panel. A chart without panels has no data.
///
/// Panels are expected to share one shape. A panel whose header differs in
/// width from the first (a multi-series panel after a single-series one) keeps
/// its own row width and is logged at `debug`.
pub fn panel_data(chart: &PanelChart, inner: fn(&SeriesChart) -> Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
    let mut data: Vec<Vec<Cell>> = Vec::new();
    for panel in &chart.panels {
        let mut rows = inner(panel).into_iter();
        let Some(header) = rows.next() else {
            continue;
        };
        match data.first().map(Vec::len) {
            None => data.push(prefixed(Cell::empty(), header)),
            Some(width) if width != header.len() + 1 => {
                debug!(
                    panel = panel.title.text(),
                    expected = width - 1,
                    actual = header.len(),
                    "panel shape differs from the first panel"
                );
            }
            Some(_) => {}
        }
        let title = Cell::from(panel.title.text());
        data.extend(rows.map(|row| prefixed(title.clone(), row)));
    }
    data
}

fn prefixed(first: Cell, row: Vec<Cell>) -> Vec<Cell> {
    let mut out = Vec::with_capacity(row.len() + 1);
    out.push(first);
    out.extend(row);
    out
}
