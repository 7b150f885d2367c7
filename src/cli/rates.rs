use super::ui;
use crate::store::RateStore;
use anyhow::{Context, Result};
use comfy_table::Cell;

/// Lists every configured rate, as a table or as JSON.
pub fn run(store: &RateStore, json: bool) -> Result<String> {
    let edges = store.edges();

    if json {
        return serde_json::to_string_pretty(&edges).context("Failed to serialize rates");
    }

    if edges.is_empty() {
        return Ok(ui::style_text("No rates configured.", ui::StyleType::Subtle));
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Rate"),
    ]);
    for edge in &edges {
        table.add_row(vec![
            Cell::new(&edge.from),
            Cell::new(&edge.to),
            ui::number_cell(edge.rate),
        ]);
    }

    Ok(format!(
        "{}\n\n{}\n{} rates across {} source currencies",
        ui::style_text("Configured Rates", ui::StyleType::Title),
        table,
        edges.len(),
        store.currency_count()
    ))
}
