use super::ui;
use crate::core::request::ConvertRequest;
use crate::core::{ConversionPath, CurrencyConverter, PathConverter, RateEdge};
use anyhow::{Context, Result};
use comfy_table::Cell;
use tracing::info;

/// Arguments of a single conversion.
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub from: String,
    pub to: String,
    pub amount: f64,
    /// Extra rates applied to the store before converting.
    pub rates: Vec<RateEdge>,
    /// Drop every configured rate before applying `rates`.
    pub clear: bool,
    pub json: bool,
}

impl ConversionPath {
    pub fn display_as_table(&self) -> String {
        let mut output = format!(
            "Conversion: {}\n\n",
            ui::style_text(&format!("{} -> {}", self.from, self.to), ui::StyleType::Title)
        );

        if self.hops.is_empty() {
            output.push_str(&ui::style_text(
                "Same currency, no conversion needed.",
                ui::StyleType::Subtle,
            ));
        } else {
            let mut table = ui::new_styled_table();
            table.set_header(vec![
                ui::header_cell("Step"),
                ui::header_cell("From"),
                ui::header_cell("To"),
                ui::header_cell("Rate"),
                ui::header_cell("Amount"),
            ]);

            let mut running = self.amount;
            for (step, hop) in self.hops.iter().enumerate() {
                running *= hop.rate;
                table.add_row(vec![
                    Cell::new(step + 1),
                    Cell::new(&hop.from),
                    Cell::new(&hop.to),
                    ui::number_cell(hop.rate),
                    ui::number_cell(running),
                ]);
            }
            output.push_str(&table.to_string());
            output.push_str(&format!(
                "\n\nEffective rate: {}",
                ui::format_number(self.effective_rate())
            ));
        }

        output.push_str(&format!(
            "\nConverted Amount ({}): {}",
            ui::style_text(self.to.as_str(), ui::StyleType::TotalLabel),
            ui::style_text(
                &ui::format_number(self.converted_amount),
                ui::StyleType::TotalValue
            )
        ));
        output
    }
}

pub fn run(converter: &PathConverter, args: &ConvertArgs) -> Result<String> {
    let request = ConvertRequest::parse(&args.from, &args.to, args.amount)?;

    if args.clear {
        info!("Clearing configured rates");
        converter.clear_configuration();
    }
    if !args.rates.is_empty() {
        info!(count = args.rates.len(), "Applying command line rates");
        converter.update_configuration(&args.rates);
    }

    let path = converter.find_path(&request.from, &request.to, request.amount)?;
    info!(
        from = %path.from,
        to = %path.to,
        converted = path.converted_amount,
        "Conversion completed"
    );

    if args.json {
        serde_json::to_string_pretty(&path).context("Failed to serialize conversion")
    } else {
        Ok(path.display_as_table())
    }
}
