use super::ui;
use crate::core::currency::{BASE_CURRENCY, Currency};
use crate::core::format::{format_amount, format_timestamp};
use crate::core::{ExchangeQuote, QuoteProvider};
use anyhow::{Context, Result};
use comfy_table::Cell;

impl ExchangeQuote {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Pair"),
            ui::header_cell("Quoted"),
            ui::header_cell(&format!("Rate (per {BASE_CURRENCY})")),
        ]);

        for currency in Currency::ALL {
            let rate = self.rate(currency);
            table.add_row(vec![
                Cell::new(currency.label()),
                Cell::new(currency.pair_key()),
                ui::number_cell(&rate.to_string()),
                ui::number_cell(&format_amount(rate)),
            ]);
        }

        let mut output = format!(
            "Live rates at {}\n\n",
            ui::style_text(
                &format!("{} UTC", format_timestamp(self.timestamp)),
                ui::StyleType::Title
            )
        );
        output.push_str(&table.to_string());
        output
    }
}

pub async fn run(provider: &(dyn QuoteProvider + Send + Sync)) -> Result<()> {
    let spinner = ui::new_spinner("Fetching live rates...");
    let quote = provider.fetch_quotes().await;
    spinner.finish_and_clear();

    let quote = quote.context("Failed to fetch exchange rates")?;
    println!("{}", quote.display_as_table());
    Ok(())
}
