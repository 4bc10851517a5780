use super::ui;
use crate::core::convert::VALID_AMOUNT_RANGE;
use crate::core::currency::BASE_CURRENCY;
use crate::core::format::{format_amount, format_timestamp};
use crate::core::{ConversionRequest, ConversionResult, ExchangeQuote, QuoteProvider};
use anyhow::{Context, Result};
use tracing::debug;

impl ConversionResult {
    pub fn display(&self, quote: &ExchangeQuote) -> String {
        let code = self.target.code();

        let mut output = format!(
            "{}\n\n",
            ui::style_text(
                &format!("{BASE_CURRENCY} → {}", self.target.label()),
                ui::StyleType::Title
            )
        );
        output.push_str(&format!(
            "{} {}\n",
            ui::style_text("Quoted at:", ui::StyleType::Label),
            ui::style_text(
                &format!("{} UTC", format_timestamp(quote.timestamp)),
                ui::StyleType::Subtle
            )
        ));
        output.push_str(&format!(
            "{} {} {code} / {BASE_CURRENCY}\n",
            ui::style_text("Rate:", ui::StyleType::Label),
            self.formatted_rate
        ));
        output.push_str(&format!(
            "{} {}",
            ui::style_text("Received amount:", ui::StyleType::Label),
            ui::style_text(
                &format!("{} {code}", self.formatted_amount),
                ui::StyleType::Value
            )
        ));

        if !self.amount_in_range {
            output.push_str(&format!(
                "\n\n{}",
                ui::style_text(
                    &format!(
                        "The amount {} {BASE_CURRENCY} is not valid (expected {} to {}).",
                        format_amount(self.amount),
                        format_amount(*VALID_AMOUNT_RANGE.start()),
                        format_amount(*VALID_AMOUNT_RANGE.end()),
                    ),
                    ui::StyleType::Error
                )
            ));
        }

        output
    }
}

/// Fetches live quotes and prints the conversion for an already validated request.
pub async fn run(
    provider: &(dyn QuoteProvider + Send + Sync),
    request: &ConversionRequest,
) -> Result<()> {
    let spinner = ui::new_spinner("Fetching live rates...");
    let quote = provider.fetch_quotes().await;
    spinner.finish_and_clear();

    let quote = quote.context("Failed to fetch exchange rates")?;
    debug!(?quote, "Fetched quote");

    let result = request.apply(&quote);
    println!("{}", result.display(&quote));
    Ok(())
}
