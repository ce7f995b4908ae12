use owo_colors::OwoColorize;

use crate::application::dto::{DetailResponse, SearchResponse};
use crate::catalog::domain::SearchResultCard;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// TextFormatter renders the results grid and the detail page as
/// terminal text.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_card(card: &SearchResultCard) -> String {
        let title = format!("{} {} {}", card.year, card.make, card.model);
        let mut out = String::new();
        out.push_str(&format!("  {}  [{}]\n", title.bold(), card.vehicle_type));
        out.push_str(&format!(
            "    {} • {} • {} mpg • {}\n",
            format!("${}/mo", card.price_per_month).green(),
            card.drivetrain,
            card.mpg,
            card.state
        ));
        out.push_str(&format!("    {}\n", card.image_url.dimmed()));
        out.push_str(&format!("    id: {}\n", card.id.cyan()));
        out
    }

    fn row(label: &str, value: &str) -> String {
        format!("  {:<14}{}\n", label, value.bold())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for TextFormatter {
    fn format_results(&self, response: &SearchResponse) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("{}\n\n", response.title.bold().underline()));

        if response.cards.is_empty() {
            out.push_str("No vehicles matched your search.\n");
            return Ok(out);
        }

        for card in &response.cards {
            out.push_str(&Self::format_card(card));
            out.push('\n');
        }
        out.push_str(&format!(
            "💡 Run {} to open a detail page.\n",
            "blinker vehicle <id>".cyan()
        ));

        Ok(out)
    }

    fn format_detail(&self, response: &DetailResponse) -> Result<String> {
        let vehicle = &response.vehicle;
        let mut out = String::new();

        out.push_str(&format!("{}\n", vehicle.title().bold().underline()));
        out.push_str(&format!(
            "{}  •  {} mpg  •  {}\n\n",
            format!("${}/mo", vehicle.price_per_month).green(),
            vehicle.mpg,
            vehicle.drivetrain
        ));

        out.push_str(&Self::row("ID", &vehicle.id));
        out.push_str(&Self::row("Year", &vehicle.year));
        out.push_str(&Self::row("Make", &vehicle.make));
        out.push_str(&Self::row("Model", &vehicle.model));
        out.push_str(&Self::row("Type", &vehicle.vehicle_type));
        out.push_str(&Self::row("Trim", &vehicle.trim));
        out.push_str(&Self::row("Fuel", &vehicle.fuel));
        out.push_str(&Self::row("Transmission", &vehicle.transmission));
        out.push_str(&Self::row("Cylinders", &vehicle.cylinders));
        out.push_str(&Self::row("State", &vehicle.state));
        out.push_str(&format!("\n  {}\n", vehicle.image_url.dimmed()));

        Ok(out)
    }
}
