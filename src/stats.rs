use crate::models::Sale;
use std::collections::HashMap;

pub const NO_BEST_SELLER: &str = "None";
pub const TOP_ITEM_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemTally {
    pub item: String,
    pub quantity: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_sales_count: usize,
    /// Per-item totals in the order each item was first seen.
    pub tallies: Vec<ItemTally>,
}

impl SalesSummary {
    /// Item with the largest accumulated quantity; the earliest one wins a tie.
    pub fn best_seller(&self) -> Option<&str> {
        let mut best: Option<&ItemTally> = None;
        for tally in &self.tallies {
            if best.is_none_or(|current| tally.quantity > current.quantity) {
                best = Some(tally);
            }
        }
        best.map(|tally| tally.item.as_str())
    }

    pub fn best_seller_label(&self) -> String {
        self.best_seller().unwrap_or(NO_BEST_SELLER).to_string()
    }

    pub fn top_items(&self, limit: usize) -> Vec<ItemTally> {
        let mut ranked = self.tallies.clone();
        // Stable sort keeps first-seen order among equal quantities.
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}

pub fn summarize(sales: &[Sale]) -> SalesSummary {
    let mut summary = SalesSummary {
        total_sales_count: sales.len(),
        ..SalesSummary::default()
    };
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for sale in sales {
        summary.total_revenue += sale.total;

        let index = *positions.entry(sale.item.as_str()).or_insert_with(|| {
            summary.tallies.push(ItemTally {
                item: sale.item.clone(),
                quantity: 0,
                revenue: 0.0,
            });
            summary.tallies.len() - 1
        });
        let tally = &mut summary.tallies[index];
        tally.quantity = tally.quantity.saturating_add(sale.quantity);
        tally.revenue += sale.total;
    }

    summary
}

pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}
