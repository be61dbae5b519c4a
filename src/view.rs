//! View-model for the dashboard page: the sale form, the sales table with its
//! summary fields, and the document-level theme attribute. Everything the
//! controllers read or redraw lives here and is passed around by reference.

use crate::errors::ValidationError;
use crate::menus::ActionMenus;
use crate::models::{CatalogItem, NewSale, Sale};
use crate::stats::{format_currency, ItemTally, SalesSummary, TOP_ITEM_LIMIT};
use crate::theme::Theme;
use chrono::{DateTime, Local};

pub const DEFAULT_QUANTITY: &str = "1";

/// One `<option>` of the item select. `price` is the raw `data-price` text.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOption {
    pub value: String,
    pub label: String,
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemSelect {
    pub options: Vec<ItemOption>,
    pub selected: usize,
}

impl ItemSelect {
    /// Builds the fixed list, preceded by an empty placeholder option.
    pub fn from_catalog(catalog: &[CatalogItem]) -> Self {
        let mut options = Vec::with_capacity(catalog.len() + 1);
        options.push(ItemOption {
            value: String::new(),
            label: "Select an item".to_string(),
            price: None,
        });
        options.extend(catalog.iter().map(|item| ItemOption {
            value: item.name.clone(),
            label: format!("{} ({:.2})", item.name, item.price),
            price: Some(item.price.to_string()),
        }));
        Self {
            options,
            selected: 0,
        }
    }

    pub fn selected_option(&self) -> Option<&ItemOption> {
        self.options.get(self.selected)
    }

    pub fn value(&self) -> &str {
        self.selected_option().map(|o| o.value.as_str()).unwrap_or("")
    }

    /// Selects the option with the given value; unknown values fall back to the placeholder.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => {
                self.selected = 0;
                false
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleForm {
    pub customer: String,
    pub item: ItemSelect,
    /// Raw text of the quantity input.
    pub quantity: String,
}

impl SaleForm {
    pub fn new(catalog: &[CatalogItem]) -> Self {
        Self {
            customer: String::new(),
            item: ItemSelect::from_catalog(catalog),
            quantity: DEFAULT_QUANTITY.to_string(),
        }
    }

    pub fn fill(&mut self, customer: &str, item: &str, quantity: &str) {
        self.customer = customer.to_string();
        self.item.select(item);
        self.quantity = quantity.to_string();
    }

    /// Reads the fields into a request body, refusing incomplete input.
    pub fn read(&self) -> Result<NewSale, ValidationError> {
        if self.customer.is_empty() {
            return Err(ValidationError::MissingCustomer);
        }
        let item = self.item.value();
        if item.is_empty() {
            return Err(ValidationError::MissingItem);
        }

        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| ValidationError::InvalidQuantity(self.quantity.clone()))?;

        let price = self
            .item
            .selected_option()
            .and_then(|o| o.price.as_deref())
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|p| p.is_finite())
            .ok_or_else(|| ValidationError::InvalidPrice {
                item: item.to_string(),
            })?;

        Ok(NewSale {
            customer: self.customer.clone(),
            item: item.to_string(),
            price,
            quantity,
        })
    }

    pub fn reset(&mut self) {
        self.customer.clear();
        self.item.selected = 0;
        self.quantity = DEFAULT_QUANTITY.to_string();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleRow {
    pub customer: String,
    pub item: String,
    pub quantity: String,
    pub total: String,
    pub timestamp: String,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub currency: String,
    pub rows: Vec<SaleRow>,
    pub total_revenue: String,
    pub total_sales_count: String,
    pub best_seller: String,
    pub top_items: Vec<ItemTally>,
    pub menus: ActionMenus,
    pub refreshed_at: Option<DateTime<Local>>,
}

impl DashboardView {
    pub fn new(currency: impl Into<String>) -> Self {
        let currency = currency.into();
        Self {
            total_revenue: format_currency(&currency, 0.0),
            total_sales_count: "0".to_string(),
            best_seller: crate::stats::NO_BEST_SELLER.to_string(),
            currency,
            rows: Vec::new(),
            top_items: Vec::new(),
            menus: ActionMenus::default(),
            refreshed_at: None,
        }
    }

    /// Replaces the table body and every summary field.
    pub fn replace(&mut self, sales: &[Sale], summary: &SalesSummary) {
        self.rows = sales
            .iter()
            .map(|sale| SaleRow {
                customer: sale.customer.clone(),
                item: sale.item.clone(),
                quantity: sale.quantity.to_string(),
                total: format_currency(&self.currency, sale.total),
                timestamp: sale.timestamp.clone(),
            })
            .collect();
        self.menus = ActionMenus::new(self.rows.len());
        self.total_revenue = format_currency(&self.currency, summary.total_revenue);
        self.total_sales_count = summary.total_sales_count.to_string();
        self.best_seller = summary.best_seller_label();
        self.top_items = summary.top_items(TOP_ITEM_LIMIT);
        self.refreshed_at = Some(Local::now());
    }
}

/// Document-level attributes; only the theme is bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub theme: Option<Theme>,
}
