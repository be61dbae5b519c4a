pub mod api;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod entry;
pub mod errors;
pub mod menus;
pub mod models;
pub mod notify;
pub mod stats;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod view;

pub use api::{HttpSalesApi, SalesApi};
pub use app::DashboardApp;
pub use config::Config;
pub use menus::{ActionMenus, ClickTarget};
pub use models::{AddSaleResponse, CatalogItem, NewSale, Sale};
pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier};
pub use stats::{format_currency, summarize, SalesSummary};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{Theme, ThemeController};
pub use view::{DashboardView, Document, SaleForm};
