use crate::api::SalesApi;
use crate::config::Config;
use crate::dashboard;
use crate::entry;
use crate::errors::{ApiError, StorageError, SubmitError};
use crate::menus::ClickTarget;
use crate::notify::Notifier;
use crate::storage::KeyValueStore;
use crate::theme::{Theme, ThemeController};
use crate::ui;
use crate::view::{DashboardView, Document, SaleForm};

/// One dashboard page: the bound view-model plus the collaborators every
/// event handler needs.
pub struct DashboardApp<A, S, N> {
    api: A,
    notifier: N,
    theme: ThemeController<S>,
    pub document: Document,
    pub form: SaleForm,
    pub view: DashboardView,
}

impl<A, S, N> DashboardApp<A, S, N>
where
    A: SalesApi,
    S: KeyValueStore,
    N: Notifier,
{
    pub fn new(config: &Config, api: A, store: S, notifier: N) -> Self {
        Self {
            api,
            notifier,
            theme: ThemeController::new(store),
            document: Document::default(),
            form: SaleForm::new(&config.catalog),
            view: DashboardView::new(config.currency.clone()),
        }
    }

    /// Page load: theme first so nothing renders with the wrong one, then the initial fetch.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.theme.init(&mut self.document);
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        dashboard::refresh(&self.api, &mut self.view, &self.notifier).await
    }

    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        entry::submit(&self.api, &mut self.form, &mut self.view, &self.notifier).await
    }

    pub async fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        self.theme.toggle(&mut self.document).await
    }

    pub fn toggle_menu(&mut self, id: &str) {
        self.view.menus.toggle(id);
    }

    pub fn click(&mut self, target: ClickTarget) {
        self.view.menus.click(target);
    }

    pub fn render_html(&self) -> String {
        ui::render_index(&self.document, &self.form, &self.view)
    }

    pub fn render_text(&self) -> String {
        ui::render_text(&self.view)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
