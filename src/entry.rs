use crate::api::SalesApi;
use crate::dashboard;
use crate::errors::SubmitError;
use crate::models::NewSale;
use crate::notify::Notifier;
use crate::view::{DashboardView, SaleForm};
use tracing::{debug, info, warn};

/// Sends one sale and interprets the backend's verdict. No UI side effects.
pub async fn post_sale<A: SalesApi>(api: &A, sale: &NewSale) -> Result<(), SubmitError> {
    let response = api.add_sale(sale).await?;
    if response.success {
        Ok(())
    } else {
        Err(SubmitError::Rejected(
            response.error.unwrap_or_else(|| "unknown error".to_string()),
        ))
    }
}

/// Handles a submission of the sale form.
///
/// Invalid input is refused before any request. A successful write refreshes
/// the dashboard and resets the form; every failure raises an alert and
/// leaves both untouched.
pub async fn submit<A, N>(
    api: &A,
    form: &mut SaleForm,
    view: &mut DashboardView,
    notifier: &N,
) -> Result<(), SubmitError>
where
    A: SalesApi,
    N: Notifier,
{
    let result = match form.read() {
        Ok(sale) => post_sale(api, &sale).await.map(|()| sale),
        Err(invalid) => {
            debug!("sale form refused: {invalid}");
            Err(invalid.into())
        }
    };

    match result {
        Ok(sale) => {
            info!(
                customer = %sale.customer,
                item = %sale.item,
                quantity = sale.quantity,
                "sale recorded"
            );
            // A failed refresh is already logged and must not undo a recorded sale.
            let _ = dashboard::refresh(api, view, notifier).await;
            form.reset();
            Ok(())
        }
        Err(err) => {
            warn!("sale not recorded: {err}");
            notifier.alert(&err.alert_message());
            Err(err)
        }
    }
}
