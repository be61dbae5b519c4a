use crate::api::SalesApi;
use crate::errors::ApiError;
use crate::notify::Notifier;
use crate::stats::summarize;
use crate::view::DashboardView;
use tracing::info;

/// Fetches every sale and redraws the table and summary from scratch.
///
/// A failed fetch only reaches the diagnostic log; the view keeps whatever
/// it showed before.
pub async fn refresh<A, N>(api: &A, view: &mut DashboardView, notifier: &N) -> Result<(), ApiError>
where
    A: SalesApi,
    N: Notifier,
{
    let sales = match api.get_sales().await {
        Ok(sales) => sales,
        Err(err) => {
            notifier.log_error(&format!("Error loading sales: {err}"));
            return Err(err);
        }
    };

    let summary = summarize(&sales);
    view.replace(&sales, &summary);
    info!(
        sales = summary.total_sales_count,
        revenue = summary.total_revenue,
        best_seller = %view.best_seller,
        "dashboard refreshed"
    );
    Ok(())
}
