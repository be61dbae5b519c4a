use crate::config::Config;
use crate::errors::ApiError;
use crate::models::{AddSaleResponse, NewSale, Sale};
use reqwest::Client;
use tracing::debug;

/// The two backend operations the dashboard consumes.
#[allow(async_fn_in_trait)]
pub trait SalesApi {
    async fn add_sale(&self, sale: &NewSale) -> Result<AddSaleResponse, ApiError>;

    async fn get_sales(&self) -> Result<Vec<Sale>, ApiError>;
}

#[derive(Clone)]
pub struct HttpSalesApi {
    client: Client,
    add_url: String,
    list_url: String,
}

impl HttpSalesApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            add_url: config.endpoint("add-sale"),
            list_url: config.endpoint("get-sales"),
        }
    }
}

impl SalesApi for HttpSalesApi {
    async fn add_sale(&self, sale: &NewSale) -> Result<AddSaleResponse, ApiError> {
        debug!(url = %self.add_url, customer = %sale.customer, item = %sale.item, "posting sale");
        let response = self.client.post(&self.add_url).json(sale).send().await?;

        // Rejections arrive as a JSON body whatever the status, so the body decides.
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_sales(&self) -> Result<Vec<Sale>, ApiError> {
        debug!(url = %self.list_url, "fetching sales");
        let response = self.client.get(&self.list_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }
}
