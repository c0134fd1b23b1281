use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
    Method,
    StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{config::SquareConfig, SquareApiError, SquareOrder};

#[derive(Clone)]
pub struct SquareApi {
    config: SquareConfig,
    client: Arc<Client>,
}

impl SquareApi {
    pub fn new(config: SquareConfig) -> Result<Self, SquareApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let bearer = format!("Bearer {}", config.access_token.reveal());
        let val = HeaderValue::from_str(&bearer).map_err(|e| SquareApiError::Initialization(e.to_string()))?;
        headers.insert(AUTHORIZATION, val);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| SquareApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub async fn rest_query<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T, SquareApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(|e| SquareApiError::RestResponseError(e.to_string()))?;
        // Success is exactly 200; anything else is reported with its status code.
        if response.status() == StatusCode::OK {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| SquareApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| SquareApiError::RestResponseError(e.to_string()))?;
            Err(SquareApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("https://{}{path}", self.config.api_host)
    }

    pub async fn get_order(&self, order_id: &str) -> Result<SquareOrder, SquareApiError> {
        #[derive(Deserialize)]
        struct OrderResponse {
            order: SquareOrder,
        }
        let path = format!("/v2/orders/{order_id}");
        debug!("Fetching order {order_id}");
        let result = self.rest_query::<OrderResponse>(Method::GET, &path).await?;
        info!("Fetched order {order_id}");
        Ok(result.order)
    }
}
