//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::endpoints::decode_response;
use crate::error::{RestError, RestResult};
use crate::types::{OrderInfo, OrderRequest};
use coinbase_auth::{Credentials, RequestSigner};
use coinbase_types::{CancelAfter, ProductId, Side, TimeInForce};
use reqwest::blocking::Client;
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Make an authenticated GET request
    fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        let signer = RequestSigner::new(self.credentials, "GET", path);
        let url = format!("{}{}", self.base_url, path);

        debug!("Making authenticated request to {}", path);

        let mut request = self.client.get(&url);
        for (name, value) in signer.headers("") {
            request = request.header(name, value);
        }

        decode_response(request.send()?)
    }

    /// Make an authenticated POST request with a JSON body
    fn post<T: serde::de::DeserializeOwned>(&self, path: &str, body: String) -> RestResult<T> {
        let signer = RequestSigner::new(self.credentials, "POST", path);
        let url = format!("{}{}", self.base_url, path);

        debug!("Making authenticated request to {}", path);

        let mut request = self.client.post(&url);
        for (name, value) in signer.headers(&body) {
            request = request.header(name, value);
        }

        decode_response(request.body(body).send()?)
    }

    /// Make an authenticated DELETE request
    fn delete<T: serde::de::DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        let signer = RequestSigner::new(self.credentials, "DELETE", path);
        let url = format!("{}{}", self.base_url, path);

        debug!("Making authenticated request to {}", path);

        let mut request = self.client.delete(&url);
        for (name, value) in signer.headers("") {
            request = request.header(name, value);
        }

        decode_response(request.send()?)
    }

    /// Place an order
    ///
    /// Good-till-time orders get a one-minute cancellation window if none
    /// was set. The two known rejection payloads surface as
    /// [`RestError::InsufficientFunds`] and [`RestError::OrderTooLarge`];
    /// any other venue rejection is passed through as
    /// [`RestError::Venue`] with the message preserved.
    #[instrument(skip(self, order), fields(product = %order.product_id, side = %order.side, size = %order.size))]
    pub fn place_order(&self, order: &OrderRequest) -> RestResult<OrderInfo> {
        let mut order = order.clone();
        if order.time_in_force == TimeInForce::GoodTillTime && order.cancel_after.is_none() {
            order.cancel_after = Some(CancelAfter::Min);
        }

        let body = serde_json::to_string(&order)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

        debug!(
            "Placing {} {} order for {} {} @ {}",
            order.side, order.order_type, order.size, order.product_id, order.price
        );

        let result = self.post("/orders/", body);

        match &result {
            Err(RestError::InsufficientFunds) => {
                warn!("Order rejected: insufficient funds");
            }
            Err(RestError::OrderTooLarge { message }) => {
                warn!("Order rejected: {}", message);
            }
            _ => {}
        }

        result
    }

    /// Place a limit buy order
    pub fn limit_buy(
        &self,
        product: &ProductId,
        size: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> RestResult<OrderInfo> {
        let order = OrderRequest::limit(product.clone(), Side::Buy, size, price)
            .with_time_in_force(time_in_force);
        self.place_order(&order)
    }

    /// Place a limit sell order
    pub fn limit_sell(
        &self,
        product: &ProductId,
        size: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> RestResult<OrderInfo> {
        let order = OrderRequest::limit(product.clone(), Side::Sell, size, price)
            .with_time_in_force(time_in_force);
        self.place_order(&order)
    }

    /// Place an immediate-or-cancel buy order
    pub fn immediate_buy(
        &self,
        product: &ProductId,
        size: Decimal,
        price: Decimal,
    ) -> RestResult<OrderInfo> {
        self.place_order(&OrderRequest::immediate(
            product.clone(),
            Side::Buy,
            size,
            price,
        ))
    }

    /// Place an immediate-or-cancel sell order
    pub fn immediate_sell(
        &self,
        product: &ProductId,
        size: Decimal,
        price: Decimal,
    ) -> RestResult<OrderInfo> {
        self.place_order(&OrderRequest::immediate(
            product.clone(),
            Side::Sell,
            size,
            price,
        ))
    }

    /// Cancel an order by id
    ///
    /// Returns the id of the cancelled order.
    #[instrument(skip(self))]
    pub fn cancel_order(&self, order_id: &str) -> RestResult<String> {
        debug!("Cancelling order {}", order_id);
        self.delete(&format!("/orders/{}", order_id))
    }

    /// Cancel all open orders
    ///
    /// Returns the ids of the cancelled orders.
    #[instrument(skip(self))]
    pub fn cancel_all_orders(&self) -> RestResult<Vec<String>> {
        debug!("Cancelling all open orders");
        self.delete("/orders")
    }

    /// List orders in any status
    #[instrument(skip(self))]
    pub fn get_orders(&self) -> RestResult<Vec<OrderInfo>> {
        self.get("/orders?status=all")
    }
}
