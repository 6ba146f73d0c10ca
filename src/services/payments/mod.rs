use serde::{Deserialize, Serialize};

/// Order-based payment gateway client (Razorpay-style REST API). One call to
/// create an order at checkout; status comes back later through the webhook.
#[derive(Clone)]
pub struct PaymentGatewayLayer {
    pub key_id: String,
    key_secret: String,
    base_url: String,
    /// Flat share-link activation fee in the currency's smallest unit.
    pub fee_amount: i64,
    pub currency: String,
    /// Days a paid activation keeps the shared link alive.
    pub activation_days: i64,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct CreateOrderRequest {
    amount: i64,
    currency: String,
    receipt: String,
}

#[derive(Deserialize, Debug)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub status: String,
}

impl PaymentGatewayLayer {
    pub fn new(
        key_id: String,
        key_secret: String,
        base_url: String,
        fee_amount: i64,
        currency: String,
        activation_days: i64,
    ) -> Self {
        Self {
            key_id,
            key_secret,
            base_url,
            fee_amount,
            currency,
            activation_days,
            http: reqwest::Client::new(),
        }
    }

    pub async fn create_order(&self, receipt: String) -> Result<GatewayOrder, String> {
        let request = CreateOrderRequest {
            amount: self.fee_amount,
            currency: self.currency.clone(),
            receipt,
        };

        let response = self
            .http
            .post(format!("{}/orders", self.base_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Gateway request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Gateway returned {status}: {body}"));
        }

        response
            .json::<GatewayOrder>()
            .await
            .map_err(|e| format!("Gateway response decode failed: {e}"))
    }
}
