use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub name: String,
    pub phone: String,
    pub zip: String,
    pub city: String,
    pub address: String,
    pub region: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub transaction: String,
    #[serde(default)]
    pub request_id: Option<String>,
    pub currency: String,
    pub provider: String,
    pub amount: i64,
    /// Unix seconds.
    pub payment_dt: i64,
    pub bank: String,
    pub delivery_cost: i64,
    pub goods_total: i64,
    pub custom_fee: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub chrt_id: i64,
    pub track_number: String,
    pub price: i64,
    pub rid: String,
    pub name: String,
    /// Discount, in percent.
    pub sale: i64,
    pub size: String,
    pub total_price: i64,
    pub nm_id: i64,
    pub brand: String,
    pub status: i64,
}

/// One order as returned by `GET /order/{order_uid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_uid: String,
    pub track_number: String,
    pub entry: String,
    #[serde(default)]
    pub delivery: Option<Delivery>,
    #[serde(default)]
    pub payment: Option<Payment>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
    pub locale: String,
    #[serde(default)]
    pub internal_signature: Option<String>,
    pub customer_id: String,
    pub delivery_service: String,
    pub shardkey: String,
    pub sm_id: i64,
    /// ISO 8601 / RFC 3339 string, kept verbatim for display formatting.
    pub date_created: String,
    pub oof_shard: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}
