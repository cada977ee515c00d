use std::future::Future;

use super::errors::FetchError;
use super::order::Order;
use super::order_id::OrderId;

/// Where the displayed execution time came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingSource {
    /// `X-Execution-Time-MS` response header.
    Server,
    /// Wall clock from sending the request to receiving the headers.
    Client,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchedOrder {
    pub order: Order,
    pub execution_time_ms: u64,
    pub timing: TimingSource,
}

pub type FetchOutcome = Result<FetchedOrder, FetchError>;

/// Single-shot retrieval of one order. Implementations make exactly one
/// attempt and never retry.
pub trait OrderSource {
    fn fetch_order(&self, id: &OrderId) -> impl Future<Output = FetchOutcome> + Send;
}
