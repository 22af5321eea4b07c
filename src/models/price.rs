use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::seat::SeatClass;

/// Цены по классам мест, в рублях.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    prices: BTreeMap<SeatClass, u32>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, class: SeatClass, price: u32) -> Self {
        self.prices.insert(class, price);
        self
    }

    pub fn price_for(&self, class: SeatClass) -> Option<u32> {
        self.prices.get(&class).copied()
    }
}
