//! Text and JSON rendering of a prediction for the display view.

use std::fmt;

use miam_core::catalog::Catalog;
use miam_core::errors::PredictionResult;
use miam_core::order::Order;
use serde::Serialize;

use crate::prediction::Prediction;

/// The order echoed back with one day's prediction, as symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionReport {
    pub order: String,
    pub day: u32,
    pub lunch: String,
    pub dinner: String,
}

impl PredictionReport {
    pub fn new(order: &Order, prediction: &Prediction, catalog: &Catalog) -> PredictionResult<Self> {
        Ok(Self {
            order: order.render(catalog)?,
            day: prediction.day.get(),
            lunch: prediction.lunch.symbol(catalog)?.to_string(),
            dinner: prediction.dinner.symbol(catalog)?.to_string(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for PredictionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Commande : {}", self.order)?;
        write!(
            f,
            "Repas à J + {} : midi {}, soir {}",
            self.day, self.lunch, self.dinner
        )
    }
}
