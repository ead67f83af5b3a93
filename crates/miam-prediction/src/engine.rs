//! PredictionEngine — holds the catalog and the current triangle, answers day queries.

use miam_core::catalog::{Catalog, DishId};
use miam_core::config::MiamConfig;
use miam_core::constants::MAX_DAY;
use miam_core::errors::{ConfigError, PredictionError, PredictionResult};
use miam_core::order::{Day, Order};
use tracing::{debug, info_span, warn};

use crate::meal::Meal;
use crate::prediction::Prediction;
use crate::report::PredictionReport;
use crate::triangle::MealTriangle;

/// Lifecycle of an engine. There is no way back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No order registered yet.
    Empty,
    /// A triangle has been built.
    Ready,
}

/// Prediction engine for one catalog.
///
/// Registering an order rebuilds the whole triangle; queries read it.
/// Registration borrows the engine mutably, so it can never overlap a query.
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    catalog: Catalog,
    triangle: Option<MealTriangle>,
    dump_triangle: bool,
}

impl PredictionEngine {
    /// Create an empty engine.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            triangle: None,
            dump_triangle: false,
        }
    }

    /// Create an empty engine from resolved configuration.
    pub fn from_config(config: &MiamConfig) -> Result<Self, ConfigError> {
        let mut engine = Self::new(config.build_catalog()?);
        engine.dump_triangle = config.logging.effective_dump_triangle();
        Ok(engine)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> EngineState {
        if self.triangle.is_some() {
            EngineState::Ready
        } else {
            EngineState::Empty
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == EngineState::Ready
    }

    /// The current triangle.
    pub fn triangle(&self) -> PredictionResult<&MealTriangle> {
        self.triangle.as_ref().ok_or(PredictionError::EngineNotReady)
    }

    /// Register a 14-meal order and build its triangle.
    ///
    /// On error the previously registered triangle, if any, is kept.
    pub fn register_order_and_predict(&mut self, order: &[DishId]) -> PredictionResult<()> {
        let _span = info_span!("miam.register", meals = order.len()).entered();

        let triangle = MealTriangle::build(order, &self.catalog).inspect_err(|e| {
            warn!(error = %e, "order rejected");
        })?;
        debug!(cells = triangle.len(), "triangle built");

        if self.dump_triangle {
            debug!("\n{}", triangle.render(&self.catalog)?);
        }

        self.triangle = Some(triangle);
        Ok(())
    }

    /// Register an already-validated order.
    pub fn register(&mut self, order: &Order) -> PredictionResult<()> {
        self.register_order_and_predict(order.meals())
    }

    /// Predict lunch and dinner for `day` (1 to 53).
    pub fn get_one_prediction(&self, day: u32) -> PredictionResult<Prediction> {
        let triangle = self.triangle()?;
        let day = Day::new(day)?;
        Self::lookup(triangle, day)
    }

    /// Predict lunch and dinner for an already-validated day.
    pub fn predict(&self, day: Day) -> PredictionResult<Prediction> {
        Self::lookup(self.triangle()?, day)
    }

    fn lookup(triangle: &MealTriangle, day: Day) -> PredictionResult<Prediction> {
        let out_of_bounds = || PredictionError::InvalidDay {
            day: day.to_string(),
            max: MAX_DAY,
        };

        let lunch = triangle
            .get(Prediction::lunch_index(day))
            .map(Meal::Planned)
            .ok_or_else(out_of_bounds)?;
        let dinner = if day.is_last() {
            Meal::Undetermined
        } else {
            triangle
                .get(Prediction::dinner_index(day))
                .map(Meal::Planned)
                .ok_or_else(out_of_bounds)?
        };

        debug!(day = day.get(), %lunch, %dinner, "prediction");
        Ok(Prediction { day, lunch, dinner })
    }

    /// Row-by-row rendering of the current triangle, for debugging.
    pub fn dump(&self) -> PredictionResult<String> {
        self.triangle()?.render(&self.catalog)
    }

    /// Parse the order and day fields, register the order, and report the day.
    pub fn submit(&mut self, order_text: &str, day_text: &str) -> PredictionResult<PredictionReport> {
        let order = Order::parse(order_text, &self.catalog)?;
        self.register(&order)?;
        let day: Day = day_text.parse()?;
        let prediction = self.predict(day)?;
        PredictionReport::new(&order, &prediction, &self.catalog)
    }
}
