//! Customer offers
//!
//! An Offer freezes a calculation: the printer name, filament labels and
//! costs are copied in so later catalog edits don't change issued offers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slicer::{SlicerJobData, SlicerKind};
use super::types::{CalculationRequest, CalculationResult, Currency, PrintTime};

/// One filament line as printed on the offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferFilament {
    pub label: String,
    pub used_grams: f64,
    pub needs_drying: bool,
}

/// What the user typed when creating an offer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferDraft {
    pub customer_name: String,
    #[serde(default)]
    pub description: String,
    /// Falls back to the settings default when absent
    #[serde(default)]
    pub profit_percentage: Option<f64>,
}

/// Everything needed to create an offer in one call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferRequest {
    pub draft: OfferDraft,
    pub calculation: CalculationRequest,
    /// The import the print time and grams came from, if any
    #[serde(default)]
    pub job: Option<SlicerJobData>,
}

/// A stored customer offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub customer_name: String,
    pub description: String,
    pub printer_name: String,
    pub print_time: PrintTime,
    pub filaments: Vec<OfferFilament>,
    pub costs: CalculationResult,
    pub profit_percentage: f64,
    pub profit: f64,
    pub final_price: f64,
    pub currency: Currency,
    #[serde(default)]
    pub source_file: Option<String>,
    #[serde(default)]
    pub slicer: Option<SlicerKind>,
}
