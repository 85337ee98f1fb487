//! Wire Models
//!
//! Data structures matching the decision-service JSON contract.

use serde::{Deserialize, Serialize};

/// Request body for `POST /recommend-card`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
    pub url: String,
    pub amount: f64,
    pub currency: String,
    pub mode: String,
    pub enabled_cards: Vec<String>,
}

/// One card's computed reward estimate (leaderboard input)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub card_name: String,
    #[serde(default)]
    pub miles: f64,
    #[serde(default)]
    pub cashback: f64,
}

/// Full response from the decision service
///
/// `breakdown` order is whatever the service produced; display ranking
/// happens on this side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationResult {
    pub best_card: Option<String>,
    #[serde(default)]
    pub estimated_miles: f64,
    #[serde(default)]
    pub estimated_cashback: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub mcc: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub annual_fee_warning: Option<String>,
    #[serde(default)]
    pub breakdown: Vec<BreakdownEntry>,
}
