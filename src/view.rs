//! Recommendation View
//!
//! Pure projection of a decision-service result into a presentation model.
//! Ranking, message selection and formatting all happen here so the DOM
//! components stay trivial and this logic stays testable off-browser.

use crate::models::{BreakdownEntry, RecommendationResult};

/// Terminal outcome when the service names no usable card
pub const EMPTY_MESSAGE: &str = "No suitable card found.";

/// Positional medal markers; everything past third place is dropped
const RANK_ICONS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// What the result area paints
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    /// Valid no-card outcome, distinct from a connectivity failure
    Empty { message: &'static str },
    Recommendation(RecommendationView),
}

/// Primary recommendation block plus the ranked leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationView {
    pub best_card: String,
    pub miles_display: String,
    pub cashback_display: String,
    pub badges: Vec<String>,
    pub reason: String,
    pub annual_fee_warning: Option<String>,
    pub leaderboard: Vec<LeaderRow>,
}

/// One leaderboard row; the value is shown in the same unit used to rank
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderRow {
    pub icon: &'static str,
    pub card_name: String,
    pub value_display: String,
}

fn cashback_text(value: f64) -> String {
    format!("S${:.2}", value)
}

fn miles_text(value: f64) -> String {
    format!("{:.0} miles", value)
}

/// Top-3 leaderboard for a breakdown.
///
/// Sort key follows the mode: cashback for `"cashback"`, miles otherwise
/// (which covers `"miles"` and anything unrecognized). The sort is stable,
/// so tied entries keep their wire order.
pub fn ranked_rows(breakdown: &[BreakdownEntry], mode: &str) -> Vec<LeaderRow> {
    let by_cashback = mode == "cashback";
    let key = |entry: &BreakdownEntry| if by_cashback { entry.cashback } else { entry.miles };

    let mut order: Vec<&BreakdownEntry> = breakdown.iter().collect();
    order.sort_by(|a, b| key(*b).total_cmp(&key(*a)));

    order
        .into_iter()
        .take(RANK_ICONS.len())
        .enumerate()
        .map(|(idx, entry)| LeaderRow {
            icon: RANK_ICONS[idx],
            card_name: entry.card_name.clone(),
            value_display: if by_cashback {
                cashback_text(entry.cashback)
            } else {
                miles_text(entry.miles)
            },
        })
        .collect()
}

/// Project a service result into a presentation model.
///
/// A missing result or a null/empty `best_card` is the empty state, not an
/// error. The input is never mutated.
pub fn present(result: Option<&RecommendationResult>) -> Presentation {
    let Some(result) = result else {
        return Presentation::Empty { message: EMPTY_MESSAGE };
    };
    let Some(best_card) = result.best_card.as_deref().filter(|name| !name.is_empty()) else {
        return Presentation::Empty { message: EMPTY_MESSAGE };
    };

    let mode = if result.mode.is_empty() { "miles" } else { result.mode.as_str() };
    let category = if result.category.is_empty() { "-" } else { result.category.as_str() };
    let mcc = if result.mcc.is_empty() { "-" } else { result.mcc.as_str() };

    Presentation::Recommendation(RecommendationView {
        best_card: best_card.to_string(),
        miles_display: format!("{:.0}", result.estimated_miles),
        cashback_display: cashback_text(result.estimated_cashback),
        badges: vec![
            format!("Mode: {}", mode),
            format!("Category: {}", category),
            if result.is_online { "Online" } else { "Offline" }.to_string(),
            format!("MCC {}", mcc),
        ],
        reason: result.reason.clone(),
        annual_fee_warning: result
            .annual_fee_warning
            .clone()
            .filter(|warning| !warning.is_empty()),
        leaderboard: ranked_rows(&result.breakdown, mode),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(card_name: &str, miles: f64, cashback: f64) -> BreakdownEntry {
        BreakdownEntry { card_name: card_name.to_string(), miles, cashback }
    }

    fn sample_breakdown() -> Vec<BreakdownEntry> {
        vec![entry("A", 10.0, 5.0), entry("B", 20.0, 1.0), entry("C", 20.0, 9.0)]
    }

    fn sample_result() -> RecommendationResult {
        RecommendationResult {
            best_card: Some("B".into()),
            estimated_miles: 20.0,
            estimated_cashback: 1.0,
            category: "shopping".into(),
            is_online: true,
            mcc: "5311".into(),
            mode: "miles".into(),
            reason: "Picked B based on category 'shopping'.".into(),
            annual_fee_warning: None,
            breakdown: sample_breakdown(),
        }
    }

    #[test]
    fn test_miles_ranking_breaks_tie_by_input_order() {
        let rows = ranked_rows(&sample_breakdown(), "miles");

        // B and C tie on miles=20; B came first on the wire
        let names: Vec<&str> = rows.iter().map(|r| r.card_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(rows[0].value_display, "20 miles");
        assert_eq!(rows[2].value_display, "10 miles");
    }

    #[test]
    fn test_cashback_ranking() {
        let rows = ranked_rows(&sample_breakdown(), "cashback");

        let names: Vec<&str> = rows.iter().map(|r| r.card_name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(rows[0].value_display, "S$9.00");
        assert_eq!(rows[2].value_display, "S$1.00");
    }

    #[test]
    fn test_unrecognized_mode_ranks_by_miles() {
        let rows = ranked_rows(&sample_breakdown(), "points");
        assert_eq!(rows[0].card_name, "B");
        assert_eq!(rows[0].value_display, "20 miles");
    }

    #[test]
    fn test_leaderboard_length_is_min_three() {
        assert_eq!(ranked_rows(&sample_breakdown()[..1], "miles").len(), 1);
        assert_eq!(ranked_rows(&sample_breakdown(), "miles").len(), 3);

        let mut four = sample_breakdown();
        four.push(entry("D", 30.0, 0.0));
        let rows = ranked_rows(&four, "miles");
        assert_eq!(rows.len(), 3);
        // D leads, A (weakest) is dropped entirely
        assert_eq!(rows[0].card_name, "D");
        assert!(rows.iter().all(|r| r.card_name != "A"));
    }

    #[test]
    fn test_rank_icons_are_positional() {
        let rows = ranked_rows(&sample_breakdown(), "miles");
        assert_eq!(rows[0].icon, "🥇");
        assert_eq!(rows[1].icon, "🥈");
        assert_eq!(rows[2].icon, "🥉");
    }

    #[test]
    fn test_missing_values_rank_as_zero() {
        // decoded without a cashback field -> 0 via serde default
        let decoded: Vec<BreakdownEntry> = serde_json::from_str(
            r#"[{"card_name": "X"}, {"card_name": "Y", "cashback": 2.5}]"#,
        )
        .unwrap();

        let rows = ranked_rows(&decoded, "cashback");
        assert_eq!(rows[0].card_name, "Y");
        assert_eq!(rows[1].value_display, "S$0.00");
    }

    #[test]
    fn test_present_full_result() {
        let presentation = present(Some(&sample_result()));

        let Presentation::Recommendation(model) = presentation else {
            panic!("expected recommendation");
        };
        assert_eq!(model.best_card, "B");
        assert_eq!(model.miles_display, "20");
        assert_eq!(model.cashback_display, "S$1.00");
        assert_eq!(
            model.badges,
            vec!["Mode: miles", "Category: shopping", "Online", "MCC 5311"]
        );
        assert_eq!(model.reason, "Picked B based on category 'shopping'.");
        assert_eq!(model.annual_fee_warning, None);
        assert_eq!(model.leaderboard.len(), 3);
    }

    #[test]
    fn test_null_best_card_is_empty_state() {
        let mut result = sample_result();
        result.best_card = None;
        assert_eq!(present(Some(&result)), Presentation::Empty { message: EMPTY_MESSAGE });

        result.best_card = Some(String::new());
        assert_eq!(present(Some(&result)), Presentation::Empty { message: EMPTY_MESSAGE });

        assert_eq!(present(None), Presentation::Empty { message: EMPTY_MESSAGE });
    }

    #[test]
    fn test_annual_fee_warning_only_when_non_empty() {
        let mut result = sample_result();
        result.annual_fee_warning = Some("B has around S$194 annual fee. Usually waivable.".into());
        let Presentation::Recommendation(model) = present(Some(&result)) else {
            panic!("expected recommendation");
        };
        assert!(model.annual_fee_warning.is_some());

        result.annual_fee_warning = Some(String::new());
        let Presentation::Recommendation(model) = present(Some(&result)) else {
            panic!("expected recommendation");
        };
        assert_eq!(model.annual_fee_warning, None);
    }

    #[test]
    fn test_offline_badge_and_fallbacks() {
        let mut result = sample_result();
        result.is_online = false;
        result.category = String::new();
        result.mcc = String::new();
        result.mode = String::new();

        let Presentation::Recommendation(model) = present(Some(&result)) else {
            panic!("expected recommendation");
        };
        assert_eq!(model.badges, vec!["Mode: miles", "Category: -", "Offline", "MCC -"]);
    }
}
