use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use serde::Serialize;

use crate::services::mock::rng::{gaussian, round2};

pub const FORECAST_CATEGORIES: [&str; 6] = [
    "food",
    "housing",
    "transportation",
    "healthcare",
    "entertainment",
    "utilities",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingForecast {
    pub category: &'static str,
    pub amount: f64,
    pub month: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPrediction {
    pub category: &'static str,
    pub amount: f64,
    pub date: String,
    pub confidence: f64,
    pub description: Option<String>,
}

struct CategoryRule {
    category: &'static str,
    confidence: f64,
    keywords: &'static [&'static str],
}

// First match wins.
const RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "food",
        confidence: 0.85,
        keywords: &["restaurant", "cafe", "coffee", "pizza", "burger"],
    },
    CategoryRule {
        category: "transportation",
        confidence: 0.82,
        keywords: &["uber", "lyft", "taxi", "gas", "fuel"],
    },
    CategoryRule {
        category: "entertainment",
        confidence: 0.78,
        keywords: &["netflix", "cinema", "movie", "ticket", "concert"],
    },
    CategoryRule {
        category: "housing",
        confidence: 0.95,
        keywords: &["rent", "mortgage", "property"],
    },
    CategoryRule {
        category: "healthcare",
        confidence: 0.88,
        keywords: &["doctor", "pharmacy", "hospital", "medicine"],
    },
    CategoryRule {
        category: "utilities",
        confidence: 0.9,
        keywords: &["electricity", "water", "internet", "phone"],
    },
];

const FALLBACK_CATEGORY: &str = "other";
const FALLBACK_CONFIDENCE: f64 = 0.5;

const MIN_CONFIDENCE: f64 = 0.4;
const MAX_CONFIDENCE: f64 = 0.98;

/// Monthly spending per category for the next `months_ahead` months.
///
/// Month `i` is labelled with `now + 30 * (i + 1)` days. Amounts are a base
/// (500 for housing, 200 otherwise) plus N(0, 10% of base), floored at zero.
pub fn spending_forecast<R: Rng + ?Sized>(
    months_ahead: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<SpendingForecast> {
    let mut forecasts = Vec::with_capacity(months_ahead as usize * FORECAST_CATEGORIES.len());

    for i in 0..months_ahead {
        let month = (now + TimeDelta::days(30 * (i as i64 + 1)))
            .format("%Y-%m")
            .to_string();

        for category in FORECAST_CATEGORIES {
            let base = if category == "housing" { 500.0 } else { 200.0 };
            let amount = base + gaussian(rng, base * 0.1);

            forecasts.push(SpendingForecast {
                category,
                amount: round2(amount.max(0.0)),
                month: month.clone(),
            });
        }
    }

    forecasts
}

/// Keyword rule lookup on the lower-cased description.
pub fn classify(description: &str) -> (&'static str, f64) {
    let lowered = description.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
        .map(|rule| (rule.category, rule.confidence))
        .unwrap_or((FALLBACK_CATEGORY, FALLBACK_CONFIDENCE))
}

pub fn categorize_transaction<R: Rng + ?Sized>(
    description: &str,
    amount: f64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> TransactionPrediction {
    let (category, base_confidence) = classify(description);
    let confidence =
        (base_confidence + gaussian(rng, 0.05)).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    TransactionPrediction {
        category,
        amount,
        date: now.format("%Y-%m-%d").to_string(),
        confidence: round2(confidence),
        description: Some(description.to_string()),
    }
}
