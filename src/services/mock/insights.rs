use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Positive,
    Neutral,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingInsight {
    pub category: &'static str,
    pub message: &'static str,
    pub change_percent: f64,
    pub recommendation: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRecommendation {
    pub category: &'static str,
    pub current_budget: Option<f64>,
    pub recommended_budget: f64,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialHealthScore {
    /// 0-100
    pub score: u8,
    pub spending_score: u8,
    pub saving_score: u8,
    pub debt_score: u8,
    pub overall_message: &'static str,
    pub category_scores: BTreeMap<&'static str, u8>,
}

pub fn spending_insights() -> Vec<SpendingInsight> {
    vec![
        SpendingInsight {
            category: "food",
            message: "Your food spending has increased by 15% compared to last month",
            change_percent: 15.0,
            recommendation: "Consider cooking at home more often to reduce expenses",
            severity: Severity::Warning,
        },
        SpendingInsight {
            category: "entertainment",
            message: "You've reduced entertainment spending by 20% this month",
            change_percent: -20.0,
            recommendation: "Great job on cutting down entertainment costs!",
            severity: Severity::Positive,
        },
        SpendingInsight {
            category: "transportation",
            message: "Your transportation costs are in line with your historical average",
            change_percent: 2.0,
            recommendation: "Continue with your current transportation habits",
            severity: Severity::Neutral,
        },
        SpendingInsight {
            category: "shopping",
            message: "Your shopping expenses have increased significantly by 45%",
            change_percent: 45.0,
            recommendation: "Review your recent shopping purchases for necessary items",
            severity: Severity::Critical,
        },
    ]
}

pub fn budget_recommendations() -> Vec<BudgetRecommendation> {
    vec![
        BudgetRecommendation {
            category: "food",
            current_budget: Some(500.0),
            recommended_budget: 450.0,
            reason: "Your food spending is consistently below budget. You could reallocate some funds.",
        },
        BudgetRecommendation {
            category: "housing",
            current_budget: Some(1200.0),
            recommended_budget: 1200.0,
            reason: "Your housing budget is appropriate for your spending patterns.",
        },
        BudgetRecommendation {
            category: "entertainment",
            current_budget: Some(200.0),
            recommended_budget: 150.0,
            reason: "You're frequently exceeding your entertainment budget. Consider adjusting it or reducing spending.",
        },
        BudgetRecommendation {
            category: "saving",
            current_budget: Some(300.0),
            recommended_budget: 400.0,
            reason: "Based on your income, you could increase your monthly savings by reducing discretionary spending.",
        },
    ]
}

/// Weighted score: 30% spending, 40% saving, 30% debt, truncated.
pub fn overall_score(spending: u8, saving: u8, debt: u8) -> u8 {
    (f64::from(spending) * 0.3 + f64::from(saving) * 0.4 + f64::from(debt) * 0.3) as u8
}

pub fn health_message(score: u8) -> &'static str {
    match score {
        80.. => "Excellent financial health! You're on track to meet your financial goals.",
        70..=79 => "Good financial health. Some minor improvements could strengthen your position.",
        60..=69 => {
            "Fair financial health. Consider addressing some key areas to improve your position."
        }
        _ => "Your financial health needs attention. Focus on building savings and reducing debt.",
    }
}

pub fn financial_health<R: Rng + ?Sized>(rng: &mut R) -> FinancialHealthScore {
    let spending_score = rng.random_range(65..85);
    let saving_score = rng.random_range(55..80);
    let debt_score = rng.random_range(70..95);

    let score = overall_score(spending_score, saving_score, debt_score);

    let category_scores = BTreeMap::from([
        ("budget_adherence", rng.random_range(60..90)),
        ("emergency_fund", rng.random_range(50..85)),
        ("debt_to_income", rng.random_range(65..95)),
        ("savings_rate", rng.random_range(55..85)),
        ("retirement_planning", rng.random_range(40..80)),
    ]);

    FinancialHealthScore {
        score,
        spending_score,
        saving_score,
        debt_score,
        overall_message: health_message(score),
        category_scores,
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn static_insights_cover_all_severities() {
        let insights = spending_insights();

        assert_eq!(insights.len(), 4);
        let severities: Vec<Severity> = insights.iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Warning,
                Severity::Positive,
                Severity::Neutral,
                Severity::Critical
            ]
        );
        assert_eq!(insights[1].change_percent, -20.0);
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_value(&spending_insights()[3]).unwrap();
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["category"], "shopping");
    }

    #[test]
    fn budget_recommendations_are_static() {
        let recs = budget_recommendations();

        let pairs: Vec<(&str, Option<f64>, f64)> = recs
            .iter()
            .map(|r| (r.category, r.current_budget, r.recommended_budget))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("food", Some(500.0), 450.0),
                ("housing", Some(1200.0), 1200.0),
                ("entertainment", Some(200.0), 150.0),
                ("saving", Some(300.0), 400.0),
            ]
        );
    }

    #[test]
    fn overall_score_truncates_weighted_average() {
        // 21.3 + 24.0 + 27.0 = 72.3
        assert_eq!(overall_score(71, 60, 90), 72);
        // 25.2 + 22.4 + 28.2 = 75.8
        assert_eq!(overall_score(84, 56, 94), 75);
    }

    #[test]
    fn message_thresholds() {
        assert!(health_message(80).starts_with("Excellent"));
        assert!(health_message(79).starts_with("Good"));
        assert!(health_message(70).starts_with("Good"));
        assert!(health_message(69).starts_with("Fair"));
        assert!(health_message(60).starts_with("Fair"));
        assert!(health_message(59).starts_with("Your financial health needs attention"));
    }

    #[test]
    fn random_scores_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..500 {
            let h = financial_health(&mut rng);

            assert!((65..85).contains(&h.spending_score));
            assert!((55..80).contains(&h.saving_score));
            assert!((70..95).contains(&h.debt_score));
            assert_eq!(
                h.score,
                overall_score(h.spending_score, h.saving_score, h.debt_score)
            );
            assert_eq!(h.overall_message, health_message(h.score));
            assert_eq!(h.category_scores.len(), 5);
            assert!((40..80).contains(&h.category_scores["retirement_planning"]));
            assert!((60..90).contains(&h.category_scores["budget_adherence"]));
        }
    }

    #[test]
    fn same_seed_same_score() {
        let a = financial_health(&mut StdRng::seed_from_u64(4));
        let b = financial_health(&mut StdRng::seed_from_u64(4));
        assert_eq!(a, b);
    }
}
