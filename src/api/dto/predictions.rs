/*
 * Responsibility
 * - /api/predictions の query DTO
 * - validate() で範囲チェック (parse 失敗は Query extractor が 400 にする)
 */
use serde::Deserialize;

pub const MAX_MONTHS_AHEAD: u32 = 24;

fn default_months_ahead() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
pub struct SpendingForecastQuery {
    #[serde(default = "default_months_ahead")]
    pub months_ahead: u32,
}

impl SpendingForecastQuery {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.months_ahead > MAX_MONTHS_AHEAD {
            return Err("months_ahead must be <= 24");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct CategorizeQuery {
    pub description: String,
    pub amount: f64,
}

impl CategorizeQuery {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.description.trim().is_empty() {
            return Err("description is required");
        }
        if self.description.len() > 512 {
            return Err("description must be <= 512 chars");
        }
        if !self.amount.is_finite() {
            return Err("amount must be a finite number");
        }

        Ok(())
    }
}
