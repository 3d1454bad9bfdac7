use rand::Rng;
use thiserror::Error;

use super::model::{Customer, Gender, DEFAULT_SEGMENT};

/// Dataset size requested by the dashboard at startup.
pub const DEFAULT_CUSTOMER_COUNT: usize = 200;

/// Probability that churn is forced on regardless of the heuristic.
pub const CHURN_NOISE_PROBABILITY: f64 = 0.2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Parse a user supplied customer count. Negative or non-numeric input is rejected.
pub fn parse_count(raw: &str) -> Result<usize, DatasetError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| DatasetError::InvalidArgument(format!("count '{raw}' is not an integer")))?;
    usize::try_from(value).map_err(|_| {
        DatasetError::InvalidArgument(format!("count must not be negative, got {value}"))
    })
}

/// Generate `count` synthetic customers with ids `1..=count`.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Customer> {
    (0..count).map(|i| generate_one(i as u32 + 1, rng)).collect()
}

fn generate_one<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Customer {
    let age = rng.gen_range(18..70);
    let annual_income = rng.gen_range(15..140);
    let spending_score = rng.gen_range(1..=100);
    let gender = if rng.gen_bool(0.5) {
        Gender::Female
    } else {
        Gender::Male
    };

    let churn = rng.gen_bool(CHURN_NOISE_PROBABILITY) || churn_heuristic(age, spending_score);

    Customer {
        id,
        gender,
        age,
        annual_income,
        spending_score,
        churn,
        segment: Some(DEFAULT_SEGMENT.to_string()),
    }
}

/// Older low spenders and young very-low spenders are treated as churned.
pub fn churn_heuristic(age: u32, spending_score: u32) -> bool {
    (age > 50 && spending_score < 40) || (age < 30 && spending_score < 20)
}
