use std::fmt;

use serde::{Deserialize, Serialize};

/// Label every generated customer carries until segmentation exists.
pub const DEFAULT_SEGMENT: &str = "General";

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Customer – one row of the dataset
// ---------------------------------------------------------------------------

/// A single customer record. Never edited after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// 1-based position in generation order.
    pub id: u32,
    pub gender: Gender,
    /// Years, 18–69 when produced by the generator.
    pub age: u32,
    /// Thousands of currency units, 15–139 when generated.
    pub annual_income: u32,
    /// Purchasing propensity, 1–100.
    pub spending_score: u32,
    pub churn: bool,
    /// Reserved; always [`DEFAULT_SEGMENT`] today.
    pub segment: Option<String>,
}

impl Customer {
    /// Segment label, falling back to [`DEFAULT_SEGMENT`].
    pub fn segment(&self) -> &str {
        self.segment.as_deref().unwrap_or(DEFAULT_SEGMENT)
    }
}

// ---------------------------------------------------------------------------
// DataStats – aggregate figures over a collection
// ---------------------------------------------------------------------------

/// Summary statistics derived from a customer collection.
///
/// All means and the churn rate are `0.0` for an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DataStats {
    pub total_customers: usize,
    pub avg_age: f64,
    pub avg_income: f64,
    pub avg_spending_score: f64,
    /// Fraction in `[0, 1]`.
    pub churn_rate: f64,
}

// ---------------------------------------------------------------------------
// Breakdowns used by the dashboard and insights views
// ---------------------------------------------------------------------------

/// Fixed age bands for churn analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBand {
    Under30,
    Thirties,
    Forties,
    Fifties,
    SixtyPlus,
}

impl AgeBand {
    pub const ALL: [AgeBand; 5] = [
        AgeBand::Under30,
        AgeBand::Thirties,
        AgeBand::Forties,
        AgeBand::Fifties,
        AgeBand::SixtyPlus,
    ];

    pub fn of(age: u32) -> Self {
        match age {
            0..=29 => AgeBand::Under30,
            30..=39 => AgeBand::Thirties,
            40..=49 => AgeBand::Forties,
            50..=59 => AgeBand::Fifties,
            _ => AgeBand::SixtyPlus,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeBand::Under30 => "18-29",
            AgeBand::Thirties => "30-39",
            AgeBand::Forties => "40-49",
            AgeBand::Fifties => "50-59",
            AgeBand::SixtyPlus => "60+",
        }
    }
}

/// Count and churn rate of one group of customers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupStats {
    pub count: usize,
    pub churn_rate: f64,
    pub avg_spending_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Breakdown {
    /// Indexed like [`Gender::ALL`].
    pub by_gender: [GroupStats; 2],
    /// Indexed like [`AgeBand::ALL`].
    pub by_age_band: [GroupStats; 5],
    /// Customers with high income and a high spending score.
    pub high_value: usize,
}

impl Breakdown {
    pub fn gender(&self, gender: Gender) -> &GroupStats {
        &self.by_gender[gender as usize]
    }

    pub fn age_band(&self, band: AgeBand) -> &GroupStats {
        &self.by_age_band[band as usize]
    }
}
