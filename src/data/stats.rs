use super::model::{AgeBand, Breakdown, Customer, DataStats, GroupStats};

/// Income (thousands) at or above which a customer counts as high value.
pub const HIGH_VALUE_MIN_INCOME: u32 = 70;
/// Spending score at or above which a customer counts as high value.
pub const HIGH_VALUE_MIN_SCORE: u32 = 60;

/// Aggregate statistics over `customers`. Total; every figure is 0 when empty.
pub fn compute_stats(customers: &[Customer]) -> DataStats {
    let total = customers.len();
    if total == 0 {
        return DataStats::default();
    }

    let (sum_age, sum_income, sum_score, churned) = customers.iter().fold(
        (0u64, 0u64, 0u64, 0usize),
        |(age, income, score, churned), c| {
            (
                age + u64::from(c.age),
                income + u64::from(c.annual_income),
                score + u64::from(c.spending_score),
                churned + usize::from(c.churn),
            )
        },
    );

    let n = total as f64;
    DataStats {
        total_customers: total,
        avg_age: sum_age as f64 / n,
        avg_income: sum_income as f64 / n,
        avg_spending_score: sum_score as f64 / n,
        churn_rate: churned as f64 / n,
    }
}

/// Per-gender and per-age-band figures plus the high-value count.
pub fn compute_breakdown(customers: &[Customer]) -> Breakdown {
    #[derive(Default, Clone, Copy)]
    struct Acc {
        count: usize,
        churned: usize,
        score: u64,
    }

    impl Acc {
        fn push(&mut self, c: &Customer) {
            self.count += 1;
            self.churned += usize::from(c.churn);
            self.score += u64::from(c.spending_score);
        }

        fn finish(self) -> GroupStats {
            if self.count == 0 {
                return GroupStats::default();
            }
            let n = self.count as f64;
            GroupStats {
                count: self.count,
                churn_rate: self.churned as f64 / n,
                avg_spending_score: self.score as f64 / n,
            }
        }
    }

    let mut genders = [Acc::default(); 2];
    let mut bands = [Acc::default(); 5];
    let mut high_value = 0;

    for c in customers {
        genders[c.gender as usize].push(c);
        bands[AgeBand::of(c.age) as usize].push(c);
        if c.annual_income >= HIGH_VALUE_MIN_INCOME && c.spending_score >= HIGH_VALUE_MIN_SCORE {
            high_value += 1;
        }
    }

    Breakdown {
        by_gender: genders.map(Acc::finish),
        by_age_band: bands.map(Acc::finish),
        high_value,
    }
}
