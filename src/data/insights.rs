use super::model::{AgeBand, Breakdown, DataStats, Gender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// One line of narration shown in the insights view.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub title: String,
    pub detail: String,
    pub severity: Severity,
}

impl Insight {
    fn info(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            severity: Severity::Info,
        }
    }

    fn warning(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            severity: Severity::Warning,
        }
    }
}

/// Churn rate above which the headline is raised as a warning.
const HIGH_CHURN_RATE: f64 = 0.3;

/// Rule-based observations over already-derived statistics.
pub fn generate_insights(stats: &DataStats, breakdown: &Breakdown) -> Vec<Insight> {
    if stats.total_customers == 0 {
        return vec![Insight::warning(
            "No customers",
            "The current dataset is empty. Reset it to bring back the original records.",
        )];
    }

    let mut insights = Vec::new();

    let churn_pct = stats.churn_rate * 100.0;
    let headline = format!(
        "{churn_pct:.1}% of {} customers have churned.",
        stats.total_customers
    );
    insights.push(if stats.churn_rate > HIGH_CHURN_RATE {
        Insight::warning("High churn", headline)
    } else {
        Insight::info("Churn rate", headline)
    });

    let riskiest = AgeBand::ALL
        .into_iter()
        .map(|band| (band, breakdown.age_band(band)))
        .filter(|(_, g)| g.count > 0)
        .max_by(|(_, a), (_, b)| a.churn_rate.total_cmp(&b.churn_rate));
    if let Some((band, group)) = riskiest {
        insights.push(Insight::info(
            "Riskiest age group",
            format!(
                "Customers aged {} churn at {:.1}% (average spending score {:.1}).",
                band.label(),
                group.churn_rate * 100.0,
                group.avg_spending_score
            ),
        ));
    }

    let male = breakdown.gender(Gender::Male);
    let female = breakdown.gender(Gender::Female);
    if male.count > 0 && female.count > 0 {
        let (higher, rate, other_rate) = if male.churn_rate >= female.churn_rate {
            (Gender::Male, male.churn_rate, female.churn_rate)
        } else {
            (Gender::Female, female.churn_rate, male.churn_rate)
        };
        insights.push(Insight::info(
            "Churn by gender",
            format!(
                "{higher} customers churn more often: {:.1}% vs {:.1}%.",
                rate * 100.0,
                other_rate * 100.0
            ),
        ));
    }

    let share = breakdown.high_value as f64 / stats.total_customers as f64 * 100.0;
    insights.push(Insight::info(
        "High-value customers",
        format!(
            "{} customers ({share:.1}%) combine high income with a high spending score.",
            breakdown.high_value
        ),
    ));

    insights
}
