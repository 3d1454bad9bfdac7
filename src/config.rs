use clap::Parser;

use crate::data::generate::{parse_count, DEFAULT_CUSTOMER_COUNT};

/// Customer behaviour analytics dashboard
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Number of mock customers generated at startup
    #[arg(short = 'n', long, default_value_t = DEFAULT_CUSTOMER_COUNT, value_parser = parse_count)]
    pub count: usize,

    /// Seed for reproducible mock data (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_CUSTOMER_COUNT,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_two_hundred_customers() {
        let config = AppConfig::try_parse_from(["customer-lens"]).unwrap();
        assert_eq!(config.count, 200);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn parses_count_and_seed() {
        let config =
            AppConfig::try_parse_from(["customer-lens", "--count", "50", "--seed", "9"]).unwrap();
        assert_eq!(config.count, 50);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(AppConfig::try_parse_from(["customer-lens", "--count=-3"]).is_err());
    }
}
