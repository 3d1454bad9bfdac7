use rand::Rng;

use super::filter::{self, CleanOutcome};
use super::generate::generate;
use super::model::{Breakdown, Customer, DataStats};
use super::stats::{compute_breakdown, compute_stats};

/// Owns the generated baseline and the working collection shown to the user.
///
/// `clean` and `reset` are the only ways to change the working collection.
/// Statistics are recomputed from scratch whenever it is replaced, so they
/// always describe exactly the records in [`CustomerDataset::current`].
#[derive(Debug, Clone)]
pub struct CustomerDataset {
    original: Vec<Customer>,
    current: Vec<Customer>,
    stats: DataStats,
    breakdown: Breakdown,
    revision: u64,
}

impl CustomerDataset {
    /// Generate `count` customers and start with current == original.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let customers = generate(count, rng);
        log::info!("Generated {} customers", customers.len());
        Self::from_customers(customers)
    }

    /// Wrap an existing collection as the baseline.
    pub fn from_customers(customers: Vec<Customer>) -> Self {
        let stats = compute_stats(&customers);
        let breakdown = compute_breakdown(&customers);
        Self {
            current: customers.clone(),
            original: customers,
            stats,
            breakdown,
            revision: 0,
        }
    }

    pub fn original(&self) -> &[Customer] {
        &self.original
    }

    pub fn current(&self) -> &[Customer] {
        &self.current
    }

    pub fn stats(&self) -> &DataStats {
        &self.stats
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    /// Bumped on every change to the current collection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the working collection differs from the baseline.
    pub fn is_modified(&self) -> bool {
        self.current.len() != self.original.len()
    }

    /// Drop outlier/incomplete records from the current collection.
    /// Returns how many records were removed.
    pub fn clean(&mut self) -> usize {
        let CleanOutcome { retained, removed } = filter::clean(&self.current);
        log::info!(
            "Cleaning removed {removed} of {} records",
            self.current.len()
        );
        self.replace_current(retained);
        removed
    }

    /// Restore the current collection to the generated baseline.
    pub fn reset(&mut self) {
        log::info!("Resetting to {} original records", self.original.len());
        self.replace_current(self.original.clone());
    }

    fn replace_current(&mut self, customers: Vec<Customer>) {
        self.stats = compute_stats(&customers);
        self.breakdown = compute_breakdown(&customers);
        self.current = customers;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset(count: usize) -> CustomerDataset {
        CustomerDataset::generate(count, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn starts_with_current_equal_to_original() {
        let ds = dataset(200);
        assert_eq!(ds.current(), ds.original());
        assert_eq!(ds.stats().total_customers, 200);
        assert_eq!(ds.revision(), 0);
        assert!(!ds.is_modified());
    }

    #[test]
    fn clean_updates_stats_and_revision() {
        let ds_data = vec![
            Customer {
                id: 1,
                gender: crate::data::model::Gender::Male,
                age: 60,
                annual_income: 5,
                spending_score: 3,
                churn: true,
                segment: None,
            },
            Customer {
                id: 2,
                gender: crate::data::model::Gender::Female,
                age: 30,
                annual_income: 50,
                spending_score: 80,
                churn: false,
                segment: None,
            },
        ];
        let mut ds = CustomerDataset::from_customers(ds_data);
        assert_eq!(ds.stats().churn_rate, 0.5);

        let removed = ds.clean();
        assert_eq!(removed, 1);
        assert_eq!(ds.current().len(), 1);
        assert_eq!(ds.stats().total_customers, 1);
        assert_eq!(ds.stats().churn_rate, 0.0);
        assert_eq!(ds.stats().avg_age, 30.0);
        assert_eq!(ds.revision(), 1);
        assert!(ds.is_modified());
        assert_eq!(ds.original().len(), 2);
    }

    #[test]
    fn reset_restores_original_after_repeated_cleans() {
        let mut ds = dataset(200);
        let original = ds.original().to_vec();
        let original_stats = *ds.stats();

        ds.clean();
        let second = ds.clean();
        assert_eq!(second, 0);

        ds.reset();
        assert_eq!(ds.current(), original.as_slice());
        assert_eq!(*ds.stats(), original_stats);
        assert_eq!(ds.revision(), 3);
    }

    #[test]
    fn stats_always_match_current() {
        let mut ds = dataset(200);
        ds.clean();
        assert_eq!(*ds.stats(), compute_stats(ds.current()));
        assert_eq!(*ds.breakdown(), compute_breakdown(ds.current()));
        ds.reset();
        assert_eq!(*ds.stats(), compute_stats(ds.current()));
    }

    #[test]
    fn empty_dataset_operations_are_total() {
        let mut ds = dataset(0);
        assert_eq!(ds.clean(), 0);
        ds.reset();
        assert!(ds.current().is_empty());
        assert_eq!(*ds.stats(), DataStats::default());
    }
}
