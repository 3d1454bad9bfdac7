//! Integration tests for the customer dataset lifecycle

use customer_lens::data::export::export_file;
use customer_lens::data::filter::clean;
use customer_lens::data::generate::generate;
use customer_lens::data::stats::compute_stats;
use customer_lens::data::{Customer, CustomerDataset, Gender};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(count: usize, seed: u64) -> Vec<Customer> {
    generate(count, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn total_matches_generated_size() {
    for (count, seed) in [(0, 1), (1, 2), (17, 3), (200, 4), (1_000, 5)] {
        let stats = compute_stats(&seeded(count, seed));
        assert_eq!(stats.total_customers, count);
        assert!((0.0..=1.0).contains(&stats.churn_rate));
    }
}

#[test]
fn clean_never_grows_and_keeps_order() {
    for seed in 0..20 {
        let data = seeded(300, seed);
        let outcome = clean(&data);

        assert!(outcome.retained.len() <= data.len());
        assert_eq!(outcome.removed, data.len() - outcome.retained.len());

        let positions: Vec<usize> = outcome
            .retained
            .iter()
            .map(|c| data.iter().position(|d| d.id == c.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(clean(&outcome.retained).retained, outcome.retained);
    }
}

#[test]
fn dataset_round_trip_through_clean_and_reset() {
    let mut ds = CustomerDataset::from_customers(vec![
        customer(1, 5, 3),
        customer(2, 12, 10),
        customer(3, 20, 60),
        customer(4, 8, 6),
        customer(5, 50, 90),
    ]);

    assert_eq!(ds.clean(), 2);
    let ids: Vec<u32> = ds.current().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 3, 5]);
    assert_eq!(ds.stats().total_customers, 3);

    assert_eq!(ds.clean(), 0);
    ds.reset();
    assert_eq!(ds.current(), ds.original());
    assert_eq!(ds.stats().total_customers, 5);
}

#[test]
fn csv_export_reads_back_with_csv_reader() {
    let data = seeded(25, 9);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.csv");
    export_file(&path, &data).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["id", "gender", "age", "annual_income", "spending_score", "churn", "segment"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 25);
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[24][0], "25");
}

#[test]
fn json_and_parquet_exports_are_written() {
    let data = seeded(10, 11);
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("customers.json");
    export_file(&json_path, &data).unwrap();
    let text = std::fs::read_to_string(&json_path).unwrap();
    let parsed: Vec<Customer> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, data);

    let parquet_path = dir.path().join("customers.parquet");
    export_file(&parquet_path, &data).unwrap();
    assert!(std::fs::metadata(&parquet_path).unwrap().len() > 0);
}

fn customer(id: u32, income: u32, score: u32) -> Customer {
    Customer {
        id,
        gender: Gender::Female,
        age: 35,
        annual_income: income,
        spending_score: score,
        churn: false,
        segment: None,
    }
}
