//! Property tests for the JSON data file.

use proptest::prelude::*;

use nannymiles::{JsonStorageRepository, StorageData, StorageRepository};

use crate::strategies::{expenses, trips};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: whatever is saved loads back unchanged, summaries included.
    #[test]
    fn property_save_then_load_is_lossless(trips in trips(), expenses in expenses()) {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonStorageRepository::with_path(dir.path().join("data.json"));

        let mut data = StorageData::new();
        for trip in trips {
            data.add_trip(trip).unwrap();
        }
        for expense in expenses {
            data.add_expense(expense).unwrap();
        }
        // A binary-exact rate keeps every stored amount exact.
        data.calculate_and_update_weekly_summaries(0.5);

        repo.save(&data).unwrap();
        let loaded = repo.load().unwrap();

        prop_assert_eq!(loaded, data);
    }

    /// PROPERTY: arbitrary bytes never panic the loader.
    #[test]
    fn property_load_never_panics(content in ".{0,200}") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, content).unwrap();

        let _ = JsonStorageRepository::with_path(path).load();
    }
}
