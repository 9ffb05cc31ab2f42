//! Dashboard state: the record collection snapshot and selection policy

use siminvest_engine::RegencyRecord;
use siminvest_engine::stats::find_record;

use crate::seed;

/// Owns the current record collection as a single consistent snapshot.
///
/// Updates replace the collection wholesale; aggregation always reads a
/// fully swapped-in snapshot, never one mutated mid-computation.
pub struct Dashboard {
    records: Vec<RegencyRecord>,
    custom_data: bool,
}

impl Dashboard {
    /// Start from the bundled seed dataset
    pub fn with_seed() -> Self {
        Self {
            records: seed::seed_records(),
            custom_data: false,
        }
    }

    /// Start from an externally supplied collection (snapshot load,
    /// cloud pull)
    pub fn with_records(records: Vec<RegencyRecord>) -> Self {
        Self {
            records,
            custom_data: true,
        }
    }

    pub fn records(&self) -> &[RegencyRecord] {
        &self.records
    }

    /// True when the collection came from import/sync rather than the seed
    pub fn is_custom(&self) -> bool {
        self.custom_data
    }

    /// Replace the whole collection (import, cloud pull)
    pub fn replace(&mut self, records: Vec<RegencyRecord>) {
        self.records = records;
        self.custom_data = true;
    }

    /// Restore the bundled seed dataset
    pub fn reset(&mut self) {
        self.records = seed::seed_records();
        self.custom_data = false;
    }

    /// Region selection: lookup by id, falling back to the first record on
    /// a miss. `None` only when the collection is empty.
    pub fn selected(&self, id: Option<&str>) -> Option<&RegencyRecord> {
        match id {
            Some(id) => find_record(&self.records, id).or_else(|| self.records.first()),
            None => self.records.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dashboard_is_not_custom() {
        let dashboard = Dashboard::with_seed();
        assert!(!dashboard.is_custom());
        assert!(!dashboard.records().is_empty());
    }

    #[test]
    fn test_replace_swaps_whole_collection() {
        let mut dashboard = Dashboard::with_seed();
        let replacement = vec![dashboard.records()[3].clone()];

        dashboard.replace(replacement);
        assert_eq!(dashboard.records().len(), 1);
        assert!(dashboard.is_custom());

        dashboard.reset();
        assert!(!dashboard.is_custom());
        assert_eq!(dashboard.records().len(), seed::seed_records().len());
    }

    #[test]
    fn test_selection_falls_back_to_first_record() {
        let dashboard = Dashboard::with_seed();
        let first = dashboard.records()[0].kab_kota.clone();

        let by_id = dashboard.selected(Some("sumbawa")).unwrap();
        assert_eq!(by_id.kab_kota, "Sumbawa");

        let miss = dashboard.selected(Some("tidak-ada")).unwrap();
        assert_eq!(miss.kab_kota, first);

        let none = dashboard.selected(None).unwrap();
        assert_eq!(none.kab_kota, first);
    }

    #[test]
    fn test_empty_collection_has_no_selection() {
        let dashboard = Dashboard::with_records(Vec::new());
        assert!(dashboard.selected(Some("mataram")).is_none());
        assert!(dashboard.selected(None).is_none());
    }
}
