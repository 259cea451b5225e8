//! Read-only boss dataset.

use std::sync::Arc;

use crate::error::DatasetError;
use crate::record::BossRecord;

/// Ordered, non-empty collection of boss records.
///
/// Cloning is cheap; every clone shares the same records.
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Arc<[Arc<BossRecord>]>,
}

impl Dataset {
    /// Wraps records in load order. An empty dataset is rejected.
    pub fn new(records: Vec<BossRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self {
            records: records.into_iter().map(Arc::new).collect(),
        })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<BossRecord>> {
        self.records.get(index)
    }

    /// Looks a record up by name, ignoring case and surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<BossRecord>> {
        self.records.iter().find(|record| record.is_named(name))
    }

    /// Record names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_is_rejected() {
        assert_eq!(Dataset::new(Vec::new()).unwrap_err(), DatasetError::Empty);
    }

    #[test]
    fn lookup_is_case_insensitive_and_order_is_kept() {
        let dataset = Dataset::new(vec![
            BossRecord::builder("Gruz Mother").build(),
            BossRecord::builder("Hornet").build(),
        ])
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.names().collect::<Vec<_>>(), ["Gruz Mother", "Hornet"]);
        assert_eq!(dataset.find_by_name("gruz MOTHER").unwrap().name(), "Gruz Mother");
        assert!(dataset.find_by_name("Radiance").is_none());
    }
}
