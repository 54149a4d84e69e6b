use crate::domain::model::{KernelParameters, KernelRecord, Triplet};
use crate::utils::error::{GeneratorError, Result};
use std::collections::BTreeMap;

/// Kernel parameters keyed by `(m, n, k)`, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterTable {
    entries: BTreeMap<Triplet, KernelParameters>,
    overridden: usize,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table in input order; a later record for the same triplet replaces
    /// the earlier one.
    pub fn from_records(records: &[KernelRecord]) -> Result<Self> {
        let mut table = Self::new();
        for (index, record) in records.iter().enumerate() {
            let (key, pars) = record
                .as_key_value()
                .map_err(|reason| GeneratorError::InvalidKernelError { index, reason })?;
            table.insert(key, pars);
        }
        Ok(table)
    }

    /// Returns the replaced parameters, if any.
    pub fn insert(&mut self, key: Triplet, pars: KernelParameters) -> Option<KernelParameters> {
        let previous = self.entries.insert(key, pars);
        if let Some(old) = &previous {
            self.overridden += 1;
            tracing::debug!(
                "Duplicate kernel {}: {:?} replaced by {:?}",
                key,
                old.values(),
                pars.values()
            );
        }
        previous
    }

    pub fn get(&self, key: &Triplet) -> Option<&KernelParameters> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records that replaced an earlier record with the same triplet.
    pub fn overridden(&self) -> usize {
        self.overridden
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Triplet, &KernelParameters)> {
        self.entries.iter()
    }
}
