use super::config::GroupingStrategy;
use crate::core::io::header::HeaderInfo;
use crate::core::models::group::{GroupKey, PhGroup};
use crate::core::models::samples::SampleTable;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::debug;

/// Merges the sample tables of many runs into per-pH groups.
///
/// Groups iterate in ascending pH order. Within a group, rows keep the order in
/// which their files were added, and each file's own row order.
#[derive(Debug, Default)]
pub struct PhAggregator {
    strategy: GroupingStrategy,
    groups: BTreeMap<GroupKey, PhGroup>,
}

impl PhAggregator {
    pub fn new(strategy: GroupingStrategy) -> Self {
        Self {
            strategy,
            groups: BTreeMap::new(),
        }
    }

    fn key_for(&self, header: &HeaderInfo) -> GroupKey {
        match self.strategy {
            GroupingStrategy::Value => GroupKey::by_value(header.ph),
            GroupingStrategy::Label => GroupKey::by_label(header.ph, header.label.trim()),
        }
    }

    /// Adds one run, appending its rows to the group for its pH.
    pub fn add(&mut self, header: &HeaderInfo, table: SampleTable) {
        let key = self.key_for(header);
        let rows = table.len();
        match self.groups.entry(key) {
            Entry::Occupied(mut entry) => {
                let group = entry.get_mut();
                group.extend(table);
                debug!(
                    "Appended {} rows to pH {} group (now {} rows from {} files).",
                    rows,
                    header.label,
                    group.len(),
                    group.source_count()
                );
            }
            Entry::Vacant(entry) => {
                let group = entry.insert(PhGroup::new(header.ph));
                group.extend(table);
                debug!("Started pH {} group with {} rows.", header.label, rows);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in ascending pH order.
    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &PhGroup)> {
        self.groups.iter()
    }

    pub fn into_groups(self) -> impl Iterator<Item = (GroupKey, PhGroup)> {
        self.groups.into_iter()
    }
}
