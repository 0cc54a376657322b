use super::samples::{SampleTable, SitePair};
use std::cmp::Ordering;
use std::fmt;

/// A finite pH value usable as an exactly-compared, totally-ordered map key.
///
/// Equality is bit-exact after normalising `-0.0` to `0.0`, so `7.0` and
/// `7.0000001` are different keys.
#[derive(Debug, Clone, Copy)]
pub struct PhValue(f64);

impl PhValue {
    /// Returns `None` for NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for PhValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PhValue {}

impl PartialOrd for PhValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for PhValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies the pH group a run belongs to.
///
/// Keys order by pH value first. The label is only set when grouping by the
/// header text, in which case runs whose labels differ but parse to the same
/// number (`7.0` and `7.00`) stay apart and are ordered by their text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub ph: PhValue,
    pub label: Option<String>,
}

impl GroupKey {
    pub fn by_value(ph: PhValue) -> Self {
        Self { ph, label: None }
    }

    pub fn by_label(ph: PhValue, label: impl Into<String>) -> Self {
        Self {
            ph,
            label: Some(label.into()),
        }
    }
}

/// Every cycle recorded at one pH, across all contributing files.
#[derive(Debug, Clone, PartialEq)]
pub struct PhGroup {
    ph: PhValue,
    samples: Vec<SitePair>,
    source_count: usize,
}

impl PhGroup {
    pub fn new(ph: PhValue) -> Self {
        Self {
            ph,
            samples: Vec::new(),
            source_count: 0,
        }
    }

    /// Appends a file's cycles after the ones already in the group.
    pub fn extend(&mut self, table: SampleTable) {
        self.samples.extend(table.into_rows());
        self.source_count += 1;
    }

    pub fn ph(&self) -> f64 {
        self.ph.get()
    }

    pub fn samples(&self) -> &[SitePair] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of files merged into this group.
    pub fn source_count(&self) -> usize {
        self.source_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(i32, i32)]) -> SampleTable {
        rows.iter().copied().map(SitePair::from).collect()
    }

    #[test]
    fn ph_value_rejects_non_finite_numbers() {
        assert!(PhValue::new(f64::NAN).is_none());
        assert!(PhValue::new(f64::INFINITY).is_none());
        assert!(PhValue::new(f64::NEG_INFINITY).is_none());
    }

    #[test]
    fn ph_value_treats_signed_zeros_as_equal() {
        assert_eq!(PhValue::new(-0.0), PhValue::new(0.0));
    }

    #[test]
    fn ph_value_compares_exactly() {
        let a = PhValue::new(7.0).unwrap();
        let b = PhValue::new(7.0000001).unwrap();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn group_keys_order_by_value_then_label() {
        let ph7 = PhValue::new(7.0).unwrap();
        let ph4 = PhValue::new(4.0).unwrap();
        let mut keys = vec![
            GroupKey::by_label(ph7, "7.00"),
            GroupKey::by_label(ph4, "4.0"),
            GroupKey::by_label(ph7, "7.0"),
        ];
        keys.sort();
        let labels: Vec<_> = keys.iter().map(|k| k.label.as_deref().unwrap()).collect();
        assert_eq!(labels, vec!["4.0", "7.0", "7.00"]);
    }

    #[test]
    fn extend_appends_rows_in_order_and_counts_sources() {
        let mut group = PhGroup::new(PhValue::new(7.0).unwrap());
        group.extend(table(&[(0, 1), (1, 0), (0, 0)]));
        group.extend(table(&[(1, 1), (0, 1)]));

        assert_eq!(group.len(), 5);
        assert_eq!(group.source_count(), 2);
        assert_eq!(group.samples()[3], SitePair::new(1, 1));
        assert_eq!(group.samples()[4], SitePair::new(0, 1));
    }
}
