/// Protonation states of the two titratable sites in one simulation cycle.
///
/// The simulation only ever writes `0` or `1`, but the states are kept as
/// plain integers; nothing downstream relies on them being binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SitePair {
    pub site1: i32,
    pub site2: i32,
}

impl SitePair {
    pub fn new(site1: i32, site2: i32) -> Self {
        Self { site1, site2 }
    }

    /// Returns `1` when exactly one site is occupied and `0` when both or neither are.
    ///
    /// Computed in floating point as `s1 * (1 - s2) + (1 - s1) * s2` rather than
    /// with a logical exclusive-or. Any pair of `i32` states yields a finite value.
    #[inline]
    pub fn exclusive_indicator(&self) -> f64 {
        let s1 = f64::from(self.site1);
        let s2 = f64::from(self.site2);
        s1 * (1.0 - s2) + (1.0 - s1) * s2
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        matches!(self.site1, 0 | 1) && matches!(self.site2, 0 | 1)
    }
}

impl From<(i32, i32)> for SitePair {
    fn from((site1, site2): (i32, i32)) -> Self {
        Self::new(site1, site2)
    }
}

/// The ordered cycles read from a single log file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleTable {
    rows: Vec<SitePair>,
}

impl SampleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pair: SitePair) {
        self.rows.push(pair);
    }

    pub fn rows(&self) -> &[SitePair] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cycles with a state other than `0` or `1` on either site.
    pub fn non_binary_count(&self) -> usize {
        self.rows.iter().filter(|pair| !pair.is_binary()).count()
    }

    pub fn into_rows(self) -> Vec<SitePair> {
        self.rows
    }
}

impl FromIterator<SitePair> for SampleTable {
    fn from_iter<I: IntoIterator<Item = SitePair>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<SitePair>> for SampleTable {
    fn from(rows: Vec<SitePair>) -> Self {
        Self { rows }
    }
}
