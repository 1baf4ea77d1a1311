//! Year-indexed value series

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values keyed by year, iterated in chronological order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlySeries(BTreeMap<u16, f64>);

impl YearlySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, year: u16, value: f64) {
        self.0.insert(year, value);
    }

    pub fn get(&self, year: u16) -> Option<f64> {
        self.0.get(&year).copied()
    }

    /// True when every year of the range has a value
    pub fn covers(&self, years: std::ops::RangeInclusive<u16>) -> bool {
        years.into_iter().all(|y| self.0.contains_key(&y))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.0.iter().map(|(y, v)| (*y, *v))
    }
}

impl FromIterator<(u16, f64)> for YearlySeries {
    fn from_iter<I: IntoIterator<Item = (u16, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_range() {
        let series: YearlySeries = [(2002, 1.0), (2003, 2.0), (2005, 3.0)].into_iter().collect();
        assert!(series.covers(2002..=2003));
        assert!(!series.covers(2002..=2005));
        assert_eq!(series.iter().map(|(y, _)| y).collect::<Vec<_>>(), vec![2002, 2003, 2005]);
    }
}
