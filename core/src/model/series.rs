use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::day_record::DayRecord;

/// Gap-free run of days in ascending date order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Series {
    days: Vec<DayRecord>,
}

impl Series {
    /// Callers must pass consecutive, ascending dates.
    pub(crate) fn from_days(days: Vec<DayRecord>) -> Self {
        debug_assert!(days
            .windows(2)
            .all(|w| w[0].date.succ_opt() == Some(w[1].date)));
        Self { days }
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    pub fn rewards(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.reward as f64).collect()
    }

    /// Reward of the day before the last one, or 0 for windows shorter than two days.
    pub fn yesterday_reward(&self) -> u64 {
        if self.days.len() >= 2 {
            self.days[self.days.len() - 2].reward
        } else {
            0
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
