use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One synthesized day of review activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub songs: u64,
    pub albums: u64,
    pub approved_songs: u64,
    pub approved_albums: u64,
    pub reward: u64,
}

impl DayRecord {
    pub fn total_reviews(&self) -> u64 {
        self.songs + self.albums
    }

    pub fn approved_reviews(&self) -> u64 {
        self.approved_songs + self.approved_albums
    }
}
