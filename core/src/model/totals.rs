use serde::{Deserialize, Serialize};

use crate::model::change::Kpi;

/// Period sums over a series. Built only through `Aggregator::summarize`,
/// so the derived counts always come from final sums.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub songs: u64,
    pub albums: u64,
    pub approved_songs: u64,
    pub approved_albums: u64,
    pub reward: u64,
    pub total_reviews: u64,
    pub approved_reviews: u64,
    pub rejected_reviews: u64,
}

impl Totals {
    pub fn kpi_value(&self, kpi: Kpi) -> u64 {
        match kpi {
            Kpi::ReviewedSongs => self.songs,
            Kpi::ReviewedAlbums => self.albums,
            Kpi::ApprovedReviews => self.approved_reviews,
            Kpi::RejectedReviews => self.rejected_reviews,
            Kpi::EstimatedRewards => self.reward,
            Kpi::TotalReviews => self.total_reviews,
        }
    }

    /// Approved share of all reviews as a whole percent, `None` with no reviews.
    pub fn conversion_percent(&self) -> Option<u64> {
        if self.total_reviews == 0 {
            return None;
        }
        let pct = self.approved_reviews as f64 / self.total_reviews as f64 * 100.0;
        Some(pct.round() as u64)
    }
}
