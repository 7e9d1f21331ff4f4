use serde::{Deserialize, Serialize};

/// Summary metrics shown as cards above the chart.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Kpi {
    ReviewedSongs,
    ReviewedAlbums,
    ApprovedReviews,
    RejectedReviews,
    EstimatedRewards,
    TotalReviews,
}

impl Kpi {
    pub const ALL: [Kpi; 6] = [
        Kpi::ReviewedSongs,
        Kpi::ReviewedAlbums,
        Kpi::ApprovedReviews,
        Kpi::RejectedReviews,
        Kpi::EstimatedRewards,
        Kpi::TotalReviews,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Kpi::ReviewedSongs => "reviewedSongs",
            Kpi::ReviewedAlbums => "reviewedAlbums",
            Kpi::ApprovedReviews => "approvedReviews",
            Kpi::RejectedReviews => "rejectedReviews",
            Kpi::EstimatedRewards => "estimatedRewards",
            Kpi::TotalReviews => "totalReviews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Kpi::ReviewedSongs => "Reviewed Songs",
            Kpi::ReviewedAlbums => "Reviewed Albums",
            Kpi::ApprovedReviews => "Approved Reviews",
            Kpi::RejectedReviews => "Rejected Reviews",
            Kpi::EstimatedRewards => "Est. Rewards",
            Kpi::TotalReviews => "Total Reviews",
        }
    }

    pub fn is_currency(&self) -> bool {
        matches!(self, Kpi::EstimatedRewards)
    }
}

/// Change of one KPI against the preceding period of equal length.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRecord {
    /// `None` when the baseline is zero.
    pub percent: Option<i64>,
    pub improved: bool,
}
