use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::debug;

use crate::model::change::{ChangeRecord, Kpi};
use crate::model::config::ComparisonMode;
use crate::model::range::RangeSelector;
use crate::model::series::Series;
use crate::model::totals::Totals;
use crate::random::RandomSource;
use crate::service::series_generator::SeriesGenerator;
use crate::time::{previous_window_end, round_half_up};

pub type KpiChanges = BTreeMap<Kpi, ChangeRecord>;

/// Sums every field of the series, then derives the review counts.
pub fn summarize(series: &Series) -> Totals {
    let mut totals = series.days().iter().fold(Totals::default(), |mut acc, d| {
        acc.songs += d.songs;
        acc.albums += d.albums;
        acc.approved_songs += d.approved_songs;
        acc.approved_albums += d.approved_albums;
        acc.reward += d.reward;
        acc
    });

    totals.total_reviews = totals.songs + totals.albums;
    totals.approved_reviews = totals.approved_songs + totals.approved_albums;
    totals.rejected_reviews = totals.total_reviews.saturating_sub(totals.approved_reviews);
    totals
}

pub fn change(current: u64, baseline: u64) -> ChangeRecord {
    if baseline > 0 {
        let pct = (current as f64 - baseline as f64) * 100.0 / baseline as f64;
        ChangeRecord {
            percent: Some(round_half_up(pct) as i64),
            improved: current >= baseline,
        }
    } else {
        ChangeRecord {
            percent: None,
            improved: current > 0,
        }
    }
}

/// Per-KPI change of `current` against `baseline`.
pub fn compare(current: &Totals, baseline: &Totals) -> KpiChanges {
    Kpi::ALL
        .iter()
        .map(|&kpi| (kpi, change(current.kpi_value(kpi), baseline.kpi_value(kpi))))
        .collect()
}

/// Derives period-over-period change figures.
pub struct Aggregator {
    mode: ComparisonMode,
    previous: HashMap<(u32, NaiveDate), Totals>,
}

impl Aggregator {
    pub fn new(mode: ComparisonMode) -> Self {
        Self {
            mode,
            previous: HashMap::new(),
        }
    }

    pub fn summarize(&self, series: &Series) -> Totals {
        summarize(series)
    }

    /// Compares `current` with the equal-length period ending the day before
    /// the current window starts.
    pub fn compute_change<R: RandomSource>(
        &mut self,
        generator: &mut SeriesGenerator<R>,
        current: &Totals,
        range: RangeSelector,
        reference_date: NaiveDate,
    ) -> KpiChanges {
        let days = generator.effective_days(range);
        let Some(prior_end) = previous_window_end(reference_date, days) else {
            debug!(days, end = %reference_date, "no earlier period to compare with");
            return compare(current, &Totals::default());
        };

        let baseline = match self.mode {
            ComparisonMode::Regenerate => summarize(&generator.generate_days(days, prior_end)),
            ComparisonMode::Cached => *self
                .previous
                .entry((days, prior_end))
                .or_insert_with(|| summarize(&generator.generate_days(days, prior_end))),
        };
        debug!(days, %prior_end, mode = ?self.mode, baseline_reward = baseline.reward, "computed comparison period");

        compare(current, &baseline)
    }
}
