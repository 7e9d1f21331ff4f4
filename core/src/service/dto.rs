use serde::{Deserialize, Serialize};
use chrono::{DateTime, Local};

use crate::format::{format_change, format_count, format_currency, format_date_range, format_percent};
use crate::model::change::{ChangeRecord, Kpi};
use crate::model::range::RangeSelector;
use crate::model::series::Series;
use crate::model::top_item::TopEarning;
use crate::model::totals::Totals;
use crate::service::aggregator::KpiChanges;

/// One KPI card, pre-formatted for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub kpi: Kpi,
    pub label: String,
    pub value: u64,
    pub display_value: String,
    pub change: ChangeRecord,
    pub display_change: String,
}

/// Everything one render cycle of the balance overlay shows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OverlaySnapshot {
    pub range: RangeSelector,
    pub updated_at: DateTime<Local>,

    // Header strings
    pub current_estimate: String, // "$1,234"
    pub yesterday: String,        // "Yesterday: $56"
    pub date_range: String,       // "Jan 2 — Jan 31"

    // Three summary columns
    pub estimated: String,
    pub qualified: String,
    pub conversion: String,

    pub kpis: Vec<KpiCard>,
    pub top_earnings: Vec<TopEarning>,
    pub rewards: Vec<f64>,
    pub totals: Totals,
    pub series: Series,
}

impl OverlaySnapshot {
    pub fn build(
        range: RangeSelector,
        series: Series,
        totals: Totals,
        changes: &KpiChanges,
        top_earnings: Vec<TopEarning>,
        updated_at: DateTime<Local>,
    ) -> Self {
        let estimate = format_currency(totals.reward);

        let kpis = Kpi::ALL
            .iter()
            .map(|&kpi| {
                let value = totals.kpi_value(kpi);
                let change = changes.get(&kpi).copied().unwrap_or(ChangeRecord {
                    percent: None,
                    improved: value > 0,
                });
                KpiCard {
                    kpi,
                    label: kpi.label().to_string(),
                    value,
                    display_value: if kpi.is_currency() {
                        format_currency(value)
                    } else {
                        format_count(value)
                    },
                    display_change: format_change(&change),
                    change,
                }
            })
            .collect();

        Self {
            range,
            updated_at,
            current_estimate: estimate.clone(),
            yesterday: format!("Yesterday: {}", format_currency(series.yesterday_reward())),
            date_range: format_date_range(series.start(), series.end()),
            estimated: estimate,
            qualified: format_count(totals.total_reviews),
            conversion: format_percent(totals.conversion_percent()),
            kpis,
            top_earnings,
            rewards: series.rewards(),
            totals,
            series,
        }
    }

    pub fn kpi(&self, kpi: Kpi) -> Option<&KpiCard> {
        self.kpis.iter().find(|c| c.kpi == kpi)
    }
}
