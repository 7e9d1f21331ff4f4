use chrono::{Local, NaiveDate};
use tracing::info;

use crate::model::config::AppConfig;
use crate::model::range::{RangeSelector, RANGE_PRESETS};
use crate::random::{RandomSource, ThreadRandom};
use crate::service::aggregator::Aggregator;
use crate::service::chart_renderer::{ChartLayout, ChartRenderer};
use crate::service::dto::OverlaySnapshot;
use crate::service::series_generator::SeriesGenerator;
use crate::surface::Surface;

/// Owns the balance overlay state and runs generate -> summarize -> compare -> draw.
pub struct OverlayController<R: RandomSource> {
    generator: SeriesGenerator<R>,
    aggregator: Aggregator,
    renderer: ChartRenderer,
    range: RangeSelector,
    open: bool,
    last: Option<OverlaySnapshot>,
}

impl OverlayController<ThreadRandom> {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config, ThreadRandom::new())
    }
}

impl<R: RandomSource> OverlayController<R> {
    pub fn new(config: &AppConfig, rng: R) -> Self {
        Self {
            generator: SeriesGenerator::new(config.generator.clone(), rng),
            aggregator: Aggregator::new(config.comparison),
            renderer: ChartRenderer::new(config.chart.clone()),
            range: config.default_range,
            open: false,
            last: None,
        }
    }

    pub fn range(&self) -> RangeSelector {
        self.range
    }

    pub fn set_range(&mut self, range: RangeSelector) {
        self.range = range;
    }

    /// Moves to the next preset pill, wrapping around.
    pub fn next_range(&mut self) {
        let i = self.range.preset_index().map(|i| (i + 1) % RANGE_PRESETS.len()).unwrap_or(0);
        self.range = RANGE_PRESETS[i];
    }

    pub fn previous_range(&mut self) {
        let i = match self.range.preset_index() {
            Some(0) | None => RANGE_PRESETS.len() - 1,
            Some(i) => i - 1,
        };
        self.range = RANGE_PRESETS[i];
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn last_snapshot(&self) -> Option<&OverlaySnapshot> {
        self.last.as_ref()
    }

    /// Builds a fresh snapshot for the current range without drawing.
    pub fn refresh(&mut self, today: NaiveDate) -> &OverlaySnapshot {
        let snapshot = self.build_snapshot(today);
        self.last.insert(snapshot)
    }

    /// Refreshes and draws the reward chart onto `surface`.
    pub fn render<S: Surface + ?Sized>(&mut self, today: NaiveDate, surface: Option<&mut S>) -> &OverlaySnapshot {
        let snapshot = self.build_snapshot(today);
        self.renderer.render(surface, &snapshot.rewards);
        self.last.insert(snapshot)
    }

    fn build_snapshot(&mut self, today: NaiveDate) -> OverlaySnapshot {
        let range = self.range;
        let series = self.generator.generate(range, today);
        let totals = self.aggregator.summarize(&series);
        let changes = self
            .aggregator
            .compute_change(&mut self.generator, &totals, range, today);
        let top_earnings = self.generator.top_earnings();

        info!(%range, days = series.len(), reward = totals.reward, "overlay refreshed");
        OverlaySnapshot::build(range, series, totals, &changes, top_earnings, Local::now())
    }

    /// Draws the last snapshot again, e.g. after the surface was resized.
    pub fn redraw<S: Surface + ?Sized>(&self, surface: Option<&mut S>) -> Option<ChartLayout> {
        let rewards = self.last.as_ref().map(|s| s.rewards.as_slice()).unwrap_or(&[]);
        self.renderer.render(surface, rewards)
    }
}
