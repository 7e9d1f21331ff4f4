use chrono::NaiveDate;
use rewards_core::{AppConfig, OverlayController, OverlaySnapshot, RandomSource, RangeSelector, ThreadRandom, RANGE_PRESETS};
use tracing::debug;

use crate::tui::canvas_surface::TerminalSurface;

pub struct DashboardApp<R: RandomSource = ThreadRandom> {
    pub controller: OverlayController<R>,
    pub surface: TerminalSurface,
    today: NaiveDate,
}

impl DashboardApp<ThreadRandom> {
    pub fn new(config: &AppConfig, today: NaiveDate) -> Self {
        Self::with_controller(OverlayController::from_config(config), today)
    }
}

impl<R: RandomSource> DashboardApp<R> {
    pub fn with_controller(mut controller: OverlayController<R>, today: NaiveDate) -> Self {
        let mut surface = TerminalSurface::new(0);
        controller.open();
        controller.render(today, Some(&mut surface));
        Self {
            controller,
            surface,
            today,
        }
    }

    pub fn snapshot(&self) -> Option<&OverlaySnapshot> {
        self.controller.last_snapshot()
    }

    pub fn range(&self) -> RangeSelector {
        self.controller.range()
    }

    pub fn next_range(&mut self) {
        self.controller.next_range();
        self.refresh();
    }

    pub fn previous_range(&mut self) {
        self.controller.previous_range();
        self.refresh();
    }

    /// `index` is zero-based; out-of-range keys are ignored.
    pub fn select_preset(&mut self, index: usize) {
        if let Some(&range) = RANGE_PRESETS.get(index) {
            if range != self.controller.range() {
                self.controller.set_range(range);
                self.refresh();
            }
        }
    }

    pub fn toggle_overlay(&mut self) {
        self.controller.toggle();
    }

    pub fn is_overlay_open(&self) -> bool {
        self.controller.is_open()
    }

    /// Regenerates the series and redraws the chart.
    pub fn refresh(&mut self) {
        self.controller.render(self.today, Some(&mut self.surface));
    }

    /// Redraws the last snapshot when the chart area changed width.
    pub fn fit_chart(&mut self, columns: u16) {
        if self.surface.columns() == columns {
            return;
        }
        debug!(columns, "chart area resized");
        self.surface.set_columns(columns);
        self.controller.redraw(Some(&mut self.surface));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewards_core::{ComparisonMode, ConstantRandom};

    fn app() -> DashboardApp<ConstantRandom> {
        let mut config = AppConfig::default();
        config.comparison = ComparisonMode::Cached;
        let controller = OverlayController::new(&config, ConstantRandom(0.5));
        DashboardApp::with_controller(controller, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
    }

    #[test]
    fn test_starts_open_with_a_snapshot() {
        let app = app();
        assert!(app.is_overlay_open());
        assert_eq!(app.range(), RangeSelector::Days(30));
        assert_eq!(app.snapshot().unwrap().series.len(), 30);
        // nothing measured yet, so the renderer falls back to its minimum width
        assert_eq!(app.surface.width(), 300.0);
    }

    #[test]
    fn test_preset_keys() {
        let mut app = app();
        app.select_preset(0);
        assert_eq!(app.range(), RangeSelector::Days(7));
        assert_eq!(app.snapshot().unwrap().series.len(), 7);

        app.select_preset(4);
        assert_eq!(app.range(), RangeSelector::Lifetime);

        app.select_preset(9);
        assert_eq!(app.range(), RangeSelector::Lifetime);
    }

    #[test]
    fn test_cycling_ranges_refreshes() {
        let mut app = app();
        app.next_range();
        assert_eq!(app.range(), RangeSelector::Days(90));
        assert_eq!(app.snapshot().unwrap().series.len(), 90);
        app.previous_range();
        app.previous_range();
        assert_eq!(app.range(), RangeSelector::Days(7));
    }

    #[test]
    fn test_fit_chart_only_redraws_on_change() {
        let mut app = app();
        app.fit_chart(100);
        assert_eq!(app.surface.width(), 800.0);
        let strokes = app.surface.strokes.len();
        assert!(strokes > 0);

        app.fit_chart(100);
        assert_eq!(app.surface.strokes.len(), strokes);
    }

    #[test]
    fn test_toggle_overlay() {
        let mut app = app();
        app.toggle_overlay();
        assert!(!app.is_overlay_open());
        app.toggle_overlay();
        assert!(app.is_overlay_open());
    }
}
