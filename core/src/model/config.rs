use serde::{Deserialize, Serialize};

use crate::model::range::RangeSelector;

/// Closed-open band `[min, max)` for a uniform draw.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Band of `center * (1 - spread) .. center * (1 + spread)`.
    pub fn around(center: f64, spread: f64) -> Self {
        Self::new(center * (1.0 - spread), center * (1.0 + spread))
    }
}

/// Every tunable of the synthetic data. Older dashboard builds paid albums
/// from `8..10` instead of `8..15`; set `album_reward` to get that back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub songs_per_week: f64,
    pub albums_per_week: f64,
    /// Relative spread of the daily counts around the weekly average.
    pub count_spread: f64,
    pub song_approval_rate: f64,
    pub album_approval_rate: f64,
    /// Per-day multiplier applied to the approval rate.
    pub song_approval_jitter: Band,
    pub album_approval_jitter: Band,
    pub song_reward: Band,
    pub album_reward: Band,
    pub min_days: u32,
    pub max_days: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            songs_per_week: 42.0,
            albums_per_week: 12.0,
            count_spread: 0.25,
            song_approval_rate: 0.88,
            album_approval_rate: 0.65,
            song_approval_jitter: Band::new(0.95, 1.05),
            album_approval_jitter: Band::new(0.9, 1.1),
            song_reward: Band::new(1.0, 5.0),
            album_reward: Band::new(8.0, 15.0),
            min_days: 7,
            max_days: 365,
        }
    }
}

impl GeneratorConfig {
    pub fn daily_songs(&self) -> f64 {
        self.songs_per_week / 7.0
    }

    pub fn daily_albums(&self) -> f64 {
        self.albums_per_week / 7.0
    }

    pub fn effective_days(&self, range: RangeSelector) -> u32 {
        range.effective_days(self.min_days, self.max_days)
    }
}

/// Straight RGBA colour, alpha in `0.0..=1.0`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub content_height: f64,
    pub bottom_margin: f64,
    pub min_width: f64,
    /// Intervals between reference lines; lines drawn = intervals + 1.
    pub grid_intervals: u32,
    pub label_padding: f64,
    pub line_width: f64,
    pub line_color: Rgba,
    pub grid_color: Rgba,
    pub label_color: Rgba,
    pub fill_top: Rgba,
    pub fill_bottom: Rgba,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            content_height: 300.0,
            bottom_margin: 40.0,
            min_width: 300.0,
            grid_intervals: 4,
            label_padding: 6.0,
            line_width: 2.0,
            line_color: Rgba::new(0, 255, 55, 1.0),
            grid_color: Rgba::new(255, 255, 255, 0.1),
            label_color: Rgba::new(255, 255, 255, 1.0),
            fill_top: Rgba::new(0, 87, 22, 0.51),
            fill_bottom: Rgba::new(95, 228, 101, 0.0),
        }
    }
}

/// How the previous period is obtained for change figures.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Draw a fresh previous period on every call.
    #[default]
    Regenerate,
    /// Draw each previous period once and reuse it.
    Cached,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub default_range: RangeSelector,
    pub comparison: ComparisonMode,
    pub generator: GeneratorConfig,
    pub chart: ChartConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let json = r#"{ "default_range": "lifetime", "generator": { "album_reward": { "min": 8.0, "max": 10.0 } } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_range, RangeSelector::Lifetime);
        assert_eq!(config.generator.album_reward, Band::new(8.0, 10.0));
        assert_eq!(config.generator.songs_per_week, 42.0);
        assert_eq!(config.comparison, ComparisonMode::Regenerate);
        assert_eq!(config.chart, ChartConfig::default());
    }

    #[test]
    fn test_band_around() {
        let band = Band::around(6.0, 0.25);
        assert_eq!(band, Band::new(4.5, 7.5));
    }
}
