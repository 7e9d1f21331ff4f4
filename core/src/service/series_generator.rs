use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::model::config::{Band, GeneratorConfig};
use crate::model::day_record::DayRecord;
use crate::model::range::RangeSelector;
use crate::model::series::Series;
use crate::model::top_item::{ItemKind, TopEarning, CATALOG};
use crate::random::RandomSource;
use crate::time::window_start;

/// Synthesizes daily review activity in place of a real backend.
pub struct SeriesGenerator<R: RandomSource> {
    config: GeneratorConfig,
    rng: R,
}

impl<R: RandomSource> SeriesGenerator<R> {
    pub fn new(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn effective_days(&self, range: RangeSelector) -> u32 {
        self.config.effective_days(range)
    }

    /// Window of `clamp(range, min_days, max_days)` days ending on `reference_date`.
    pub fn generate(&mut self, range: RangeSelector, reference_date: NaiveDate) -> Series {
        let days = self.effective_days(range);
        self.generate_days(days, reference_date)
    }

    /// Same as `generate` but with an already-clamped length. A window that
    /// would start before the earliest date chrono can represent starts on
    /// that date instead.
    pub fn generate_days(&mut self, days: u32, reference_date: NaiveDate) -> Series {
        let start = window_start(reference_date, days).unwrap_or_else(|| {
            warn!(days, end = %reference_date, "window starts before the earliest date, shifting forward");
            NaiveDate::MIN
        });
        debug!(days, %start, end = %reference_date, "generating series");

        let records = (0..days)
            .map_while(|offset| {
                let date = start.checked_add_signed(Duration::days(i64::from(offset)))?;
                Some(self.day(date))
            })
            .collect();

        Series::from_days(records)
    }

    fn day(&mut self, date: NaiveDate) -> DayRecord {
        let cfg = &self.config;
        let song_band = Band::around(cfg.daily_songs(), cfg.count_spread);
        let album_band = Band::around(cfg.daily_albums(), cfg.count_spread);
        let song_rate = cfg.song_approval_rate;
        let album_rate = cfg.album_approval_rate;
        let song_jitter = cfg.song_approval_jitter;
        let album_jitter = cfg.album_approval_jitter;
        let song_reward = cfg.song_reward;
        let album_reward = cfg.album_reward;

        let songs = self.draw_count(song_band);
        let albums = self.draw_count(album_band);
        let approved_songs = self.draw_approved(songs, song_rate, song_jitter);
        let approved_albums = self.draw_approved(albums, album_rate, album_jitter);

        let mut reward = 0.0;
        for _ in 0..approved_songs {
            reward += self.draw(song_reward);
        }
        for _ in 0..approved_albums {
            reward += self.draw(album_reward);
        }

        DayRecord {
            date,
            songs,
            albums,
            approved_songs,
            approved_albums,
            reward: round_count(reward),
        }
    }

    fn draw(&mut self, band: Band) -> f64 {
        self.rng.uniform(band.min, band.max)
    }

    fn draw_count(&mut self, band: Band) -> u64 {
        round_count(self.draw(band))
    }

    // A jittered rate above 1.0 could otherwise approve more than was reviewed.
    fn draw_approved(&mut self, count: u64, rate: f64, jitter: Band) -> u64 {
        let approved = round_count(count as f64 * self.draw(jitter) * rate);
        approved.min(count)
    }

    /// Top earning catalog items with an amount drawn from their kind's reward band.
    pub fn top_earnings(&mut self) -> Vec<TopEarning> {
        let song_reward = self.config.song_reward;
        let album_reward = self.config.album_reward;
        CATALOG
            .iter()
            .map(|item| {
                let band = match item.kind {
                    ItemKind::Song => song_reward,
                    ItemKind::Album => album_reward,
                };
                TopEarning {
                    title: item.title.to_string(),
                    artist: item.artist.to_string(),
                    kind: item.kind,
                    amount: self.draw_count(band),
                }
            })
            .collect()
    }
}

fn round_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ConstantRandom, SeededRandom, ThreadRandom};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_length_is_clamped() {
        let mut generator = SeriesGenerator::new(GeneratorConfig::default(), SeededRandom::new(1));
        let today = date(2024, 6, 15);
        for (range, expected) in [
            (RangeSelector::Days(1), 7),
            (RangeSelector::Days(7), 7),
            (RangeSelector::Days(30), 30),
            (RangeSelector::Days(365), 365),
            (RangeSelector::Days(5000), 365),
            (RangeSelector::Lifetime, 365),
        ] {
            assert_eq!(generator.generate(range, today).len(), expected, "range {:?}", range);
        }
    }

    #[test]
    fn test_window_is_contiguous_and_ends_on_reference() {
        let mut generator = SeriesGenerator::new(GeneratorConfig::default(), SeededRandom::new(2));
        let today = date(2024, 3, 3);
        let series = generator.generate(RangeSelector::Days(30), today);

        assert_eq!(series.end(), Some(today));
        assert_eq!(series.start(), Some(date(2024, 2, 3)));
        for pair in series.days().windows(2) {
            assert_eq!(pair[0].date + Duration::days(1), pair[1].date);
        }
    }

    #[test]
    fn test_window_near_earliest_date_does_not_panic() {
        let mut generator = SeriesGenerator::new(GeneratorConfig::default(), SeededRandom::new(6));
        let reference = NaiveDate::MIN + Duration::days(3);
        let series = generator.generate(RangeSelector::Days(7), reference);

        assert_eq!(series.len(), 7);
        assert_eq!(series.start(), Some(NaiveDate::MIN));
    }

    #[test]
    fn test_records_stay_within_bands() {
        let config = GeneratorConfig::default();
        let mut generator = SeriesGenerator::new(config.clone(), SeededRandom::new(3));
        let series = generator.generate(RangeSelector::Lifetime, date(2024, 1, 1));

        for day in &series {
            // 6/day +-25% -> 4.5..7.5, 12/7 +-25% -> 1.29..2.14
            assert!((4..=8).contains(&day.songs), "songs {}", day.songs);
            assert!((1..=2).contains(&day.albums), "albums {}", day.albums);
            assert!(day.approved_songs <= day.songs);
            assert!(day.approved_albums <= day.albums);

            let min = day.approved_songs as f64 * config.song_reward.min
                + day.approved_albums as f64 * config.album_reward.min;
            let max = day.approved_songs as f64 * config.song_reward.max
                + day.approved_albums as f64 * config.album_reward.max;
            assert!(day.reward as f64 >= min.round() && day.reward as f64 <= max.round());
        }
    }

    #[test]
    fn test_approved_is_clamped_when_rate_exceeds_one() {
        let config = GeneratorConfig {
            song_approval_rate: 1.0,
            song_approval_jitter: Band::new(1.5, 1.5),
            album_approval_rate: 2.0,
            ..GeneratorConfig::default()
        };
        let mut generator = SeriesGenerator::new(config, ConstantRandom(0.99));
        let series = generator.generate(RangeSelector::Days(7), date(2024, 1, 1));
        for day in &series {
            assert_eq!(day.approved_songs, day.songs);
            assert_eq!(day.approved_albums, day.albums);
        }
    }

    #[test]
    fn test_constant_source_pins_values() {
        // 0.0 picks the bottom of every band: 4.5 songs -> 5, 1.29 albums -> 1,
        // approvals 5*0.95*0.88 = 4.18 -> 4 and 1*0.9*0.65 = 0.59 -> 1.
        let mut generator = SeriesGenerator::new(GeneratorConfig::default(), ConstantRandom(0.0));
        let series = generator.generate(RangeSelector::Days(7), date(2024, 1, 1));
        let first = &series.days()[0];
        assert_eq!(first.songs, 5);
        assert_eq!(first.albums, 1);
        assert_eq!(first.approved_songs, 4);
        assert_eq!(first.approved_albums, 1);
        assert_eq!(first.reward, 12);
    }

    #[test]
    fn test_zero_rates_produce_empty_days() {
        let config = GeneratorConfig {
            songs_per_week: 0.0,
            albums_per_week: 0.0,
            ..GeneratorConfig::default()
        };
        let mut generator = SeriesGenerator::new(config, SeededRandom::new(4));
        let series = generator.generate(RangeSelector::Days(14), date(2024, 1, 1));
        assert!(series.days().iter().all(|d| d.total_reviews() == 0 && d.reward == 0));
    }

    #[test]
    fn test_repeated_calls_differ() {
        let mut generator = SeriesGenerator::new(GeneratorConfig::default(), ThreadRandom::new());
        let today = date(2024, 1, 1);
        let a = generator.generate(RangeSelector::Days(7), today);
        let b = generator.generate(RangeSelector::Days(7), today);

        assert_eq!(a.len(), 7);
        assert_eq!(b.len(), 7);
        // Seven days of continuous reward draws colliding exactly is not a realistic outcome.
        assert_ne!(a, b);
    }

    #[test]
    fn test_top_earnings_follow_kind_bands() {
        let mut generator = SeriesGenerator::new(GeneratorConfig::default(), SeededRandom::new(5));
        let items = generator.top_earnings();
        assert_eq!(items.len(), CATALOG.len());
        for item in items {
            match item.kind {
                ItemKind::Song => assert!((1..=5).contains(&item.amount)),
                ItemKind::Album => assert!((8..=15).contains(&item.amount)),
            }
        }
    }
}
