pub mod format;
pub mod model;
pub mod random;
pub mod repository;
pub mod service;
pub mod surface;
pub mod time;
pub mod usecase;

pub use model::change::{ChangeRecord, Kpi};
pub use model::config::{AppConfig, Band, ChartConfig, ComparisonMode, GeneratorConfig, Rgba};
pub use model::day_record::DayRecord;
pub use model::range::{RangeSelector, RANGE_PRESETS};
pub use model::series::Series;
pub use model::totals::Totals;
pub use random::{ConstantRandom, RandomSource, SeededRandom, ThreadRandom};
pub use repository::{ConfigRepository, FileConfigRepository};
pub use service::aggregator::{summarize, Aggregator, KpiChanges};
pub use service::chart_renderer::{ChartLayout, ChartRenderer};
pub use service::dto::{KpiCard, OverlaySnapshot};
pub use service::series_generator::SeriesGenerator;
pub use surface::Surface;
pub use usecase::overlay::OverlayController;
