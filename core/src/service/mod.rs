pub mod aggregator;
pub mod chart_renderer;
pub mod dto;
pub mod series_generator;
