pub mod change;
pub mod config;
pub mod day_record;
pub mod range;
pub mod series;
pub mod top_item;
pub mod totals;
