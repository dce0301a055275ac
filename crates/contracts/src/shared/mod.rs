pub mod analytics;
pub mod series;
pub mod timestamp;
