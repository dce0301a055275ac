//! Year-over-year price history: deltas, growth rate, headline summary and the flat export

pub mod cagr;
pub mod deltas;
pub mod export;
pub mod summary;
