pub mod aliases;
pub mod config;
pub mod market_fetcher;
pub mod matcher;
pub mod odds_fetcher;
pub mod odds_math;
pub mod pipeline;
pub mod render;
pub mod shared_types;
