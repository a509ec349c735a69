pub mod config;
pub mod records;
pub mod rules;
pub mod score;
