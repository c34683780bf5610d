pub mod calculator;
pub mod import;
pub mod log;
pub mod logic;
pub mod punch;
pub mod view;
