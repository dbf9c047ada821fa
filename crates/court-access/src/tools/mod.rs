pub mod calculator;
pub mod navigator;
pub mod quiz;
pub mod sessions;
