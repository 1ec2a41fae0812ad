pub mod cohort;
pub mod rate;
