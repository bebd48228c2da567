pub mod day_12;
pub mod day_21;
