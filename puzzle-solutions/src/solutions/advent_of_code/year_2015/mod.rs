pub mod day_1;
pub mod day_14;
pub mod day_15;
pub mod day_17;
pub mod day_18;
pub mod day_2;
pub mod day_24;
pub mod day_3;
pub mod day_5;
pub mod day_6;
pub mod day_9;
