pub mod quest_1;
pub mod quest_3;
