pub mod arena;
pub mod outcome;

pub use arena::{fight, fight_record, FightReport};
pub use outcome::{apply_roll, Band, Outcome, LEVEL_CAP};
