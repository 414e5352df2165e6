pub mod create_match;
pub mod dashboard;
pub mod matches;
pub mod position_selection;
