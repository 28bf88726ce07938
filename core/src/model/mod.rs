pub mod app_state;
pub mod budget;
pub mod checklist;
pub mod nutrition;
pub mod profile;
pub mod running;
pub mod workout;
