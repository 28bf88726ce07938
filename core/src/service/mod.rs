pub mod app_service;
pub mod budget_service;
pub mod checklist_service;
pub mod dto;
pub mod events;
pub mod profile_service;
pub mod running_service;
