#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz;

pub use phish_core::Clock;

pub use app_services::{AppServices, LevelOverview};
pub use error::{AppServicesError, QuizError};
pub use quiz::{LevelPlan, LevelPlanner, QuizController, QuizSnapshot, select_level};
