mod controller;
mod plan;
mod view;

// Public API of the quiz subsystem.
pub use controller::QuizController;
pub use plan::{LevelPlan, LevelPlanner, select_level};
pub use view::QuizSnapshot;
