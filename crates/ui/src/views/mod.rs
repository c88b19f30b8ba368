mod complete;
mod home;
mod question;
mod root;
mod state;
mod theme_toggle;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use complete::CompleteView;
pub use home::HomeView;
pub use question::QuestionView;
pub use root::{QuizRoot, QuizScreen};
pub use state::{QuizHandles, ViewError};
pub use theme_toggle::ThemeToggle;
