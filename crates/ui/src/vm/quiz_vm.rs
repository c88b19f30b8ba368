use phish_core::model::{Level, QuizSummary};
use services::{LevelOverview, QuizSnapshot};

#[must_use]
pub fn level_subtitle(level: Level) -> &'static str {
    match level.value() {
        1 => "Basic phishing awareness for all employees",
        2 => "For regular users and office workers",
        _ => "Sophisticated attacks, security pros",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCardVm {
    pub level: Level,
    pub title: String,
    pub subtitle: String,
    pub count_label: String,
    pub available: bool,
}

#[must_use]
pub fn map_level_cards(overview: &[LevelOverview]) -> Vec<LevelCardVm> {
    overview
        .iter()
        .map(|item| {
            let count_label = match item.questions {
                0 => "No questions yet".to_string(),
                1 => "1 question".to_string(),
                n => format!("{n} questions"),
            };
            LevelCardVm {
                level: item.level,
                title: format!("Level {}", item.level),
                subtitle: level_subtitle(item.level).to_string(),
                count_label,
                available: item.questions > 0,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerdictVm {
    pub label: &'static str,
    pub class: &'static str,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionScreenVm {
    pub level_label: String,
    pub position_label: String,
    /// CSS width of the progress fill, e.g. `"33.3%"`.
    pub progress_width: String,
    pub prompt: String,
    pub options: Vec<String>,
    /// Present once an answer was submitted and the explanation is showing.
    pub verdict: Option<VerdictVm>,
    pub revisit_hint: Option<&'static str>,
    pub can_retreat: bool,
}

/// Returns `None` when the snapshot has no current question.
#[must_use]
pub fn map_question_screen(snapshot: &QuizSnapshot) -> Option<QuestionScreenVm> {
    let question = snapshot.question.as_ref()?;

    let verdict = snapshot.last_answer_correct.map(|correct| VerdictVm {
        label: if correct { "✅ Correct!" } else { "❌ Incorrect" },
        class: if correct {
            "verdict-correct"
        } else {
            "verdict-incorrect"
        },
        explanation: question.explanation().to_string(),
    });

    let revisit_hint = match (verdict.is_none(), snapshot.first_attempt) {
        (true, Some(_)) => Some("Already answered. Your first answer is the one that counts."),
        _ => None,
    };

    Some(QuestionScreenVm {
        level_label: format!("Level {}", question.level()),
        position_label: format!("Question {} / {}", snapshot.position, snapshot.total),
        progress_width: format!("{:.1}%", snapshot.progress_fraction() * 100.0),
        prompt: question.prompt().to_string(),
        options: question.options().to_vec(),
        verdict,
        revisit_hint,
        can_retreat: snapshot.can_retreat,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub score_label: String,
    pub percent_label: String,
    pub duration_label: Option<String>,
}

#[must_use]
pub fn map_completion(snapshot: &QuizSnapshot, summary: Option<&QuizSummary>) -> CompletionVm {
    let percent = snapshot.final_percent.unwrap_or(0);
    CompletionVm {
        score_label: format!("Your Score: {} / {}", snapshot.score, snapshot.total),
        percent_label: format!("{percent}%"),
        duration_label: summary
            .map(|s| format!("Finished in {}", format_elapsed(s.duration().num_seconds()))),
    }
}

#[must_use]
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    if minutes == 0 {
        format!("{seconds}s")
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}
