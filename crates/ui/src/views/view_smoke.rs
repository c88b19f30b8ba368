use dioxus::prelude::ReadableExt;
use phish_core::QuizState;
use phish_core::model::{Level, Theme};

use super::test_harness::ViewHarness;
use crate::views::{QuizHandles, ViewError};

fn render(theme: Theme, setup: fn(&mut services::QuizController)) -> String {
    ViewHarness::new(theme, setup).render()
}

#[test]
fn home_view_lists_levels() {
    let html = render(Theme::Light, |_| {});
    assert!(html.contains("BawahTech PhishShield"), "missing app name in {html}");
    assert!(html.contains("Select Difficulty Level"), "missing title in {html}");
    assert!(html.contains("Level 1"), "missing level card in {html}");
    assert!(html.contains("2 questions"), "missing count in {html}");
    assert!(html.contains("No questions yet"), "missing empty level in {html}");
    assert!(html.contains("theme-light"), "missing theme class in {html}");
}

#[test]
fn dark_theme_sets_root_class() {
    let html = render(Theme::Dark, |_| {});
    assert!(html.contains("app-root theme-dark"), "missing dark class in {html}");
}

#[test]
fn question_view_renders_prompt_and_options() {
    let html = render(Theme::Light, |controller| {
        controller.select_level(Level::BASIC).expect("select");
    });
    assert!(html.contains("Question 1 / 2"), "missing position in {html}");
    assert!(html.contains("confirm your password"), "missing prompt in {html}");
    assert!(html.contains("Phishing"), "missing option in {html}");
    assert!(html.contains("Legitimate"), "missing option in {html}");
    assert!(html.contains("width: 0.0%"), "missing progress in {html}");
    assert!(!html.contains("Correct!"), "verdict shown too early in {html}");
}

#[test]
fn explanation_view_shows_verdict() {
    let html = render(Theme::Light, |controller| {
        controller.select_level(Level::BASIC).expect("select");
        controller.submit_answer("Legitimate").expect("submit");
    });
    assert!(html.contains("❌ Incorrect"), "missing verdict in {html}");
    assert!(
        html.contains("never ask for passwords"),
        "missing explanation in {html}"
    );
    assert!(html.contains("Next"), "missing next in {html}");
    assert!(html.contains("Home"), "missing home in {html}");
    assert!(html.contains("width: 50.0%"), "missing progress in {html}");
}

#[test]
fn complete_view_shows_score() {
    let html = render(Theme::Light, |controller| {
        controller.select_level(Level::BASIC).expect("select");
        for answer in ["Phishing", "Phishing"] {
            controller.submit_answer(answer).expect("submit");
            controller.advance().expect("advance");
        }
    });
    assert!(html.contains("Quiz Completed!"), "missing title in {html}");
    assert!(html.contains("Your Score: 1 / 2"), "missing score in {html}");
    assert!(html.contains("50%"), "missing percent in {html}");
    assert!(html.contains("Restart"), "missing restart in {html}");
}

#[test]
fn home_resets_the_quiz_but_keeps_the_theme() {
    let mut harness = ViewHarness::new(Theme::Light, |_| {});
    harness.act(QuizHandles::toggle_theme);
    harness.act(|quiz| quiz.select_level(Level::BASIC));
    harness.act(|quiz| quiz.choose("Phishing"));
    harness.act(QuizHandles::next);
    assert_eq!(
        harness.read(|quiz| quiz.controller.peek().state()),
        QuizState::Answering
    );

    harness.act(QuizHandles::home);
    assert_eq!(
        harness.read(|quiz| quiz.controller.peek().state()),
        QuizState::NoSession
    );
    assert_eq!(harness.read(|quiz| *quiz.theme.peek()), Theme::Dark);
    assert_eq!(harness.read(|quiz| *quiz.notice.peek()), None);

    let html = harness.render();
    assert!(html.contains("theme-dark"), "theme lost after home in {html}");
    assert!(html.contains("Select Difficulty Level"), "not on home in {html}");
}

#[test]
fn previous_on_first_question_is_silent() {
    let mut harness = ViewHarness::new(Theme::Light, |_| {});
    harness.act(|quiz| quiz.select_level(Level::BASIC));
    harness.act(QuizHandles::previous);

    assert_eq!(harness.read(|quiz| *quiz.notice.peek()), None);
    assert_eq!(
        harness.read(|quiz| quiz.controller.peek().snapshot().position),
        1
    );
    assert!(harness.render().contains("Question 1 / 2"));
}

#[test]
fn second_answer_shows_a_notice_and_keeps_the_score() {
    let mut harness = ViewHarness::new(Theme::Light, |_| {});
    harness.act(|quiz| quiz.select_level(Level::BASIC));
    harness.act(|quiz| quiz.choose("Phishing"));
    assert_eq!(harness.read(|quiz| *quiz.notice.peek()), None);

    harness.act(|quiz| quiz.choose("Legitimate"));
    assert_eq!(
        harness.read(|quiz| *quiz.notice.peek()),
        Some(ViewError::InvalidAction)
    );
    assert_eq!(harness.read(|quiz| quiz.controller.peek().snapshot().score), 1);
    let html = harness.render();
    assert!(
        html.contains("That action is not available right now."),
        "missing notice in {html}"
    );

    harness.act(QuizHandles::next);
    assert_eq!(harness.read(|quiz| *quiz.notice.peek()), None);
}

#[test]
fn empty_level_shows_a_notice_and_stays_home() {
    let mut harness = ViewHarness::new(Theme::Light, |_| {});
    harness.act(|quiz| quiz.select_level(Level::ADVANCED));

    assert_eq!(
        harness.read(|quiz| *quiz.notice.peek()),
        Some(ViewError::EmptyLevel(Level::ADVANCED))
    );
    assert_eq!(
        harness.read(|quiz| quiz.controller.peek().state()),
        QuizState::NoSession
    );
    let html = harness.render();
    assert!(html.contains("Level 3 has no questions yet."), "missing notice in {html}");
}
