//! Integration tests for the quiz flow.
//!
//! These tests walk a session from intro to results and verify:
//! 1. Navigation records one answer per question
//! 2. Completion produces a profile from the recorded answers
//! 3. Insight content loaded from a YAML file reaches the profile
//! 4. Pair mode finds shared values with prompts

use std::io::Write;

use tempfile::NamedTempFile;

use common_ground::application::{
    CompareValuesQuery, CompleteQuizCommand, QuizStatus, ValuesEngine,
};
use common_ground::config::AppConfig;
use common_ground::domain::foundation::{ErrorCode, Timestamp, ValueId};
use common_ground::domain::quiz::Answer;

/// Picks leaning on responsibility first and truth second.
const SELECTIONS: [usize; 10] = [2, 0, 1, 0, 0, 0, 0, 1, 2, 2];

const INSIGHTS: &str = r#"
bridging:
  "truth+responsibility": "Accountability starts with telling the truth."
value_context:
  responsibility: "Most people agree we owe something to each other."
discussion_prompts:
  - "Where did you learn to value [SHARED_VALUE]?"
  - "Who in your life lives out [SHARED_VALUE]?"
"#;

fn engine_with_insights() -> (ValuesEngine, NamedTempFile) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(INSIGHTS.as_bytes()).unwrap();

    let mut config = AppConfig::default();
    config.engine.profile_size = 3;
    config.content.insights_path = Some(file.path().to_path_buf());

    (ValuesEngine::from_config(&config).unwrap(), file)
}

fn walk_quiz(engine: &ValuesEngine) -> Vec<Answer> {
    let mut session = engine.new_session();
    assert_eq!(session.status(), QuizStatus::Intro);
    session.start().unwrap();

    for (question, option) in SELECTIONS.iter().enumerate() {
        assert_eq!(session.current_index(), question);
        session.select_option(*option).unwrap();

        // Change of mind on the fourth question: look back, then carry on
        if question == 3 {
            session.go_back().unwrap();
            assert_eq!(session.selection(), Some(SELECTIONS[2]));
            session.advance().unwrap();
            assert_eq!(session.selection(), None);
            session.select_option(*option).unwrap();
        }

        session.advance().unwrap();
    }

    assert_eq!(session.status(), QuizStatus::Complete);
    session.answers()
}

#[test]
fn session_records_one_answer_per_question() {
    let engine = ValuesEngine::default();
    let answers = walk_quiz(&engine);

    assert_eq!(answers.len(), 10);
    for (question, option) in SELECTIONS.iter().enumerate() {
        assert!(answers.contains(&Answer::new(question, *option)));
    }
}

#[test]
fn advancing_without_selection_is_rejected() {
    let engine = ValuesEngine::default();
    let mut session = engine.new_session();
    session.start().unwrap();

    let err = session.advance().unwrap_err();

    assert_eq!(err.code, ErrorCode::NoSelection);
    assert!(session.answers().is_empty());
}

#[test]
fn completed_quiz_uses_yaml_insights() {
    let (engine, _file) = engine_with_insights();
    let answers = walk_quiz(&engine);
    let now = Timestamp::from_unix_secs(1_750_000_000);

    let result = engine
        .complete_quiz_handler()
        .handle_at(CompleteQuizCommand::new(answers), now);

    let top: Vec<&str> = result
        .profile
        .top_values
        .iter()
        .map(|v| v.id().as_str())
        .collect();
    assert_eq!(top.len(), 3);
    assert_eq!(&top[..2], &["responsibility", "truth"]);
    assert_eq!(result.ranked[0].score, 7.0);
    assert_eq!(result.ranked[1].score, 6.0);

    assert_eq!(
        result.profile.bridging_statement.as_deref(),
        Some("Accountability starts with telling the truth.")
    );
    assert_eq!(
        result.profile.context,
        "Most people agree we owe something to each other."
    );
    assert_eq!(result.profile.created_at, now);
    assert!(result
        .profile
        .share_text()
        .contains("Accountability starts with telling the truth."));
}

#[test]
fn yaml_with_unknown_value_fails_to_load() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"value_context:\n  bravery: \"Not in the catalog.\"\n")
        .unwrap();

    let mut config = AppConfig::default();
    config.content.insights_path = Some(file.path().to_path_buf());

    let err = ValuesEngine::from_config(&config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ContentLoadFailed);
}

#[test]
fn pair_mode_rotates_prompts_across_shared_values() {
    let (engine, _file) = engine_with_insights();

    let result = engine.compare_values_handler().handle(CompareValuesQuery {
        first: vec![ValueId::from("truth"), ValueId::from("fairness")],
        second: vec![ValueId::from("fairness"), ValueId::from("truth")],
        prompt_selector: 1,
    });

    let prompts: Vec<Option<&str>> = result
        .shared
        .iter()
        .map(|s| s.discussion_prompt.as_deref())
        .collect();
    assert_eq!(
        prompts,
        vec![
            Some("Who in your life lives out Fairness?"),
            Some("Where did you learn to value Truth & Honesty?"),
        ]
    );
}
