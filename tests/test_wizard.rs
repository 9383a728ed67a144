//! Tests for the questionnaire state machine
//!
//! These tests drive `WizardState` through its pure transitions and the
//! async `submit`, using stub evaluators from `common`. Terminal rendering is
//! not exercised here; see test_tui.rs for key handling.

mod common;

use common::{
    discovery, mixed_questions, sectioned_questions, FailingEvaluator, FlakyEvaluator,
    StubEvaluator,
};
use pathwise::engine::{
    AnswerValue, ChoiceSet, Question, QuestionKind, ValidationError, WizardError, WizardState,
};
use pathwise::flows::{know, ResultPayload};

type State = WizardState<ResultPayload>;

fn mixed_state() -> State {
    WizardState::initialize(mixed_questions()).unwrap()
}

fn at_last(state: &State) -> State {
    let mut state = state.clone();
    while !state.is_last_question() {
        state = state.go_next().unwrap();
    }
    state
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_initialize_starts_at_first_question() {
    let state = mixed_state();

    assert_eq!(state.current_index(), 0);
    assert_eq!(state.question_count(), 5);
    assert!(state.answers().is_empty(), "No answers before the user types");
    assert!(state.result().is_none());
    assert!(!state.is_submitting());
    assert_eq!(state.current_question().map(|q| q.id.as_str()), Some("name"));
}

#[test]
fn test_initialize_rejects_empty_list() {
    let err = State::initialize(Vec::new()).unwrap_err();
    assert!(
        matches!(err, WizardError::Configuration(_)),
        "Empty question list must be a configuration error, got {:?}",
        err
    );
}

#[test]
fn test_initialize_rejects_duplicate_ids() {
    let questions = vec![
        Question::new("a", "First", QuestionKind::Text),
        Question::new("a", "Again", QuestionKind::Text),
    ];
    assert!(matches!(
        State::initialize(questions),
        Err(WizardError::Configuration(_))
    ));
}

#[test]
fn test_initialize_rejects_choice_without_options() {
    let questions = vec![Question::new("pick", "Pick one", QuestionKind::Single)];
    assert!(matches!(
        State::initialize(questions),
        Err(WizardError::Configuration(_))
    ));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_index_stays_in_bounds_for_any_sequence() {
    let state = mixed_state();
    let count = state.question_count();

    // A fixed pseudo-random walk of next/back moves
    let moves = "NNBNNNNNNBBBBBBBNNNBNNNNNNNNBNBNBBBBBBBBBBNNNNNNNNNNNN";
    let mut current = state;
    for m in moves.chars() {
        current = match m {
            'N' => current.go_next().unwrap(),
            _ => current.go_back(),
        };
        assert!(
            current.current_index() <= count,
            "Index {} escaped [0, {}]",
            current.current_index(),
            count
        );
    }
    assert_eq!(current.current_index(), count, "Trailing nexts clamp at count");
}

#[test]
fn test_go_back_boundary_at_first() {
    let state = mixed_state().go_back();
    assert_eq!(state.current_index(), 0, "Back from the first question stays put");
}

#[test]
fn test_go_next_does_not_touch_answers() {
    let state = mixed_state().set_answer("name", "Ria").unwrap();
    let next = state.go_next().unwrap();

    assert_eq!(next.current_index(), 1);
    assert_eq!(next.answers(), state.answers());
}

#[test]
fn test_is_last_question() {
    let state = mixed_state();
    assert!(!state.is_last_question());

    let last = at_last(&state);
    assert_eq!(last.current_index(), 4);
    assert!(last.is_last_question());
}

#[test]
fn test_progress_for_plain_questions() {
    let state = mixed_state().go_next().unwrap();
    let progress = state.progress();

    assert_eq!(progress.step, 2);
    assert_eq!(progress.total, 5);
    assert!(progress.section.is_none());
}

#[test]
fn test_progress_reports_sections() {
    let state: State = WizardState::initialize(sectioned_questions()).unwrap();

    let first = state.progress().section.unwrap();
    assert_eq!((first.index, first.total), (1, 2));
    assert_eq!(first.title, "Energy check");
    assert_eq!(first.caption.as_deref(), Some("How do you recharge?"));

    let state = state.go_next().unwrap();
    assert_eq!(state.progress().section.unwrap().index, 1, "Same test");

    let state = state.go_next().unwrap();
    let last = state.progress().section.unwrap();
    assert_eq!((last.index, last.total), (2, 2));
    assert_eq!(last.title, "Work style");
}

// ============================================================================
// Answers
// ============================================================================

#[test]
fn test_chip_toggle_round_trip() {
    let state = mixed_state().add_chip("skills", "design").unwrap();
    let before = state.answers().clone();

    let toggled = state
        .set_answer("skills", "coding")
        .unwrap()
        .set_answer("skills", "coding")
        .unwrap();

    assert_eq!(
        toggled.answers(),
        &before,
        "Toggling the same chip twice restores the set"
    );
}

#[test]
fn test_multi_choice_toggle_round_trip() {
    let state = mixed_state()
        .set_answer("joy", "Code")
        .unwrap()
        .set_answer("joy", "Draw")
        .unwrap()
        .set_answer("joy", "Draw")
        .unwrap();

    let expected: ChoiceSet = ["Code"].into_iter().collect();
    assert_eq!(state.answers().choices("joy"), Some(&expected));
}

#[test]
fn test_single_choice_replaces() {
    let state = mixed_state()
        .set_answer("weekend", "Party")
        .unwrap()
        .set_answer("weekend", "Books")
        .unwrap();

    assert_eq!(
        state.answers().get("weekend"),
        Some(&AnswerValue::One("Books".to_string())),
        "Only the second value is stored"
    );
}

#[test]
fn test_add_chip_deduplicates() {
    let state = mixed_state()
        .add_chip("skills", "coding")
        .unwrap()
        .add_chip("skills", "coding")
        .unwrap();

    let chips = state.answers().choices("skills").unwrap();
    assert_eq!(chips.len(), 1, "Duplicate chip must collapse");
    assert!(chips.contains("coding"));
}

#[test]
fn test_add_chip_trims_and_ignores_blank() {
    let state = mixed_state()
        .add_chip("skills", "  writing  ")
        .unwrap()
        .add_chip("skills", "   ")
        .unwrap();

    let chips: Vec<&str> = state.answers().choices("skills").unwrap().iter().collect();
    assert_eq!(chips, vec!["writing"]);
}

#[test]
fn test_remove_chip() {
    let state = mixed_state()
        .add_chip("skills", "coding")
        .unwrap()
        .add_chip("skills", "design")
        .unwrap()
        .remove_chip("skills", "coding")
        .unwrap()
        .remove_chip("skills", "never-added")
        .unwrap();

    let chips: Vec<&str> = state.answers().choices("skills").unwrap().iter().collect();
    assert_eq!(chips, vec!["design"]);
}

#[test]
fn test_chip_intent_on_text_question_is_rejected() {
    let err = mixed_state().add_chip("name", "Ria").unwrap_err();
    assert!(matches!(
        err,
        WizardError::Validation(ValidationError::NotMultiValued(_))
    ));
}

#[test]
fn test_answer_for_unknown_question_is_rejected() {
    let err = mixed_state().set_answer("nope", "x").unwrap_err();
    assert!(matches!(
        err,
        WizardError::Validation(ValidationError::UnknownQuestion(_))
    ));
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_designer_example_reaches_terminal_state() {
    let evaluator = StubEvaluator::new(discovery(&["Designer"]));
    let mut state = mixed_state();
    for _ in 0..4 {
        state = state.go_next().unwrap();
    }
    assert_eq!(state.current_index(), 4);

    let done = state.submit(&evaluator).await.unwrap();

    assert_eq!(done.current_index(), 5);
    assert!(done.is_complete());
    assert!(!done.is_submitting());
    let matched = done.result().and_then(ResultPayload::as_discovery).unwrap();
    assert_eq!(matched.best_fit_careers, vec!["Designer".to_string()]);
    assert_eq!(evaluator.calls(), 1);
}

#[tokio::test]
async fn test_failed_then_successful_submit() {
    let state = at_last(&mixed_state());

    let failing = FailingEvaluator::new();
    let err = state.submit(&failing).await.unwrap_err();
    assert!(matches!(err, WizardError::Remote(_)));
    // The caller still holds the pre-submission state
    assert_eq!(state.current_index(), state.question_count() - 1);
    assert!(state.result().is_none());
    assert!(!state.is_submitting());

    let stub = StubEvaluator::new(discovery(&["Analyst"]));
    let done = state.submit(&stub).await.unwrap();
    assert!(done.is_complete());
}

#[tokio::test]
async fn test_flaky_evaluator_retry_succeeds() {
    let state = at_last(&mixed_state());
    let flaky = FlakyEvaluator::new(discovery(&["Writer"]));

    assert!(state.submit(&flaky).await.is_err());
    let done = state.submit(&flaky).await.unwrap();
    assert_eq!(done.current_index(), 5);
}

#[tokio::test]
async fn test_submit_away_from_last_question_is_rejected() {
    let evaluator = StubEvaluator::new(discovery(&[]));
    let err = mixed_state().submit(&evaluator).await.unwrap_err();

    assert!(matches!(
        err,
        WizardError::Validation(ValidationError::NotOnLastQuestion {
            current: 1,
            count: 5
        })
    ));
    assert_eq!(evaluator.calls(), 0, "Evaluator must not be called");
}

#[tokio::test]
async fn test_blank_number_is_omitted() {
    let evaluator = StubEvaluator::new(discovery(&[]));
    let state = at_last(&mixed_state().set_answer("age", "   ").unwrap());

    state.submit(&evaluator).await.unwrap();

    let sent = evaluator.last_submission().unwrap();
    assert!(sent.get("age").is_none(), "Blank number must not be sent");
    assert_eq!(sent.get("name"), Some(&serde_json::json!("")));
    assert!(sent.get("weekend").is_none(), "Unpicked single choice is omitted");
    assert_eq!(sent.get("skills"), Some(&serde_json::json!([])));
}

#[tokio::test]
async fn test_numbers_are_coerced() {
    let evaluator = StubEvaluator::new(discovery(&[]));
    let state = at_last(&mixed_state().set_answer("age", " 22 ").unwrap());

    state.submit(&evaluator).await.unwrap();

    let sent = evaluator.last_submission().unwrap();
    assert_eq!(sent.get("age"), Some(&serde_json::json!(22)));
}

#[tokio::test]
async fn test_non_numeric_answer_blocks_submit() {
    let evaluator = StubEvaluator::new(discovery(&[]));
    let state = at_last(&mixed_state().set_answer("age", "twenty").unwrap());

    let err = state.submit(&evaluator).await.unwrap_err();
    assert!(matches!(
        err,
        WizardError::Validation(ValidationError::NotANumber { .. })
    ));
    assert_eq!(evaluator.calls(), 0);
}

#[tokio::test]
async fn test_know_flow_submission_shape() {
    let evaluator = StubEvaluator::new(common::roadmap("Product Designer"));
    let state: State = WizardState::initialize(know::questions()).unwrap();
    let state = state
        .set_answer(know::CAREER, "Product Designer")
        .unwrap()
        .set_answer(know::AGE, "19")
        .unwrap()
        .add_chip(know::PASSIONS_OR_SKILLS, "design")
        .unwrap()
        .add_chip(know::PASSIONS_OR_SKILLS, "coding")
        .unwrap();

    at_last(&state).submit(&evaluator).await.unwrap();

    let sent = evaluator.last_submission().unwrap().into_value();
    assert_eq!(
        sent,
        serde_json::json!({
            "career": "Product Designer",
            "age": 19,
            "passions_or_skills": ["design", "coding"],
            "education_level": "",
            "lifestyle_or_salary": ""
        })
    );
}

#[test]
fn test_complete_then_back_clears_result() {
    let state = at_last(&mixed_state());
    let (submitting, _) = state.begin_submit().unwrap();
    assert!(submitting.is_submitting());

    let done = submitting.complete_submit(discovery(&["Designer"]));
    assert!(done.is_complete());

    let back = done.go_back();
    assert_eq!(back.current_index(), 4);
    assert!(back.result().is_none(), "Leaving the result screen drops it");
}

#[test]
fn test_reset_clears_everything() {
    let state = at_last(&mixed_state().set_answer("name", "Ria").unwrap());
    let reset = state.reset();

    assert_eq!(reset.current_index(), 0);
    assert!(reset.answers().is_empty());
    assert_eq!(reset.question_count(), 5);
}

// ============================================================================
// Strictness
// ============================================================================

#[test]
fn test_required_question_blocks_next() {
    let state: State = WizardState::initialize(know::questions()).unwrap();

    let err = state.go_next().unwrap_err();
    assert!(
        matches!(
            err,
            WizardError::Validation(ValidationError::Required { ref question, .. })
                if question == know::CAREER
        ),
        "Career is required, got {:?}",
        err
    );

    let filled = state.set_answer(know::CAREER, "  ").unwrap();
    assert!(filled.go_next().is_err(), "Whitespace is not an answer");

    let filled = state.set_answer(know::CAREER, "Designer").unwrap();
    assert_eq!(filled.go_next().unwrap().current_index(), 1);
}

#[test]
fn test_optional_questions_can_be_skipped() {
    let state: State = WizardState::initialize(know::questions()).unwrap();
    let state = state.set_answer(know::CAREER, "Designer").unwrap();

    assert!(at_last(&state).begin_submit().is_ok());
}

#[test]
fn test_strict_mode_requires_every_answer() {
    let strict: Vec<Question> = mixed_questions().into_iter().map(Question::required).collect();
    let state: State = WizardState::initialize(strict).unwrap();

    let err = state.go_next().unwrap_err();
    assert!(matches!(
        err,
        WizardError::Validation(ValidationError::Required { .. })
    ));

    let answered = state.set_answer("name", "Ria").unwrap();
    assert!(answered.go_next().is_ok());
}
