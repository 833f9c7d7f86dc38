//! End-to-end check-in flows through the orchestrator.
//!
//! Uses the JSON-file repository on a temp directory, a fixed clock and the
//! mock AI provider, so every step is observable on disk.

use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use tempfile::TempDir;

use daily_awareness::adapters::ai::{MockAIProvider, MockError};
use daily_awareness::adapters::clock::FixedClock;
use daily_awareness::adapters::random::SeededChoiceSource;
use daily_awareness::adapters::storage::FileCheckInRepository;
use daily_awareness::application::{
    AdviceGeneratorConfig, GenerateAdviceHandler, SessionOrchestrator,
};
use daily_awareness::domain::advice::{fallback_pool, Advice, AdviceSource};
use daily_awareness::domain::checkin::{InteractionPayload, SessionState};
use daily_awareness::domain::foundation::{CalendarDay, ErrorCode};
use daily_awareness::ports::CheckInRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    dir: TempDir,
    repo: Arc<FileCheckInRepository>,
    provider: MockAIProvider,
    clock: Arc<FixedClock>,
    orchestrator: SessionOrchestrator,
}

fn harness(provider: MockAIProvider) -> Harness {
    harness_with_timeout(provider, Duration::from_secs(5))
}

fn harness_with_timeout(provider: MockAIProvider, timeout: Duration) -> Harness {
    let dir = TempDir::new().unwrap();
    let repo = Arc::new(FileCheckInRepository::new(dir.path()));
    let clock = Arc::new(FixedClock::at("2024-07-15T19:30:00+08:00").unwrap());
    let choices = Arc::new(SeededChoiceSource::from_seed(42));
    let generator = Arc::new(GenerateAdviceHandler::new(
        Arc::new(provider.clone()),
        choices.clone(),
        AdviceGeneratorConfig {
            timeout,
            ..AdviceGeneratorConfig::default()
        },
    ));
    let orchestrator = SessionOrchestrator::new(repo.clone(), generator, clock.clone(), choices);

    Harness {
        dir,
        repo,
        provider,
        clock,
        orchestrator,
    }
}

fn items() -> Vec<String> {
    vec!["lantern".into(), "radio".into(), "pillow".into()]
}

fn battery(value: u8) -> InteractionPayload {
    InteractionPayload::Slider {
        id: "battery".into(),
        label: "内心电量".into(),
        value,
    }
}

fn july(day: u32) -> CalendarDay {
    CalendarDay::from_ymd(2024, 7, day).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn successful_day_persists_everything() {
    let h = harness(MockAIProvider::new().with_response(
        "当然，这是今天的建议：\n{\"physical\":\"轻轻转动手腕\",\"sensory\":\"听一首旧歌\",\"awareness\":\"允许自己慢下来\"}\n祝好。",
    ));

    let view = h.orchestrator.resolve().await.unwrap();
    assert_eq!(view.state, SessionState::Onboarding);

    let view = h.orchestrator.complete_onboarding(items()).await.unwrap();
    assert_eq!(view.state, SessionState::DailyInteraction);

    let view = h.orchestrator.complete_interaction(battery(80)).await.unwrap();
    assert_eq!(view.state, SessionState::Results);
    assert_eq!(
        view.advice,
        Some(Advice::new("轻轻转动手腕", "听一首旧歌", "允许自己慢下来"))
    );

    let calls = h.provider.get_calls();
    assert_eq!(calls.len(), 1);
    let prompt = &calls[0].prompt;
    assert!(prompt.contains("安全感/指引、怀旧/声音敏感、疲惫/渴望包围"));
    assert!(prompt.contains("用户当前状态：内心电量80%"));
    assert!(prompt.contains("evening"));
    assert!(calls[0].seed.is_some_and(|seed| seed < 1000));

    let cached = h.repo.load_advice(july(15)).await.unwrap().unwrap();
    assert_eq!(cached.source, AdviceSource::Model);
    assert_eq!(h.repo.last_check_in().await.unwrap(), Some(july(15)));

    let base = h.dir.path();
    assert!(base.join("user_preferences.json").exists());
    assert!(base.join("daily_records.json").exists());
    assert!(base.join("advice").join("2024-07-15.json").exists());
    let marker = std::fs::read_to_string(base.join("last_check_in")).unwrap();
    assert_eq!(marker.trim(), "2024-07-15");
}

#[tokio::test]
async fn network_failure_still_checks_in_with_fallback() {
    let h = harness(MockAIProvider::new().with_error(MockError::Network {
        message: "connection refused".into(),
    }));

    h.orchestrator.complete_onboarding(items()).await.unwrap();
    let view = h.orchestrator.complete_interaction(battery(80)).await.unwrap();

    assert_eq!(view.state, SessionState::Results);
    let advice = view.advice.unwrap();
    assert!(fallback_pool().contains(&advice));
    assert!(advice.is_complete());

    assert_eq!(h.repo.last_check_in().await.unwrap(), Some(july(15)));
    let cached = h.repo.load_advice(july(15)).await.unwrap().unwrap();
    assert_eq!(cached.source, AdviceSource::Fallback);
}

#[tokio::test]
async fn slow_provider_times_out_into_fallback() {
    let provider = MockAIProvider::new().with_delay(Duration::from_millis(500));
    let h = harness_with_timeout(provider, Duration::from_millis(50));

    h.orchestrator.complete_onboarding(items()).await.unwrap();
    let view = h.orchestrator.complete_interaction(battery(20)).await.unwrap();

    assert!(fallback_pool().contains(&view.advice.unwrap()));
}

#[tokio::test]
async fn reset_returns_to_daily_interaction() {
    let h = harness(MockAIProvider::new());

    h.orchestrator.complete_onboarding(items()).await.unwrap();
    h.orchestrator.complete_interaction(battery(80)).await.unwrap();

    let view = h.orchestrator.reset_day().await.unwrap();
    assert_eq!(view.state, SessionState::DailyInteraction);
    assert!(view.advice.is_none());

    assert!(h.repo.find_record(july(15)).await.unwrap().is_none());
    assert!(h.repo.last_check_in().await.unwrap().is_none());
    assert!(h.repo.load_advice(july(15)).await.unwrap().is_none());
    assert_eq!(
        h.repo.load_preferences().await.unwrap().unwrap().items(),
        items().as_slice()
    );

    let view = h.orchestrator.complete_interaction(battery(50)).await.unwrap();
    assert_eq!(view.state, SessionState::Results);
}

#[tokio::test]
async fn second_submission_same_day_is_rejected() {
    let h = harness(MockAIProvider::new());

    h.orchestrator.complete_onboarding(items()).await.unwrap();
    h.orchestrator.complete_interaction(battery(80)).await.unwrap();

    let err = h
        .orchestrator
        .complete_interaction(battery(10))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::AlreadyCheckedIn);
    assert_eq!(h.repo.list_records().await.unwrap().len(), 1);
    assert_eq!(h.provider.call_count(), 1);
}

#[tokio::test]
async fn new_day_starts_fresh_and_keeps_history() {
    let h = harness(MockAIProvider::new());

    h.orchestrator.complete_onboarding(items()).await.unwrap();
    h.orchestrator.complete_interaction(battery(80)).await.unwrap();

    h.clock
        .set(DateTime::parse_from_rfc3339("2024-07-16T08:00:00+08:00").unwrap());

    let view = h.orchestrator.resolve().await.unwrap();
    assert_eq!(view.state, SessionState::DailyInteraction);
    assert_eq!(view.today, july(16));
    assert_eq!(view.last_check_in, Some(july(15)));

    h.orchestrator
        .complete_interaction(InteractionPayload::Senses {
            sense: "smell".into(),
            choice: "earth".into(),
        })
        .await
        .unwrap();

    let records = h.repo.list_records().await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(h.provider.get_calls()[1].prompt.contains("morning"));
}

#[tokio::test]
async fn state_survives_reopening_the_data_directory() {
    let h = harness(MockAIProvider::new());

    h.orchestrator.complete_onboarding(items()).await.unwrap();
    let before = h.orchestrator.complete_interaction(battery(80)).await.unwrap();

    let reopened = Arc::new(FileCheckInRepository::new(h.dir.path()));
    let generator = Arc::new(GenerateAdviceHandler::new(
        Arc::new(MockAIProvider::new()),
        Arc::new(SeededChoiceSource::from_seed(1)),
        AdviceGeneratorConfig::default(),
    ));
    let orchestrator = SessionOrchestrator::new(
        reopened,
        generator,
        h.clock.clone(),
        Arc::new(SeededChoiceSource::from_seed(1)),
    );

    let after = orchestrator.resolve().await.unwrap();
    assert_eq!(after.state, SessionState::Results);
    assert_eq!(after.advice, before.advice);
}

#[tokio::test]
async fn clear_all_returns_to_onboarding() {
    let h = harness(MockAIProvider::new());

    h.orchestrator.complete_onboarding(items()).await.unwrap();
    h.orchestrator.complete_interaction(battery(80)).await.unwrap();

    let view = h.orchestrator.clear_all().await.unwrap();
    assert_eq!(view.state, SessionState::Onboarding);
    assert!(h.repo.load_preferences().await.unwrap().is_none());
    assert!(h.repo.list_records().await.unwrap().is_empty());
}
