use super::*;
use crate::kernel::decision::{Choice, Direction};
use crate::kernel::services::ports::PointerSource;
use chrono::{DateTime, TimeZone, Utc};

fn items() -> Vec<Item> {
    vec![
        Item::new(1, "A", "a", ""),
        Item::new(2, "B", "b", ""),
        Item::new(3, "C", "c", ""),
    ]
}

fn new_controller() -> SessionController {
    SessionController::restore(items(), DeckConfig::default(), None)
}

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

fn drag(controller: &mut SessionController, dx: f64) -> DispatchResult {
    controller.dispatch(Action::PointerDown {
        depth: 0,
        x: 200.0,
        y: 100.0,
        source: PointerSource::Mouse,
    });
    controller.dispatch(Action::PointerMove {
        x: 200.0 + dx,
        y: 110.0,
    });
    controller.dispatch(Action::PointerUp { at: at() })
}

fn finish(controller: &mut SessionController) -> DispatchResult {
    let token = controller.pending_unlock().expect("unlock pending");
    controller.dispatch(Action::ExitAnimationFinished { token })
}

#[test]
fn pointer_down_attaches_listeners_only_for_top_card() {
    let mut c = new_controller();
    let below = c.dispatch(Action::PointerDown {
        depth: 1,
        x: 0.0,
        y: 0.0,
        source: PointerSource::Touch,
    });
    assert!(!below.state_changed);
    assert!(below.effects.is_empty());

    let top = c.dispatch(Action::PointerDown {
        depth: 0,
        x: 0.0,
        y: 0.0,
        source: PointerSource::Touch,
    });
    assert!(top.state_changed);
    assert_eq!(top.effects, vec![Effect::AttachPointerListeners]);
}

#[test]
fn release_past_threshold_records_persists_and_locks() {
    let mut c = new_controller();
    let result = drag(&mut c, 150.0);

    assert_eq!(result.effects.len(), 3);
    assert_eq!(result.effects[0], Effect::DetachPointerListeners);
    assert!(matches!(&result.effects[1], Effect::PersistDecisions(json) if json.contains("\"Buy\"")));
    assert!(matches!(
        result.effects[2],
        Effect::ScheduleUnlock { after, .. } if after == c.config().exit_duration()
    ));

    assert!(c.state().locked());
    assert_eq!(c.state().decisions().len(), 1);
    assert_eq!(c.state().current_index(), 0);
}

#[test]
fn unlock_advances_to_next_item() {
    let mut c = new_controller();
    drag(&mut c, -150.0);
    let result = finish(&mut c);

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert!(!c.state().locked());
    assert_eq!(c.state().current_index(), 1);
    assert_eq!(c.current_item().map(|i| i.id), Some(2));
    assert_eq!(c.state().decisions().as_slice()[0].choice, Choice::Rent);
    assert_eq!(c.deck().top().map(|card| card.item_id()), Some(2));
}

#[test]
fn sub_threshold_release_snaps_back_without_decision() {
    let mut c = new_controller();
    let result = drag(&mut c, 80.0);

    assert_eq!(result.effects, vec![Effect::DetachPointerListeners]);
    assert!(c.state().decisions().is_empty());
    assert_eq!(c.state().current_index(), 0);
    assert!(!c.state().locked());
    assert_eq!(c.pending_unlock(), None);
}

#[test]
fn no_gesture_starts_while_locked() {
    let mut c = new_controller();
    drag(&mut c, 150.0);

    let second = drag(&mut c, 150.0);
    assert!(!second.state_changed);
    assert!(second.effects.is_empty());
    assert_eq!(c.state().decisions().len(), 1);
}

#[test]
fn stale_unlock_token_is_ignored() {
    let mut c = new_controller();
    drag(&mut c, 150.0);
    let token = c.pending_unlock().unwrap();

    let stale = c.dispatch(Action::ExitAnimationFinished { token: token + 1 });
    assert!(!stale.state_changed);
    assert!(c.state().locked());

    assert!(c.dispatch(Action::ExitAnimationFinished { token }).state_changed);
    assert!(!c.dispatch(Action::ExitAnimationFinished { token }).state_changed);
    assert_eq!(c.state().current_index(), 1);
}

#[test]
fn last_unlock_completes_session() {
    let mut c = new_controller();
    for dx in [150.0, -150.0, 150.0] {
        drag(&mut c, dx);
        let result = finish(&mut c);
        if c.phase() == SessionPhase::Complete {
            let Effect::SessionComplete(decisions) = &result.effects[0] else {
                panic!("expected completion, got {:?}", result.effects);
            };
            let choices: Vec<Choice> = decisions.iter().map(|d| d.choice).collect();
            assert_eq!(choices, vec![Choice::Buy, Choice::Rent, Choice::Buy]);
        }
    }

    assert_eq!(c.phase(), SessionPhase::Complete);
    assert!(c.deck().is_empty());
    let after = drag(&mut c, 150.0);
    assert!(!after.state_changed);
    assert_eq!(c.state().decisions().len(), 3);
}

#[test]
fn pointer_cancel_snaps_back() {
    let mut c = new_controller();
    c.dispatch(Action::PointerDown {
        depth: 0,
        x: 0.0,
        y: 0.0,
        source: PointerSource::Touch,
    });
    c.dispatch(Action::PointerMove { x: 300.0, y: 0.0 });
    let result = c.dispatch(Action::PointerCancel);

    assert_eq!(result.effects, vec![Effect::DetachPointerListeners]);
    assert!(c.state().decisions().is_empty());
    assert!(!c.dispatch(Action::PointerCancel).state_changed);
}

#[test]
fn reset_mid_animation_cancels_unlock_and_clears_state() {
    let mut c = new_controller();
    drag(&mut c, 150.0);
    let token = c.pending_unlock().unwrap();

    let result = c.dispatch(Action::Reset);
    assert_eq!(
        result.effects,
        vec![Effect::CancelUnlock { token }, Effect::ClearPersisted]
    );
    assert_eq!(c.state().current_index(), 0);
    assert!(c.state().decisions().is_empty());
    assert!(!c.state().locked());

    assert!(!c.dispatch(Action::ExitAnimationFinished { token }).state_changed);
    assert_eq!(c.state().current_index(), 0);
}

#[test]
fn reset_during_drag_detaches_listeners() {
    let mut c = new_controller();
    c.dispatch(Action::PointerDown {
        depth: 0,
        x: 0.0,
        y: 0.0,
        source: PointerSource::Mouse,
    });
    let result = c.dispatch(Action::Reset);
    assert_eq!(
        result.effects,
        vec![Effect::DetachPointerListeners, Effect::ClearPersisted]
    );
    assert!(!c.tracker().is_active());
}

#[test]
fn restore_resumes_after_saved_decisions() {
    let raw = r#"[{"objectName":"A","choice":"Buy","timestamp":"2024-01-01T12:00:00.000Z"}]"#;
    let c = SessionController::restore(items(), DeckConfig::default(), Some(raw));

    assert_eq!(c.phase(), SessionPhase::InProgress { index: 1 });
    assert_eq!(c.current_item().map(|i| i.label.as_str()), Some("B"));
    assert!(c.mount_effects().is_empty());
}

#[test]
fn restore_of_full_log_starts_complete() {
    let mut first = new_controller();
    for _ in 0..3 {
        drag(&mut first, 150.0);
        finish(&mut first);
    }
    let snapshot = first.state().decisions().to_snapshot();

    let c = SessionController::restore(items(), DeckConfig::default(), Some(&snapshot));
    assert_eq!(c.phase(), SessionPhase::Complete);
    assert!(matches!(
        c.mount_effects().as_slice(),
        [Effect::SessionComplete(decisions)] if decisions.len() == 3
    ));
}

#[test]
fn empty_item_list_is_complete_at_mount() {
    let c = SessionController::restore(Vec::new(), DeckConfig::default(), None);
    assert_eq!(c.phase(), SessionPhase::Complete);
    assert_eq!(
        c.progress(),
        Progress {
            position: 0,
            total: 0,
            fraction: 0.0,
        }
    );
}

#[test]
fn progress_reports_one_based_position() {
    let mut c = new_controller();
    assert_eq!(c.progress().position, 1);
    drag(&mut c, 150.0);
    finish(&mut c);
    let progress = c.progress();
    assert_eq!(progress.position, 2);
    assert_eq!(progress.total, 3);
    assert!((progress.fraction - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn release_direction_follows_sign_of_dx() {
    let mut c = new_controller();
    drag(&mut c, -121.0);
    let decision = c.state().decisions().last().cloned().unwrap();
    assert_eq!(decision.choice, Direction::Left.choice());
    assert_eq!(decision.item_id, 1);
}
