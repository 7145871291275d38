use super::*;

use mailrow_ui_graphics::{Rect, Size};

fn actions() -> SwipeActions {
    SwipeActions::both(presets::archive(|| {}), presets::trash(|| {}))
}

#[test]
fn dead_zone_hides_action() {
    let indicator = SwipeIndicator::resolve(20.0, &SwipeConfig::default(), &actions());
    assert_eq!(indicator.edge, Some(SwipeEdge::Leading));
    assert_eq!(indicator.phase, RevealPhase::Hidden);
    assert!(!indicator.shows_action());
}

#[test]
fn reveal_progress_runs_between_thresholds() {
    let config = SwipeConfig::default();
    let at_reveal = SwipeIndicator::resolve(40.0, &config, &actions());
    assert_eq!(at_reveal.phase, RevealPhase::Revealing { progress: 0.0 });

    let halfway = SwipeIndicator::resolve(-60.0, &config, &actions());
    assert_eq!(halfway.phase, RevealPhase::Revealing { progress: 0.5 });
    assert_eq!(
        halfway.style.as_ref().map(|style| style.label.as_str()),
        Some("Trash")
    );
}

#[test]
fn commit_threshold_arms_indicator() {
    let indicator = SwipeIndicator::resolve(80.0, &SwipeConfig::default(), &actions());
    assert!(indicator.is_armed());
    assert_eq!(
        indicator.style.as_ref().map(|style| style.icon.as_str()),
        Some("archivebox")
    );
}

#[test]
fn missing_side_never_reveals() {
    let only_trailing = SwipeActions::none().with_trailing(presets::trash(|| {}));
    let indicator = SwipeIndicator::resolve(90.0, &SwipeConfig::default(), &only_trailing);
    assert_eq!(indicator.phase, RevealPhase::Hidden);
    assert!(indicator.style.is_none());
}

#[test]
fn background_is_anchored_to_swiped_edge() {
    let row = Size::new(320.0, 72.0);
    let config = SwipeConfig::default();

    let leading = SwipeIndicator::resolve(60.0, &config, &actions());
    assert_eq!(leading.background_rect(row), Rect { x: 0.0, y: 0.0, width: 60.0, height: 72.0 });
    assert_eq!(leading.content_rect(row).x, 60.0);

    let trailing = SwipeIndicator::resolve(-100.0, &config, &actions());
    assert_eq!(
        trailing.background_rect(row),
        Rect { x: 220.0, y: 0.0, width: 100.0, height: 72.0 }
    );

    let idle = SwipeIndicator::resolve(0.0, &config, &actions());
    assert_eq!(idle.edge, None);
    assert!(idle.background_rect(row).is_empty());
}

#[test]
fn controller_indicator_tracks_drag() {
    let clock = mailrow_testing::ManualClock::new();
    let runtime = clock.runtime();
    let controller = SwipeCommitController::new(
        actions(),
        mailrow_testing::RecordingHaptics::new(),
        runtime.handle(),
    );
    controller.on_drag_changed(DragSample::horizontal(-85.0));
    let indicator = controller.indicator();
    assert_eq!(indicator.offset, -85.0);
    assert!(indicator.is_armed());
}

#[test]
fn action_helpers() {
    assert_eq!(SwipeEdge::from_offset(3.0), Some(SwipeEdge::Leading));
    assert_eq!(SwipeEdge::from_offset(-3.0), Some(SwipeEdge::Trailing));
    assert_eq!(SwipeEdge::from_offset(0.0), None);
    assert!(SwipeActions::none().is_inert());
    assert!(actions().has(SwipeEdge::Trailing));
    assert_eq!(presets::mark_read(|| {}).label(), "Read");
    assert_eq!(presets::snooze(|| {}).icon(), "clock");
}
