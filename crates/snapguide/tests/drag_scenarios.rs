//! End-to-end drag scenarios through the session and the tracker.
//!
//! Exercises the full decision pipeline: grab-offset bookkeeping, container
//! clamping, grid rounding, guide capture, hysteresis, release, and the
//! feedback event stream a host would hand to rendering and haptics.
//!
//! Run with: `cargo test -p snapguide --test drag_scenarios`

use snapguide::prelude::*;

// ── Helpers ───────────────────────────────────────────────────────────────

fn container_200() -> Rect {
    Rect::new(0.0, 0.0, 200.0, 200.0)
}

fn feed(tracker: &mut SnapTracker, event: PointerEvent) -> Vec<SnapEvent> {
    tracker
        .handle(event, container_200())
        .expect("pointer stream is well formed")
}

fn kind_of(guide: Option<Guide>) -> Option<GuideKind> {
    guide.map(|g| g.kind)
}

// ── Session-level walkthrough ─────────────────────────────────────────────

/// The canonical left-edge story, with container clamping off so the
/// unclamped positions are observable: approach, capture, hold through the
/// hysteresis window, release past it, then pick up the center line.
#[test]
fn left_edge_capture_hold_and_release() {
    let config = SnapConfig::default().with_constrain_to_container(false);
    let mut session = DragSession::new(config).unwrap();

    // Grab the box at its origin so pointer and proposed origin coincide.
    session
        .begin(Point::new(10.0, 10.0), Rect::new(10.0, 10.0, 50.0, 50.0))
        .unwrap();

    // Proposed x = -1: within tolerance of the min edge at 0, so the box
    // lands exactly on it.
    let state = session
        .update(Point::new(-1.0, 10.0), container_200())
        .unwrap();
    assert_eq!(state.position, Point::new(0.0, 10.0));
    assert_eq!(kind_of(state.held(Axis::Vertical)), Some(GuideKind::MinEdge));
    assert_eq!(state.held(Axis::Horizontal), None);

    // Proposed x = -4: past tolerance (3) but inside the release window
    // (4.5), so the hold survives.
    let state = session
        .update(Point::new(-4.0, 10.0), container_200())
        .unwrap();
    assert_eq!(state.position, Point::new(0.0, 10.0));
    assert_eq!(kind_of(state.held(Axis::Vertical)), Some(GuideKind::MinEdge));

    // Proposed x = -5: past the release window. Nothing else is in range,
    // so the position passes through untouched.
    let state = session
        .update(Point::new(-5.0, 10.0), container_200())
        .unwrap();
    assert_eq!(state.position, Point::new(-5.0, 10.0));
    assert_eq!(state.held(Axis::Vertical), None);

    // Proposed x = 75: the box center (100) lands on the container's
    // center line, so the center candidate anchors the box.
    let state = session
        .update(Point::new(75.0, 10.0), container_200())
        .unwrap();
    assert_eq!(state.position, Point::new(75.0, 10.0));
    assert_eq!(kind_of(state.held(Axis::Vertical)), Some(GuideKind::Center));

    let committed = session.end().unwrap();
    assert_eq!(committed.position, Point::new(75.0, 10.0));
    assert!(!session.is_dragging());
}

/// Both axes decide independently: x can hold the center line while y
/// holds the bottom edge, and either can release without the other.
#[test]
fn axes_capture_and_release_independently() {
    let mut session = DragSession::new(SnapConfig::default()).unwrap();
    session
        .begin(Point::new(10.0, 10.0), Rect::new(10.0, 10.0, 50.0, 50.0))
        .unwrap();

    // x: center candidate 99 is 1 from the center line at 100.
    // y: max-edge candidate 198 is 2 from the bottom edge at 200.
    let state = session
        .update(Point::new(74.0, 148.0), container_200())
        .unwrap();
    assert_eq!(state.position, Point::new(75.0, 150.0));
    assert_eq!(kind_of(state.held(Axis::Vertical)), Some(GuideKind::Center));
    assert_eq!(
        kind_of(state.held(Axis::Horizontal)),
        Some(GuideKind::MaxEdge)
    );

    // Pull straight up: y leaves its release window and runs free while x
    // stays held on the center line.
    let state = session
        .update(Point::new(74.0, 120.0), container_200())
        .unwrap();
    assert_eq!(state.position, Point::new(75.0, 120.0));
    assert_eq!(kind_of(state.held(Axis::Vertical)), Some(GuideKind::Center));
    assert_eq!(state.held(Axis::Horizontal), None);
}

/// A held guide follows the container: when the container's min edge moves
/// mid-drag, the hold survives (same kind) and re-anchors to the fresh
/// coordinate.
#[test]
fn held_guide_tracks_a_moving_container() {
    let mut session = DragSession::new(SnapConfig::default()).unwrap();
    session
        .begin(Point::new(10.0, 10.0), Rect::new(10.0, 10.0, 50.0, 50.0))
        .unwrap();

    let state = session
        .update(Point::new(-1.0, 10.0), container_200())
        .unwrap();
    assert_eq!(state.position.x, 0.0);
    assert_eq!(kind_of(state.held(Axis::Vertical)), Some(GuideKind::MinEdge));

    // The container's left edge is now at 4. Clamping pins the proposed
    // origin to it, and the held min-edge guide re-reads its coordinate.
    let shifted = Rect::new(4.0, 0.0, 196.0, 200.0);
    let state = session.update(Point::new(3.0, 10.0), shifted).unwrap();
    assert_eq!(state.position.x, 4.0);
    let held = state.held(Axis::Vertical).unwrap();
    assert_eq!(held.kind, GuideKind::MinEdge);
    assert_eq!(held.coordinate, 4.0);
}

// ── Tracker-level scenarios ───────────────────────────────────────────────

/// The feedback stream for a drag that captures the left edge, rides the
/// clamp, hands over to the center line, and commits.
#[test]
fn tracker_reports_the_full_feedback_sequence() {
    let mut tracker =
        SnapTracker::new(Rect::new(10.0, 10.0, 50.0, 50.0), SnapConfig::default()).unwrap();

    let events = feed(&mut tracker, PointerEvent::began(Point::new(20.0, 20.0)));
    assert_eq!(
        events,
        vec![SnapEvent::DragStarted {
            frame: Rect::new(10.0, 10.0, 50.0, 50.0)
        }]
    );

    // Proposed origin (-1, 10) clamps to the container, which puts the box
    // dead on the min edge: capture.
    let events = feed(&mut tracker, PointerEvent::changed(Point::new(9.0, 20.0)));
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[1],
        SnapEvent::GuideCaptured {
            axis: Axis::Vertical,
            guide: Guide {
                kind: GuideKind::MinEdge,
                ..
            }
        }
    ));
    assert_eq!(tracker.frame(), Rect::new(0.0, 10.0, 50.0, 50.0));

    // Pushing further left changes nothing: the clamp holds the box on the
    // edge and the hold is steady, so no transition fires.
    let events = feed(&mut tracker, PointerEvent::changed(Point::new(5.0, 20.0)));
    assert_eq!(
        events,
        vec![SnapEvent::BoxMoved {
            frame: Rect::new(0.0, 10.0, 50.0, 50.0)
        }]
    );

    // A long jump to the middle: the min edge is far outside its release
    // window and the center line is exact, so the axis switches in one step.
    let events = feed(&mut tracker, PointerEvent::changed(Point::new(85.0, 20.0)));
    assert_eq!(events.len(), 2);
    match events[1] {
        SnapEvent::GuideSwitched { axis, from, to } => {
            assert_eq!(axis, Axis::Vertical);
            assert_eq!(from.kind, GuideKind::MinEdge);
            assert_eq!(to.kind, GuideKind::Center);
        }
        other => panic!("expected GuideSwitched, got {other:?}"),
    }
    assert_eq!(tracker.frame(), Rect::new(75.0, 10.0, 50.0, 50.0));

    // Commit: the held guide is released, then the frame is final.
    let events = feed(&mut tracker, PointerEvent::ended(Point::new(85.0, 20.0)));
    assert_eq!(
        events,
        vec![
            SnapEvent::GuideReleased {
                axis: Axis::Vertical,
                guide: Guide::vertical(100.0, GuideKind::Center),
            },
            SnapEvent::DragEnded {
                frame: Rect::new(75.0, 10.0, 50.0, 50.0)
            },
        ]
    );
    assert!(!tracker.is_dragging());
}

/// Grid rounding composes with snapping: positions quantize to the step,
/// and a rounded position that lands on a guide captures it.
#[test]
fn grid_rounding_composes_with_capture() {
    let config = SnapConfig::default().with_grid_step(8.0);
    let mut tracker = SnapTracker::new(Rect::new(10.0, 10.0, 50.0, 50.0), config).unwrap();

    feed(&mut tracker, PointerEvent::began(Point::new(20.0, 20.0)));

    // Proposed (19, 33) rounds to the 8-step grid at (16, 32); no guide in
    // range there.
    let events = feed(&mut tracker, PointerEvent::changed(Point::new(29.0, 43.0)));
    assert_eq!(
        events,
        vec![SnapEvent::BoxMoved {
            frame: Rect::new(16.0, 32.0, 50.0, 50.0)
        }]
    );

    // Proposed (3, 33) rounds to (0, 32): the grid drops the box onto the
    // min edge and the guide captures.
    let events = feed(&mut tracker, PointerEvent::changed(Point::new(13.0, 43.0)));
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[1],
        SnapEvent::GuideCaptured {
            axis: Axis::Vertical,
            guide: Guide {
                kind: GuideKind::MinEdge,
                ..
            }
        }
    ));
    assert_eq!(tracker.frame(), Rect::new(0.0, 32.0, 50.0, 50.0));
}

/// After a commit, the next drag hit-tests against the committed frame,
/// not the original one.
#[test]
fn second_drag_starts_from_the_committed_frame() {
    let mut tracker =
        SnapTracker::new(Rect::new(10.0, 10.0, 50.0, 50.0), SnapConfig::default()).unwrap();

    feed(&mut tracker, PointerEvent::began(Point::new(20.0, 20.0)));
    feed(&mut tracker, PointerEvent::changed(Point::new(9.0, 20.0)));
    feed(&mut tracker, PointerEvent::ended(Point::new(9.0, 20.0)));
    assert_eq!(tracker.frame(), Rect::new(0.0, 10.0, 50.0, 50.0));

    // The original grab point (20, 20) is still inside the moved box, but
    // a point only valid for the original frame no longer is.
    let events = feed(&mut tracker, PointerEvent::began(Point::new(55.0, 20.0)));
    assert_eq!(
        events,
        vec![SnapEvent::Ignored {
            reason: snapguide::IgnoreReason::MissedBox
        }]
    );

    let events = feed(&mut tracker, PointerEvent::began(Point::new(20.0, 20.0)));
    assert_eq!(
        events,
        vec![SnapEvent::DragStarted {
            frame: Rect::new(0.0, 10.0, 50.0, 50.0)
        }]
    );
}

/// Cancelling mid-drag rolls the frame back and balances the feedback
/// stream with a release for the held guide.
#[test]
fn cancel_rolls_back_and_releases() {
    let initial = Rect::new(10.0, 10.0, 50.0, 50.0);
    let mut tracker = SnapTracker::new(initial, SnapConfig::default()).unwrap();

    feed(&mut tracker, PointerEvent::began(Point::new(20.0, 20.0)));
    feed(&mut tracker, PointerEvent::changed(Point::new(9.0, 20.0)));

    let events = feed(
        &mut tracker,
        PointerEvent::cancelled(Point::new(9.0, 20.0)),
    );
    assert_eq!(events.len(), 2);
    assert!(events[0].is_guide_transition());
    assert_eq!(events[1], SnapEvent::DragCancelled { frame: initial });
    assert_eq!(tracker.frame(), initial);
}
