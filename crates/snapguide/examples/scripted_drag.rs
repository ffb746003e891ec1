//! Scripted drag with live feedback events.
//!
//! Drives a 50x50 box through a 200x200 container along a canned pointer
//! path: approach the left edge, stick to it, hold through the release
//! window, break free, and pick up the center line before committing.
//! The tracker's structured log stream prints alongside the events.
//!
//! Run: `cargo run -p snapguide --example scripted_drag`

use snapguide::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let container = Rect::new(0.0, 0.0, 200.0, 200.0);
    let mut tracker = SnapTracker::new(Rect::new(10.0, 10.0, 50.0, 50.0), SnapConfig::default())
        .expect("finite frame and valid config");

    let script = [
        PointerEvent::began(Point::new(20.0, 20.0)),
        PointerEvent::changed(Point::new(14.0, 20.0)),
        PointerEvent::changed(Point::new(9.0, 20.0)),
        PointerEvent::changed(Point::new(6.0, 20.0)),
        PointerEvent::changed(Point::new(30.0, 20.0)),
        PointerEvent::changed(Point::new(85.0, 20.0)),
        PointerEvent::ended(Point::new(85.0, 20.0)),
    ];

    for sample in script {
        let batch = tracker
            .handle(sample, container)
            .expect("scripted stream is well formed");
        for event in &batch {
            announce(event);
        }
    }

    println!("final frame: {:?}", tracker.frame());
}

fn announce(event: &SnapEvent) {
    match event {
        SnapEvent::DragStarted { frame } => {
            println!("drag started at ({}, {})", frame.origin.x, frame.origin.y);
        }
        SnapEvent::BoxMoved { frame } => {
            println!("  box -> ({}, {})", frame.origin.x, frame.origin.y);
        }
        SnapEvent::GuideCaptured { axis, guide } => {
            println!(
                "  captured {:?} {:?} guide at {}",
                axis, guide.kind, guide.coordinate
            );
        }
        SnapEvent::GuideSwitched { axis, to, .. } => {
            println!(
                "  switched {:?} axis to the {:?} guide at {}",
                axis, to.kind, to.coordinate
            );
        }
        SnapEvent::GuideReleased { axis, guide } => {
            println!("  released {:?} {:?} guide", axis, guide.kind);
        }
        SnapEvent::DragEnded { frame } => {
            println!("drag ended at ({}, {})", frame.origin.x, frame.origin.y);
        }
        SnapEvent::DragCancelled { frame } => {
            println!(
                "drag cancelled, back to ({}, {})",
                frame.origin.x, frame.origin.y
            );
        }
        SnapEvent::Ignored { reason } => {
            println!("  ignored: {reason:?}");
        }
    }
}
