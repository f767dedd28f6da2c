use viewkit_canvas::events::{CanvasEvent, Key, Modifiers, PointerButtons};
use viewkit_core::Point;

#[test]
fn test_event_round_trips_through_json() {
    let event = CanvasEvent::PointerMoved {
        position: Point::new(12.5, -3.0),
        buttons: PointerButtons {
            middle: true,
            ..Default::default()
        },
        modifiers: Modifiers { alt: true },
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: CanvasEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_descriptions_are_log_friendly() {
    assert_eq!(
        CanvasEvent::Resized {
            width: 800.0,
            height: 600.0
        }
        .description(),
        "resized to 800x600"
    );
    assert_eq!(CanvasEvent::PointerReleased.description(), "pointer released");
    assert!(CanvasEvent::KeyPressed { key: Key::Home }
        .description()
        .contains("Home"));
}
