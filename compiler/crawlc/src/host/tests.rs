#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::sync::Arc;

use crawl_eval::{channel_sink, encode_direction, Program, RuntimeConfig, SensorCell};
use pretty_assertions::assert_eq;

use super::*;

fn event(kind: EventKind, payload: Payload) -> HostEvent {
    HostEvent {
        kind,
        id: 0,
        payload,
    }
}

#[test]
fn test_actions_update_pose() {
    let mut host = ConsoleHost::new(Duration::ZERO, false);
    host.apply(&event(EventKind::Move, Payload::Direction(encode_direction(1, -1))));
    assert_eq!(host.position(), (1, -1));

    host.apply(&event(EventKind::RotateRight, Payload::Empty));
    host.apply(&event(EventKind::Forward, Payload::Empty));
    assert_eq!(host.heading(), Heading::East);
    assert_eq!(host.position(), (2, -1));

    host.apply(&event(EventKind::RotateLeft, Payload::Empty));
    host.apply(&event(EventKind::RotateLeft, Payload::Empty));
    assert_eq!(host.heading(), Heading::West);
}

#[test]
fn test_sensor_answer() {
    let mut host = ConsoleHost::new(Duration::ZERO, true);
    let cell = SensorCell::new();
    host.apply(&event(EventKind::ReadFront, Payload::Sensor(cell.clone())));
    assert_eq!(cell.get(), Some(true));
}

#[test]
fn test_print_goes_to_log() {
    let mut host = ConsoleHost::new(Duration::ZERO, false);
    let text = host.apply(&event(EventKind::Print, Payload::Text("hi\n".into())));
    assert_eq!(text.as_deref(), Some("hi\n"));
    assert_eq!(host.log().lines().collect::<Vec<_>>(), vec!["hi"]);
    assert_eq!(host.runtime_errors(), 0);

    host.apply(&event(
        EventKind::Print,
        Payload::Text("Runtime error: Recursion limit hit at line 2\n".into()),
    ));
    assert_eq!(host.runtime_errors(), 1);
}

#[test]
fn test_serve_drives_run_to_completion() {
    let (sink, events) = channel_sink();
    let mut program = Program::new(Arc::new(sink), RuntimeConfig::default().with_repeat(false));
    let source = [
        "forward()",
        "if read_front():",
        "    rotate_right()",
        "forward()",
        "print(1)",
    ];
    program.load_program(crawl_parse::parse(&source).unwrap());
    program.start().unwrap();

    let mut host = ConsoleHost::new(Duration::ZERO, true);
    host.serve(&events, &program.handle());
    program.stop();

    assert_eq!(host.position(), (1, -1));
    assert_eq!(host.heading(), Heading::East);
    assert_eq!(host.log().lines().collect::<Vec<_>>(), vec!["1"]);
}
