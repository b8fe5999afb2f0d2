#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_event_ids_are_contiguous() {
    let ids = EventIds::new(100);
    let all: Vec<u32> = EventKind::ALL.into_iter().map(|k| ids.id(k)).collect();
    assert_eq!(all, vec![100, 101, 102, 103, 104, 105]);
    assert_eq!(ids.kind(104), Some(EventKind::ReadFront));
    assert_eq!(ids.kind(106), None);
    assert_eq!(ids.kind(99), None);
}

#[test]
fn test_builtin_event_kinds() {
    assert_eq!(EventKind::for_builtin(Builtin::Forward), Some(EventKind::Forward));
    assert_eq!(EventKind::for_builtin(Builtin::Print), Some(EventKind::Print));
    assert_eq!(EventKind::for_builtin(Builtin::Rand), None);
    for builtin in Builtin::ALL {
        if builtin.is_host_effect() {
            assert!(EventKind::for_builtin(builtin).is_some(), "{builtin:?}");
        }
    }
}

#[test]
fn test_direction_encoding() {
    assert_eq!(encode_direction(0, 0), 0);
    assert_eq!(encode_direction(1, 0), 0b0100);
    assert_eq!(encode_direction(-1, 0), 0b1100);
    assert_eq!(encode_direction(0, 5), 0b0001);
    assert_eq!(encode_direction(3, -2), 0b0111);
}

#[test]
fn test_direction_decoding() {
    for x in -1i8..=1 {
        for y in -1i8..=1 {
            let bits = encode_direction(i64::from(x), i64::from(y));
            assert_eq!(decode_direction(bits), (x, y));
        }
    }
}

#[test]
fn test_sensor_cell_shared() {
    let cell = SensorCell::new();
    let host_side = cell.clone();
    assert_eq!(cell.get(), None);
    host_side.set(true);
    assert_eq!(cell.get(), Some(true));
}

#[test]
fn test_channel_sink_delivers() {
    let (sink, receiver) = channel_sink();
    sink.post(HostEvent {
        kind: EventKind::Print,
        id: 0,
        payload: Payload::Text("hi\n".into()),
    });
    let event = receiver.try_recv().unwrap();
    assert_eq!(event.kind, EventKind::Print);
    assert!(matches!(event.payload, Payload::Text(ref s) if s == "hi\n"));
}

#[test]
fn test_channel_sink_survives_dropped_receiver() {
    let (sink, receiver) = channel_sink();
    drop(receiver);
    sink.post(HostEvent {
        kind: EventKind::Forward,
        id: 5,
        payload: Payload::Empty,
    });
}

#[test]
fn test_output_log_scrolls() {
    let mut log = OutputLog::new(3);
    for i in 0..5 {
        log.push(&format!("{i}\n"));
    }
    assert_eq!(log.lines().collect::<Vec<_>>(), vec!["2", "3", "4"]);
    assert_eq!(log.len(), 3);
}

#[test]
fn test_output_log_zero_depth() {
    let mut log = OutputLog::new(0);
    log.push("dropped\n");
    assert!(log.is_empty());
}
