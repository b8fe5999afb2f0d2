#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::sync::Arc;
use std::thread;

use super::*;

#[test]
fn test_status_fails_when_not_running() {
    let control = Control::default();
    assert_eq!(control.status(0), Err(Cancelled));
}

#[test]
fn test_status_records_line() {
    let control = Control::default();
    control.begin_run();
    control.status(7).unwrap();
    assert_eq!(control.current_line(), 7);
}

#[test]
fn test_begin_run_clears_pause() {
    let control = Control::default();
    control.pause();
    control.begin_run();
    assert!(!control.is_paused());
    assert!(control.is_running());
}

#[test]
fn test_resume_releases_paused_status() {
    let control = Arc::new(Control::new(Duration::from_millis(5)));
    control.begin_run();
    control.pause();

    let worker = {
        let control = Arc::clone(&control);
        thread::spawn(move || control.status(3))
    };
    thread::sleep(Duration::from_millis(20));
    assert!(!worker.is_finished());

    control.resume();
    assert_eq!(worker.join().unwrap(), Ok(()));
    assert_eq!(control.current_line(), 3);
}

#[test]
fn test_stop_releases_paused_status() {
    let control = Arc::new(Control::new(Duration::from_secs(10)));
    control.begin_run();
    control.pause();

    let worker = {
        let control = Arc::clone(&control);
        thread::spawn(move || control.status(0))
    };
    thread::sleep(Duration::from_millis(20));
    control.request_stop();
    assert_eq!(worker.join().unwrap(), Err(Cancelled));
}

#[test]
fn test_wait_elapses_while_running() {
    let control = Control::default();
    control.begin_run();
    let start = Instant::now();
    control.wait(Duration::from_millis(10)).unwrap();
    assert!(start.elapsed() >= Duration::from_millis(10));
}

#[test]
fn test_wait_interrupted_by_stop() {
    let control = Arc::new(Control::default());
    control.begin_run();

    let worker = {
        let control = Arc::clone(&control);
        thread::spawn(move || control.wait(Duration::from_secs(60)))
    };
    thread::sleep(Duration::from_millis(20));
    control.request_stop();
    assert_eq!(worker.join().unwrap(), Err(Cancelled));
}
