#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_default_options() {
    let options = parse_run_options(&[]).unwrap();
    assert_eq!(options, RunOptions::default());
    assert!(options.runtime_config().repeat);
    assert_eq!(options.runtime_config().rand_seed, None);
}

#[test]
fn test_all_flags() {
    let options =
        parse_run_options(&["--once", "--seed=7", "--delay=0", "--sensor=closed"]).unwrap();
    assert_eq!(
        options,
        RunOptions {
            once: true,
            seed: Some(7),
            delay: Duration::ZERO,
            sensor_closed: true,
        }
    );
    let config = options.runtime_config();
    assert!(!config.repeat);
    assert_eq!(config.rand_seed, Some(7));
}

#[test]
fn test_invalid_flags() {
    assert_eq!(
        parse_run_options(&["--seed=x"]).unwrap_err(),
        "invalid seed 'x'"
    );
    assert_eq!(
        parse_run_options(&["--sensor=ajar"]).unwrap_err(),
        "invalid sensor state 'ajar', expected open or closed"
    );
    assert_eq!(
        parse_run_options(&["--fast"]).unwrap_err(),
        "unknown option '--fast'"
    );
}
