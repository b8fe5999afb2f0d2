#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod operators_tests;
