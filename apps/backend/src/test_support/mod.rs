//! Harness shared by unit and integration tests: state, app and a fake
//! interpretation backend.

pub mod app_builder;
pub mod interpreter;
pub mod state_builder;

pub use app_builder::create_test_app_builder;
pub use interpreter::StaticInterpreter;
pub use state_builder::{create_test_state, TestStateBuilder};
