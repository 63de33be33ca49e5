// crates/engine_core/src/input/mod.rs
pub mod config;
pub mod map;
pub mod poller;

pub use config::InputDefaults;
pub use map::{Binding, EngineAction, InputMap};
pub use poller::{InputPoller, PolledInput};
