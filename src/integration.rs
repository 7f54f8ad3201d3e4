//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - `Runtime`: message and command queues around `update`
//! - `AppRunner`: terminal event loop with render coalescing
//! - `Renderer`: draws `AppState` through the presentation components

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
