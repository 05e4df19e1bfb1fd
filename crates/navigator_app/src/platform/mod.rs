//! Browser side of the navigator: DOM and history ports, event wiring and
//! the exported entry points.
mod app;
pub mod dom;
mod effects;
pub mod events;
