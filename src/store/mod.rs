//! Application state store.
//!
//! # Responsibilities
//! - Define the actions other subsystems may dispatch
//! - Own the UI-facing state and apply actions in arrival order
//!
//! # Design Decisions
//! - Subsystems get an explicit [`StoreHandle`], never a global store:
//!   what a component can mutate is visible in its constructor
//! - One store task consumes the action queue, so dispatch order is
//!   apply order without locks

pub mod actions;
pub mod state;

pub use actions::StoreAction;
pub use state::{AppState, Store, StoreHandle};
