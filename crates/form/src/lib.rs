//! Form controller for the game-customization page.
//!
//! Responsibilities:
//! - Own the working customization state and apply UI-originated events.
//! - Route button reassignments through the remap core so the binding
//!   table stays injective.
//! - Notify a `SaveSink` collaborator after every successful mutation.
//! - Expose pure view models for the rendering collaborators.
//!
//! Does NOT handle:
//! - Page markup, asset loading, or event capture (external collaborators).
//! - Persistence transport (behind the `SaveSink` trait; see the config
//!   crate for the file-backed implementation).
//!
//! Invariants:
//! - Exactly one save notification per successful mutation; failed events
//!   trigger none.
//! - View models are derived from stored values only and perform no I/O.

mod controller;
mod event;
pub mod preview;
mod save;

pub use controller::{CustomizeForm, FormError};
pub use event::FormEvent;
pub use save::SaveSink;
