//! Model-View-Intent (MVI) primitives for the screen view models.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Mapper ──→ View-state ──→ Renderer
//!    ↑                                                          │
//!    └──────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable selection or view-state snapshot
//! - **Intent**: user action or repository signal
//! - **Reducer**: pure function from (state, intent) to a new state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
