//! Component trait system for the TUI
//!
//! App does not know how to render, scroll or copy each panel. Components
//! declare those capabilities through traits and App routes to them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │  (orchestrator: owns the ChatSession, routes input)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌────────────┐  ┌──────────┐   ┌──────────┐
//!        │ Transcript │  │   Logs   │   │  Input   │
//!        │   Panel    │  │  Panel   │   │  Field   │
//!        └────────────┘  └──────────┘   └──────────┘
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Scrollable`] / [`Selectable`] - scrollable content with item selection
//! - [`Copyable`] - clipboard content
//! - [`Interactive`] - keyboard input

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::{CopyResult, Copyable};
pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::{Scrollable, Selectable};
