//! Modal-editing motion engine for a Vim trainer.
//!
//! The engine is a mode-aware state machine over a flat `String` buffer:
//! cursor motions, word classification, mode transitions, single-character
//! edits and linear undo/redo. Rendering and input surfaces sit outside it
//! and talk to it through [`motion::MotionContext`] and [`registry::Registry`].

pub mod buffer;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod mode;
pub mod motion;
pub mod registry;
pub mod session;
pub mod ui;

pub use error::DrillError;
pub use history::{HistoryStack, Snapshot};
pub use mode::Mode;
pub use motion::{Category, EditorState, MotionContext, MotionId};
pub use registry::{Dispatch, Motion, Registry};
pub use session::Session;
