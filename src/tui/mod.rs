//! Interactive terminal flow for selecting, creating, and deleting vaults.
//!
//! The module is built around two state machines: [`VaultFlow`], which owns
//! the screen-level modes, and [`DirectoryPicker`], a self-contained
//! sub-component embedded in the flow's directory-picking mode. Rendering and
//! the event loop live in their own files; the transition logic never touches
//! the terminal, which keeps it testable with synthesized key events.

mod flow;
pub mod input;
mod picker;
mod render;
mod runtime;
pub mod theme;

pub use flow::{FlowOutcome, FlowState, VaultEntry, VaultFlow};
pub use picker::{DirectoryPicker, PickerResult};
pub use runtime::run;
