pub mod catalog;
pub mod components;
pub mod grid;
pub mod model;
pub mod persistence;
pub mod reducer;

mod effect_executor;
mod runtime_context;

pub use components::{DesktopShell, LoadingScreen};
pub use model::*;
pub use persistence::{load_has_seen_tutorial, load_preferred_language, persist_preferred_language};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
