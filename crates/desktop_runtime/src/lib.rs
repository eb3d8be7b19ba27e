//! Window manager, dock, and shell chrome for the portfolio desktop.
//!
//! State changes flow through [`reduce_desktop`]; [`DesktopProvider`] owns the reactive
//! container and [`DesktopShell`] renders it.

pub mod apps;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{
    launch_app, use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell,
};
pub use model::*;
pub use persistence::{load_settings, save_settings};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use window_manager::WindowManager;
