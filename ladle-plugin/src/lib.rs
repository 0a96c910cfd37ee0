//! Ladle Plugin System
//!
//! Host applications call the engine through named function plugins:
//! each plugin describes itself (`FunctionMeta`) and is invoked with
//! runtime `Value`s plus an `EvalContext` holding the user's preferences.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::EvalContext;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry, EvalContext,
    };
    pub use ladle_core::prelude::*;
}
