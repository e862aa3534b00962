//! Build configuration for the packwire web client bundle.
//!
//! [`Assembler`] turns a [`ProjectLayout`] and an [`InvocationSnapshot`]
//! (process arguments and environment, captured once) into a
//! [`BuildConfig`], which [`render`] writes out for the bundler.

pub mod assembler;
pub mod bundle;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod mode;
pub mod paths;
pub mod render;
pub mod snapshot;
pub mod validation;

// Re-export main types
pub use assembler::*;
pub use bundle::*;
pub use dev::*;
pub use error::*;
pub use layout::*;
pub use mode::*;
pub use snapshot::*;

pub use discovery::{LayoutLoader, LAYOUT_FILE};
pub use paths::resolve;
pub use validation::{
    check_disjoint, validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator,
};
