//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for a target language
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`UnmappedTarget`] - Fallback for language ids with no target
//! - [`JsonTarget`], [`SheetsTarget`] - Query-only targets

mod json;
mod naming;
mod sheets;
mod traits;
mod unmapped;

pub use json::JsonTarget;
pub use naming::NamingConvention;
pub use sheets::SheetsTarget;
pub use traits::{LanguageCodegen, QuerySnippet};
pub use unmapped::{UnmappedStructureRenderer, UnmappedTarget, UnmappedTypeMapper};
