//! Kotlin target for typesnip.
//!
//! Records become `data class` declarations with one constructor property
//! per attribute, enums become `enum class` declarations carrying their
//! wire values, and streams are typed as coroutine `Flow`s.

mod generator;
mod naming;
mod structure_renderer;
mod type_mapper;

pub use generator::KotlinTarget;
pub use naming::KOTLIN_NAMING;
pub use structure_renderer::KotlinStructureRenderer;
pub use type_mapper::KotlinTypeMapper;
