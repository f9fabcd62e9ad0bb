//! Languages operation - registered targets.

use typesnip_codegen::generation::mapped_primitives;

use crate::{
    language::targets,
    reports::{LanguageInfo, LanguagesReport},
};

pub fn languages() -> LanguagesReport {
    LanguagesReport {
        languages: targets()
            .iter()
            .map(|target| LanguageInfo {
                id: target.language().to_string(),
                extension: target.file_extension().to_string(),
                query_only: !target.renders_model(),
                mapped: mapped_primitives(target.as_ref()),
            })
            .collect(),
    }
}
