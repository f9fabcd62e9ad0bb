//! Check command report data structures.

use typesnip_codegen::generation::{Diagnostic, Severity};

use super::output::{Output, Report};

/// Report data from request validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Where the request was read from.
    pub request_path: String,
    /// The query's return type.
    pub return_type: String,
    /// Number of types in the graph.
    pub type_count: usize,
    /// Declarations the model snippet would contain, in order.
    pub declarations: Vec<String>,
    /// Declared services with their operation count.
    pub services: Vec<(String, usize)>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    fn located(diagnostic: &Diagnostic) -> String {
        match &diagnostic.location {
            Some(location) => format!("{}\n  --> {}", diagnostic.message, location),
            None => diagnostic.message.clone(),
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            let message = Self::located(diagnostic);
            match diagnostic.severity {
                Severity::Error => out.error(&message),
                Severity::Warning => out.warning(&message),
                Severity::Info => out.preformatted(&format!("info: {}", message)),
            }
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.request_path));
        out.newline();
        out.key_value_indented("returns", &self.return_type);
        out.key_value_indented("types", &self.type_count.to_string());

        if !self.declarations.is_empty() {
            out.newline();
            out.section(&format!(
                "{} declaration{}",
                self.declarations.len(),
                if self.declarations.len() == 1 { "" } else { "s" }
            ));
            for name in &self.declarations {
                out.list_item(name);
            }
        }

        if !self.services.is_empty() {
            out.newline();
            out.section("Services");
            for (name, operations) in &self.services {
                out.list_item(&format!(
                    "{} ({} operation{})",
                    name,
                    operations,
                    if *operations == 1 { "" } else { "s" }
                ));
            }
        }
    }
}
