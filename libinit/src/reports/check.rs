//! Check command report data structures.

use libinit_library::TemplateInfo;

use super::output::{Output, Report};

/// Report data from template set validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Where the templates came from.
    pub source: String,
    /// Every template with the variables and filters it uses.
    pub templates: Vec<TemplateInfo>,
}

impl CheckReport {
    /// Every variable any template needs, sorted and deduplicated.
    pub fn variables(&self) -> Vec<&str> {
        let mut vars: Vec<&str> = self
            .templates
            .iter()
            .flat_map(|t| t.variables.iter().map(String::as_str))
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} templates are valid", self.source));
        out.newline();

        for template in &self.templates {
            out.section(&format!("{} -> {}", template.path, template.destination));
            if template.variables.is_empty() {
                out.list_item("(no variables)");
            } else {
                out.list_item(&template.variables.join(", "));
            }
            if !template.filters.is_empty() {
                out.list_item(&format!("filters: {}", template.filters.join(", ")));
            }
        }

        out.newline();
        out.key_value("Variables", &self.variables().join(", "));
    }
}
