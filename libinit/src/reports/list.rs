//! List command report data structures.

use super::output::{Output, Report};

/// Templates of a set and the filters they may use.
#[derive(Debug)]
pub struct ListReport {
    /// Where the templates came from.
    pub source: String,
    pub templates: Vec<TemplateListing>,
    pub filters: Vec<FilterInfo>,
}

#[derive(Debug)]
pub struct TemplateListing {
    pub path: String,
    pub destination: String,
}

#[derive(Debug)]
pub struct FilterInfo {
    pub name: String,
    pub description: String,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Templates ({})", self.source));
        for template in &self.templates {
            if template.path == template.destination {
                out.list_item(&template.path);
            } else {
                out.list_item(&format!("{} -> {}", template.path, template.destination));
            }
        }

        out.newline();
        out.section("Filters");
        for filter in &self.filters {
            out.list_item(&format!("{:<12} {}", filter.name, filter.description));
        }
    }
}
