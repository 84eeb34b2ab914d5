//! List operation - templates and filters.

use libinit_library::TemplateSet;
use libinit_template::FilterTable;

use super::describe_source;
use crate::reports::{FilterInfo, ListReport, TemplateListing};

pub fn list(templates: &TemplateSet, filters: &FilterTable) -> ListReport {
    ListReport {
        source: describe_source(templates.source()),
        templates: templates
            .entries()
            .iter()
            .map(|entry| TemplateListing {
                path: entry.path().to_string(),
                destination: entry.destination().source().to_string(),
            })
            .collect(),
        filters: filters
            .iter()
            .map(|f| FilterInfo {
                name: f.name.to_string(),
                description: f.description.to_string(),
            })
            .collect(),
    }
}
