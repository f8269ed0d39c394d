//! Template sources and the rendering context.
//!
//! Rendering is deliberately primitive: a linear `{{VARIABLE}}` scan and
//! replace. The artifacts this tool bakes are small source files, and the
//! variable set per model is fixed and known up front - a real template
//! engine would buy nothing here. Unknown placeholders are left as-is so an
//! override template can carry literal `{{...}}` text the engine does not
//! know about.
//!
//! ## Built-in variables
//!
//! | Variable | Example |
//! |----------|---------|
//! | `APP_NAME` | `pastries` |
//! | `MODEL_NAME` | `PumpernickelBread` |
//! | `MODEL_NAME_SNAKE` | `pumpernickel_bread` |
//! | `MODEL_NAME_PLURAL` | `PumpernickelBreads` |
//! | `MODEL_NAME_PLURAL_SNAKE` | `pumpernickel_breads` |
//! | `LOOKUP_FIELD` | `slug` or `pk` |
//! | `LOOKUP_URL_PATTERN` | `slug:slug` or `int:pk` |
//! | `FIELDS` | `['name', 'price']` |
//! | `LIST_DISPLAY` | `['name', 'url_link_site']` |
//! | `LIST_FILTER` | `['is_filled']` |
//! | `SEARCH_FIELDS` | `['name']` |
//! | `LIST_SELECT_RELATED` | `['owner']` |
//! | `LINKED_FIELD_METHODS` | rendered link helper methods |
//!
//! Aggregator artifacts use app-level variables instead (`VIEWS_IMPORTS`,
//! `URL_INCLUDES`), derived from the models generated in the current run.

use std::collections::HashMap;

use super::{
    model::Model,
    route::RouteKey,
    rules::{AdminConfig, LinkKind},
};

/// Source of a template body: either compile-time or runtime.
///
/// `Static` references the built-in templates baked into the binary without
/// allocation; `Owned` holds override bodies loaded from disk.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// Variable map applied to a template body.
///
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Context for one model's per-model artifacts.
    ///
    /// All derivations happen once at construction; rendering afterwards is a
    /// plain scan over a fixed variable set.
    pub fn for_model(
        app_name: &str,
        model: &Model,
        admin: &AdminConfig,
        route: &RouteKey,
    ) -> Self {
        let mut vars = HashMap::new();

        vars.insert("APP_NAME".to_string(), app_name.to_string());
        vars.insert("MODEL_NAME".to_string(), model.name.clone());
        vars.insert("MODEL_NAME_SNAKE".to_string(), model.name_snake());
        vars.insert("MODEL_NAME_PLURAL".to_string(), model.name_plural());
        vars.insert(
            "MODEL_NAME_PLURAL_SNAKE".to_string(),
            model.name_plural_snake(),
        );
        vars.insert(
            "LOOKUP_FIELD".to_string(),
            route.lookup_field().to_string(),
        );
        vars.insert("LOOKUP_URL_PATTERN".to_string(), route.url_pattern());

        let field_names: Vec<String> = model.fields.iter().map(|f| f.name.clone()).collect();
        vars.insert("FIELDS".to_string(), py_list(&field_names));

        // list_display entries that received a link kind are swapped for the
        // name of the generated helper method.
        let display_entries: Vec<String> = admin
            .list_display
            .iter()
            .map(|name| match admin.linked_fields.get(name) {
                Some(LinkKind::Url) => format!("url_link_{name}"),
                Some(LinkKind::ForeignKey) => format!("fk_link_{name}"),
                None => name.clone(),
            })
            .collect();
        vars.insert("LIST_DISPLAY".to_string(), py_list(&display_entries));
        vars.insert("LIST_FILTER".to_string(), py_list(&admin.list_filter));
        vars.insert("SEARCH_FIELDS".to_string(), py_list(&admin.search_fields));
        vars.insert(
            "LIST_SELECT_RELATED".to_string(),
            py_list(&admin.list_select_related),
        );
        vars.insert(
            "LINKED_FIELD_METHODS".to_string(),
            linked_field_methods(admin),
        );

        Self { variables: vars }
    }

    /// Context for an app's aggregator artifacts.
    ///
    /// `generated` are the models baked in the current run, in processing
    /// order - an aggregator only ever references that set.
    pub fn for_app(app_name: &str, generated: &[&Model]) -> Self {
        let mut vars = HashMap::new();
        vars.insert("APP_NAME".to_string(), app_name.to_string());

        let views_imports: Vec<String> = generated
            .iter()
            .map(|m| format!("from .{}_views import *", m.name_snake()))
            .collect();
        vars.insert("VIEWS_IMPORTS".to_string(), views_imports.join("\n"));

        let url_includes: Vec<String> = generated
            .iter()
            .map(|m| {
                format!(
                    "    path(\"{plural}/\", include(\"{app}.urls.{snake}_urls\")),",
                    plural = m.name_plural_snake(),
                    app = app_name,
                    snake = m.name_snake(),
                )
            })
            .collect();
        vars.insert("URL_INCLUDES".to_string(), url_includes.join("\n"));

        Self { variables: vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template body by replacing `{{VARIABLE}}` placeholders.
    ///
    /// `{{UNKNOWN}}` remains as literal text; repeated placeholders are all
    /// replaced.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ── Rendering helpers ─────────────────────────────────────────────────────────

/// Render a name sequence as a Python list literal: `['name', 'price']`.
fn py_list(names: &[String]) -> String {
    if names.is_empty() {
        return "[]".to_string();
    }
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Render the admin helper methods for linked `list_display` entries.
///
/// One method per linked field, matching the names swapped into
/// `LIST_DISPLAY`. Returns an empty string when nothing is linked so the
/// placeholder collapses cleanly.
fn linked_field_methods(admin: &AdminConfig) -> String {
    let mut out = String::new();

    for (name, kind) in &admin.linked_fields {
        out.push('\n');
        match kind {
            LinkKind::Url => {
                out.push_str(&format!(
                    "    @admin.display(description='{name}', ordering='{name}')\n"
                ));
                out.push_str(&format!("    def url_link_{name}(self, obj):\n"));
                out.push_str(&format!("        target = getattr(obj, '{name}')\n"));
                out.push_str("        if not target:\n");
                out.push_str("            return ''\n");
                out.push_str(
                    "        return format_html('<a href=\"{}\">{}</a>', target, target)\n",
                );
            }
            LinkKind::ForeignKey => {
                out.push_str(&format!("    @admin.display(description='{name}')\n"));
                out.push_str(&format!("    def fk_link_{name}(self, obj):\n"));
                out.push_str(&format!("        target = getattr(obj, '{name}')\n"));
                out.push_str("        if target is None:\n");
                out.push_str("            return 'None'\n");
                out.push_str(
                    "        return format_html(\
                     '<a href=\"../../{}/{}/{}/\">{}</a>', \
                     target._meta.app_label, target._meta.model_name, target.pk, target)\n",
                );
            }
        }
    }

    out
}
