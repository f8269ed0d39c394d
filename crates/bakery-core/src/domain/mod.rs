//! Core domain layer for Bakery.
//!
//! This module contains pure decision logic with no I/O: everything here is
//! a function from normalized model metadata to derived configuration.
//! Filesystem access and template storage are handled via ports (traits)
//! defined in the application layer.
//!
//! - **No async**: decision logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable outputs**: derived structures are owned by the invocation
//!   that computed them and never shared across models or runs

pub mod artifact;
pub mod error;
pub mod model;
pub mod route;
pub mod rules;
pub mod template;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use artifact::{ArtifactKind, GenerationDecision};
pub use error::{DomainError, ErrorCategory};
pub use model::{FieldDescriptor, FieldTypeTag, Model, to_snake_case};
pub use route::RouteKey;
pub use rules::{AdminConfig, LinkKind, RuleOptions};
pub use template::{RenderContext, TemplateSource};

pub(crate) use validation::{validate_app_name, validate_model};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> Model {
        Model::new(
            "Entry",
            vec![
                FieldDescriptor::new("title", FieldTypeTag::Text),
                FieldDescriptor::new("body", FieldTypeTag::LongText),
                FieldDescriptor::new("published", FieldTypeTag::Boolean),
                FieldDescriptor::new("homepage", FieldTypeTag::Url),
                FieldDescriptor::new("author", FieldTypeTag::ForeignKey).with_related_count(12),
                FieldDescriptor::new("tags", FieldTypeTag::ManyToMany),
            ],
        )
    }

    // ========================================================================
    // Field-Rule Engine: list_display
    // ========================================================================

    #[test]
    fn list_display_excludes_many_to_many() {
        let config = AdminConfig::compute(&sample_model(), &RuleOptions::default());
        assert_eq!(
            config.list_display,
            vec!["title", "body", "published", "homepage", "author"]
        );
    }

    #[test]
    fn list_display_preserves_declaration_order_and_dedups_extras() {
        let options = RuleOptions {
            extra_list_display: vec!["title".into(), "word_count".into(), "body".into()],
            ..RuleOptions::default()
        };
        let config = AdminConfig::compute(&sample_model(), &options);

        // Declared fields first in order, then only the extras not already
        // present - no duplicates anywhere.
        assert_eq!(
            config.list_display,
            vec!["title", "body", "published", "homepage", "author", "word_count"]
        );
        let mut deduped = config.list_display.clone();
        deduped.dedup();
        assert_eq!(deduped, config.list_display);
    }

    #[test]
    fn explicit_list_display_is_verbatim() {
        let options = RuleOptions {
            explicit_list_display: Some(vec!["body".into(), "title".into()]),
            extra_list_display: vec!["ignored".into()],
            ..RuleOptions::default()
        };
        let config = AdminConfig::compute(&sample_model(), &options);
        assert_eq!(config.list_display, vec!["body", "title"]);
    }

    #[test]
    fn empty_model_yields_all_empty_config() {
        let model = Model::new("Hollow", vec![]);
        let config = AdminConfig::compute(&model, &RuleOptions::default());
        assert!(config.list_select_related.is_empty());
        assert!(config.list_display.is_empty());
        assert!(config.list_filter.is_empty());
        assert!(config.search_fields.is_empty());
        assert!(config.linked_fields.is_empty());
    }

    #[test]
    fn opaque_fields_only_appear_in_list_display() {
        let model = Model::new(
            "Blob",
            vec![FieldDescriptor::new("payload", FieldTypeTag::Opaque).with_choices()],
        );
        // Even enumerated choices are honored regardless of type tag - but an
        // opaque field without choices matches nothing except display.
        let plain = Model::new(
            "Blob",
            vec![FieldDescriptor::new("payload", FieldTypeTag::Opaque)],
        );
        let config = AdminConfig::compute(&plain, &RuleOptions::default());
        assert_eq!(config.list_display, vec!["payload"]);
        assert!(config.list_filter.is_empty());
        assert!(config.search_fields.is_empty());

        let with_choices = AdminConfig::compute(&model, &RuleOptions::default());
        assert_eq!(with_choices.list_filter, vec!["payload"]);
    }

    // ========================================================================
    // Field-Rule Engine: list_filter
    // ========================================================================

    #[test]
    fn enumerated_choices_always_filterable() {
        let model = Model::new(
            "Order",
            vec![
                FieldDescriptor::new("status", FieldTypeTag::Integer).with_choices(),
                FieldDescriptor::new("notes", FieldTypeTag::LongText),
            ],
        );
        let config = AdminConfig::compute(&model, &RuleOptions::default());
        assert_eq!(config.list_filter, vec!["status"]);
    }

    #[test]
    fn boolean_and_region_types_filterable_by_default() {
        let model = Model::new(
            "Venue",
            vec![
                FieldDescriptor::new("active", FieldTypeTag::Boolean),
                FieldDescriptor::new("verified", FieldTypeTag::NullableBoolean),
                FieldDescriptor::new("state", FieldTypeTag::RegionCode),
                FieldDescriptor::new("name", FieldTypeTag::Text),
            ],
        );
        let config = AdminConfig::compute(&model, &RuleOptions::default());
        assert_eq!(config.list_filter, vec!["active", "verified", "state"]);
    }

    #[test]
    fn foreign_key_filter_bounded_by_related_count() {
        let small = Model::new(
            "Loaf",
            vec![FieldDescriptor::new("baker", FieldTypeTag::ForeignKey).with_related_count(50)],
        );
        let large = Model::new(
            "Loaf",
            vec![FieldDescriptor::new("baker", FieldTypeTag::ForeignKey).with_related_count(150)],
        );
        let options = RuleOptions::default(); // max_related_objects = 100

        assert_eq!(
            AdminConfig::compute(&small, &options).list_filter,
            vec!["baker"]
        );
        assert!(AdminConfig::compute(&large, &options).list_filter.is_empty());
    }

    #[test]
    fn unknown_related_count_never_matches() {
        let model = Model::new(
            "Loaf",
            vec![FieldDescriptor::new("baker", FieldTypeTag::ForeignKey)],
        );
        let config = AdminConfig::compute(&model, &RuleOptions::default());
        assert!(config.list_filter.is_empty());
    }

    #[test]
    fn explicit_list_filter_suppresses_rules() {
        let options = RuleOptions {
            explicit_list_filter: Some(vec!["published".into()]),
            ..RuleOptions::default()
        };
        let config = AdminConfig::compute(&sample_model(), &options);
        assert_eq!(config.list_filter, vec!["published"]);
    }

    // ========================================================================
    // Field-Rule Engine: search_fields and select_related
    // ========================================================================

    #[test]
    fn search_fields_cover_text_types_in_order() {
        let config = AdminConfig::compute(&sample_model(), &RuleOptions::default());
        assert_eq!(config.search_fields, vec!["title", "body"]);
    }

    #[test]
    fn extra_search_fields_appended_with_dedup() {
        let options = RuleOptions {
            extra_search_fields: vec!["author__name".into(), "title".into()],
            ..RuleOptions::default()
        };
        let config = AdminConfig::compute(&sample_model(), &options);
        assert_eq!(config.search_fields, vec!["title", "body", "author__name"]);
    }

    #[test]
    fn select_related_includes_nullable_relations() {
        let model = Model::new(
            "Profile",
            vec![
                FieldDescriptor::new("user", FieldTypeTag::OneToOne),
                FieldDescriptor::new("mentor", FieldTypeTag::ForeignKey).nullable(),
                FieldDescriptor::new("groups", FieldTypeTag::ManyToMany),
            ],
        );
        let config = AdminConfig::compute(&model, &RuleOptions::default());
        assert_eq!(config.list_select_related, vec!["user", "mentor"]);
    }

    #[test]
    fn select_related_disabled_yields_empty() {
        let options = RuleOptions {
            include_all_select_related: false,
            ..RuleOptions::default()
        };
        let config = AdminConfig::compute(&sample_model(), &options);
        assert!(config.list_select_related.is_empty());
    }

    // ========================================================================
    // Field-Rule Engine: linked_fields
    // ========================================================================

    #[test]
    fn url_and_relation_fields_are_linked() {
        let config = AdminConfig::compute(&sample_model(), &RuleOptions::default());
        assert_eq!(config.linked_fields.get("homepage"), Some(&LinkKind::Url));
        assert_eq!(
            config.linked_fields.get("author"),
            Some(&LinkKind::ForeignKey)
        );
        assert_eq!(config.linked_fields.len(), 2);
    }

    #[test]
    fn link_flags_disable_linking() {
        let options = RuleOptions {
            link_url_fields: false,
            link_foreign_key_fields: false,
            ..RuleOptions::default()
        };
        let config = AdminConfig::compute(&sample_model(), &options);
        assert!(config.linked_fields.is_empty());
    }

    #[test]
    fn fields_outside_list_display_are_not_linked() {
        let options = RuleOptions {
            explicit_list_display: Some(vec!["title".into()]),
            ..RuleOptions::default()
        };
        let config = AdminConfig::compute(&sample_model(), &options);
        assert!(config.linked_fields.is_empty());
    }

    // ========================================================================
    // Slug/Key Selector
    // ========================================================================

    #[test]
    fn single_unique_slug_field_wins() {
        let model = Model::new(
            "Tart",
            vec![
                FieldDescriptor::new("name", FieldTypeTag::Slug).unique(),
                FieldDescriptor::new("price", FieldTypeTag::Decimal),
            ],
        );
        assert_eq!(RouteKey::select(&model), RouteKey::Slug("name".into()));
    }

    #[test]
    fn two_unique_slug_fields_fall_back_to_primary_key() {
        let model = Model::new(
            "Tart",
            vec![
                FieldDescriptor::new("name", FieldTypeTag::Slug).unique(),
                FieldDescriptor::new("code", FieldTypeTag::Slug).unique(),
            ],
        );
        assert_eq!(RouteKey::select(&model), RouteKey::PrimaryKey);
    }

    #[test]
    fn no_slug_field_falls_back_to_primary_key() {
        let model = Model::new(
            "Danish",
            vec![FieldDescriptor::new("name", FieldTypeTag::Text)],
        );
        assert_eq!(RouteKey::select(&model), RouteKey::PrimaryKey);
    }

    #[test]
    fn non_unique_slug_field_is_not_a_candidate() {
        let model = Model::new(
            "Danish",
            vec![FieldDescriptor::new("name", FieldTypeTag::Slug)],
        );
        assert_eq!(RouteKey::select(&model), RouteKey::PrimaryKey);
    }

    #[test]
    fn route_key_lookup_rendering() {
        let slug = RouteKey::Slug("name".into());
        assert_eq!(slug.lookup_field(), "name");
        assert_eq!(slug.url_pattern(), "slug:name");

        assert_eq!(RouteKey::PrimaryKey.lookup_field(), "pk");
        assert_eq!(RouteKey::PrimaryKey.url_pattern(), "int:pk");
    }

    // ========================================================================
    // Naming
    // ========================================================================

    #[test]
    fn model_name_casing() {
        let model = Model::new("PumpernickelBread", vec![]);
        assert_eq!(model.name_snake(), "pumpernickel_bread");
        assert_eq!(model.name_plural(), "PumpernickelBreads");
        assert_eq!(model.name_plural_snake(), "pumpernickel_breads");
    }

    #[test]
    fn explicit_plural_is_honored() {
        let mut model = Model::new("Pastry", vec![]);
        model.verbose_name_plural = Some("Pastries".into());
        assert_eq!(model.name_plural_snake(), "pastries");
    }

    #[test]
    fn snake_case_handles_acronyms() {
        assert_eq!(to_snake_case("HTTPLog"), "http_log");
        assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    // ========================================================================
    // Render context
    // ========================================================================

    #[test]
    fn model_context_renders_admin_variables() {
        let model = sample_model();
        let admin = AdminConfig::compute(&model, &RuleOptions::default());
        let route = RouteKey::select(&model);
        let ctx = RenderContext::for_model("journal", &model, &admin, &route);

        assert_eq!(ctx.get("APP_NAME"), Some("journal"));
        assert_eq!(ctx.get("MODEL_NAME"), Some("Entry"));
        assert_eq!(ctx.get("LOOKUP_FIELD"), Some("pk"));
        // Linked entries are swapped for their helper method names.
        assert_eq!(
            ctx.get("LIST_DISPLAY"),
            Some("['title', 'body', 'published', 'url_link_homepage', 'fk_link_author']")
        );
        assert_eq!(ctx.get("SEARCH_FIELDS"), Some("['title', 'body']"));
    }

    #[test]
    fn rendering_replaces_known_and_keeps_unknown_placeholders() {
        let model = Model::new("Tart", vec![]);
        let admin = AdminConfig::default();
        let ctx = RenderContext::for_model("pastries", &model, &admin, &RouteKey::PrimaryKey);

        let rendered = ctx.render("class {{MODEL_NAME}}: {{NOT_A_VAR}}");
        assert_eq!(rendered, "class Tart: {{NOT_A_VAR}}");
    }

    #[test]
    fn app_context_aggregates_only_generated_models() {
        let tart = Model::new("Tart", vec![]);
        let danish = Model::new("Danish", vec![]);
        let ctx = RenderContext::for_app("pastries", &[&tart, &danish]);

        assert_eq!(
            ctx.get("VIEWS_IMPORTS"),
            Some("from .tart_views import *\nfrom .danish_views import *")
        );
        let includes = ctx.get("URL_INCLUDES").unwrap();
        assert!(includes.contains("path(\"tarts/\", include(\"pastries.urls.tart_urls\"))"));
        assert!(includes.contains("path(\"danishs/\", include(\"pastries.urls.danish_urls\"))"));
    }

    // ========================================================================
    // Artifact kinds
    // ========================================================================

    #[test]
    fn per_model_paths_follow_naming_scheme() {
        assert_eq!(
            ArtifactKind::Views.relative_path("pastries", "tart"),
            std::path::PathBuf::from("views/tart_views.py")
        );
        assert_eq!(
            ArtifactKind::Admin.relative_path("pastries", "tart"),
            std::path::PathBuf::from("tart_admin.py")
        );
        assert_eq!(
            ArtifactKind::DetailTemplate.relative_path("pastries", "tart"),
            std::path::PathBuf::from("templates/pastries/tart_detail.html")
        );
        assert_eq!(
            ArtifactKind::ViewsInit.relative_path("pastries", "tart"),
            std::path::PathBuf::from("views/__init__.py")
        );
    }

    #[test]
    fn override_names_are_unique() {
        let mut names: Vec<&str> = ArtifactKind::PER_MODEL
            .iter()
            .chain(ArtifactKind::AGGREGATORS.iter())
            .map(|k| k.override_name())
            .collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn duplicate_field_names_rejected() {
        let model = Model::new(
            "Entry",
            vec![
                FieldDescriptor::new("title", FieldTypeTag::Text),
                FieldDescriptor::new("title", FieldTypeTag::LongText),
            ],
        );
        assert!(matches!(
            validate_model(&model),
            Err(DomainError::DuplicateFieldName { .. })
        ));
    }

    #[test]
    fn empty_app_name_rejected() {
        assert!(validate_app_name("").is_err());
        assert!(validate_app_name("pastries").is_ok());
        assert!(validate_app_name("my pastries").is_err());
    }
}
