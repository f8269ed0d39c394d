//! End-to-end bake runs through the real adapters.

use std::path::{Path, PathBuf};

use bakery_adapters::{
    BuiltinTemplates, DirOverrides, LocalFilesystem, Manifest, MemoryFilesystem, NoOverrides,
};
use bakery_core::prelude::*;

fn pastries_manifest() -> Manifest {
    Manifest::parse(
        r#"
[[apps]]
name = "pastries"

[[apps.models]]
name = "Tart"

[[apps.models.fields]]
name = "name"
type = "SlugField"
unique = true

[[apps.models.fields]]
name = "price"
type = "DecimalField"

[[apps.models]]
name = "Danish"

[[apps.models.fields]]
name = "name"
type = "CharField"

[[apps.models.fields]]
name = "is_filled"
type = "BooleanField"
"#,
    )
    .unwrap()
}

fn memory_service(fs: &MemoryFilesystem) -> BakeService {
    BakeService::new(
        Box::new(fs.clone()),
        Box::new(NoOverrides),
        Box::new(BuiltinTemplates::new()),
    )
}

#[test]
fn pastries_end_to_end() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs);

    let manifest = pastries_manifest();
    let specs = vec![manifest.app("pastries").unwrap().to_app_spec(
        Path::new("."),
        Some(&["Tart".to_string(), "Danish".to_string()]),
    )];

    let report = service.bake(&specs, false).unwrap();
    assert!(!report.has_failures());
    assert_eq!(report.total_generated(), 22);

    // Tart has exactly one unique slug field: routes use it.
    let tart_urls = fs
        .read_file(Path::new("./pastries/urls/tart_urls.py"))
        .unwrap();
    assert!(tart_urls.contains("<slug:name>"));
    assert!(tart_urls.contains("name=\"tart_detail\""));

    // Danish has no unique field: routes fall back to the primary key.
    let danish_urls = fs
        .read_file(Path::new("./pastries/urls/danish_urls.py"))
        .unwrap();
    assert!(danish_urls.contains("<int:pk>"));

    // Boolean field lands in list_filter; Tart has nothing filterable.
    let danish_admin = fs
        .read_file(Path::new("./pastries/danish_admin.py"))
        .unwrap();
    assert!(danish_admin.contains("list_filter = ['is_filled']"));
    let tart_admin = fs.read_file(Path::new("./pastries/tart_admin.py")).unwrap();
    assert!(tart_admin.contains("list_filter = []"));
    assert!(tart_admin.contains("list_display = ['name', 'price']"));

    // Aggregators cover both baked models.
    let views_init = fs
        .read_file(Path::new("./pastries/views/__init__.py"))
        .unwrap();
    assert!(views_init.contains("from .tart_views import *"));
    assert!(views_init.contains("from .danish_views import *"));

    let urls_init = fs
        .read_file(Path::new("./pastries/urls/__init__.py"))
        .unwrap();
    assert!(urls_init.contains("include(\"pastries.urls.tart_urls\")"));

    // No placeholder survives rendering in any baked file.
    for path in fs.list_files() {
        let content = fs.read_file(&path).unwrap();
        for var in [
            "{{APP_NAME}}",
            "{{MODEL_NAME}}",
            "{{MODEL_NAME_SNAKE}}",
            "{{LOOKUP_FIELD}}",
            "{{VIEWS_IMPORTS}}",
            "{{URL_INCLUDES}}",
        ] {
            assert!(
                !content.contains(var),
                "{} leaked into {}",
                var,
                path.display()
            );
        }
    }
}

#[test]
fn rerun_on_disk_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let service = BakeService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(NoOverrides),
        Box::new(BuiltinTemplates::new()),
    );

    let manifest = pastries_manifest();
    let specs = vec![
        manifest
            .app("pastries")
            .unwrap()
            .to_app_spec(dir.path(), None),
    ];

    let first = service.bake(&specs, false).unwrap();
    assert_eq!(first.total_generated(), 22);
    assert_eq!(first.total_skipped(), 0);

    // Hand-edit one artifact between runs.
    let forms = dir.path().join("pastries").join("tart_forms.py");
    std::fs::write(&forms, "# custom forms\n").unwrap();

    let second = service.bake(&specs, false).unwrap();
    assert_eq!(second.total_generated(), 0);
    assert_eq!(second.total_skipped(), 22);
    assert!(second.total_generated() < first.total_generated());
    assert_eq!(std::fs::read_to_string(&forms).unwrap(), "# custom forms\n");
}

#[test]
fn startapp_stub_is_reclaimed_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let app_dir = dir.path().join("pastries");
    std::fs::create_dir_all(&app_dir).unwrap();
    // A freshly created app module: four lines, never edited.
    std::fs::write(
        app_dir.join("views.py"),
        "from django.shortcuts import render\n\n# Create your views here.\n",
    )
    .unwrap();

    let service = BakeService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(NoOverrides),
        Box::new(BuiltinTemplates::new()),
    );
    let manifest = pastries_manifest();
    let specs = vec![
        manifest
            .app("pastries")
            .unwrap()
            .to_app_spec(dir.path(), None),
    ];

    let report = service.bake(&specs, false).unwrap();
    assert_eq!(report.total_reclaimed(), 1);
    assert!(!app_dir.join("views.py").exists());
    assert!(app_dir.join("views").join("__init__.py").exists());
}

#[test]
fn override_directory_substitutes_builtin_for_every_model() {
    let dir = tempfile::tempdir().unwrap();
    let override_dir = dir.path().join("bakery_overrides");
    std::fs::create_dir_all(&override_dir).unwrap();
    std::fs::write(
        override_dir.join("admin"),
        "# {{MODEL_NAME}} admin is managed elsewhere\n",
    )
    .unwrap();

    let service = BakeService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(DirOverrides::new(&override_dir)),
        Box::new(BuiltinTemplates::new()),
    );
    let manifest = pastries_manifest();
    let specs = vec![
        manifest
            .app("pastries")
            .unwrap()
            .to_app_spec(dir.path(), None),
    ];

    service.bake(&specs, false).unwrap();

    for model in ["tart", "danish"] {
        let path = dir.path().join("pastries").join(format!("{model}_admin.py"));
        let content = std::fs::read_to_string(path).unwrap();
        // The override body, parameterized by model name, and nothing else.
        assert!(content.ends_with("admin is managed elsewhere\n"));
        assert!(!content.contains("ModelAdmin"));
    }

    // Non-overridden kinds still use the built-ins.
    let views = std::fs::read_to_string(
        dir.path()
            .join("pastries")
            .join("views")
            .join("tart_views.py"),
    )
    .unwrap();
    assert!(views.contains("class TartListView(ListView)"));
}

#[test]
fn app_spec_paths_follow_naming_scheme() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs);

    let manifest = pastries_manifest();
    let spec = manifest
        .app("pastries")
        .unwrap()
        .to_app_spec(Path::new("."), Some(&["Tart".to_string()]));
    service.bake(&[spec], false).unwrap();

    let mut files = fs.list_files();
    files.sort();
    let expected: Vec<PathBuf> = [
        "./pastries/tart_admin.py",
        "./pastries/tart_forms.py",
        "./pastries/templates/pastries/tart_base.html",
        "./pastries/templates/pastries/tart_create.html",
        "./pastries/templates/pastries/tart_delete.html",
        "./pastries/templates/pastries/tart_detail.html",
        "./pastries/templates/pastries/tart_list.html",
        "./pastries/templates/pastries/tart_update.html",
        "./pastries/urls/__init__.py",
        "./pastries/urls/tart_urls.py",
        "./pastries/views/__init__.py",
        "./pastries/views/tart_views.py",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(files, expected);
}
