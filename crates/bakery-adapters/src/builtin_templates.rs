//! Built-in default templates for every artifact kind.
//!
//! These are the bodies used when no override is registered. They are
//! compile-time constants referenced zero-copy through
//! [`TemplateSource::Static`]; placeholders use the `{{VARIABLE}}` syntax
//! understood by `bakery_core::domain::RenderContext`.
//!
//! The produced artifacts target a Django-style project layout, but nothing
//! validates that - the engine treats template bodies as opaque text, and a
//! project can swap any of them via the override directory.

use bakery_core::{
    application::ports::TemplateCatalog,
    domain::{ArtifactKind, TemplateSource},
};

/// Catalog of the templates that ship with the tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for BuiltinTemplates {
    fn builtin(&self, kind: ArtifactKind) -> TemplateSource {
        let body = match kind {
            ArtifactKind::Views => VIEWS,
            ArtifactKind::Urls => URLS,
            ArtifactKind::Forms => FORMS,
            ArtifactKind::Admin => ADMIN,
            ArtifactKind::DetailTemplate => DETAIL_HTML,
            ArtifactKind::CreateTemplate => CREATE_HTML,
            ArtifactKind::UpdateTemplate => UPDATE_HTML,
            ArtifactKind::ListTemplate => LIST_HTML,
            ArtifactKind::DeleteTemplate => DELETE_HTML,
            ArtifactKind::BaseTemplate => BASE_HTML,
            ArtifactKind::ViewsInit => VIEWS_INIT,
            ArtifactKind::UrlsInit => URLS_INIT,
        };
        TemplateSource::Static(body)
    }
}

// ── Per-model source artifacts ────────────────────────────────────────────────

const VIEWS: &str = r#"from django.urls import reverse_lazy
from django.views.generic import (
    CreateView,
    DeleteView,
    DetailView,
    ListView,
    UpdateView,
)

from ..{{MODEL_NAME_SNAKE}}_forms import {{MODEL_NAME}}Form
from ..models import {{MODEL_NAME}}


class {{MODEL_NAME}}ListView(ListView):
    model = {{MODEL_NAME}}
    template_name = "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_list.html"
    context_object_name = "{{MODEL_NAME_PLURAL_SNAKE}}"
    paginate_by = 20

    # def get_queryset(self):
    #     return super().get_queryset()


class {{MODEL_NAME}}DetailView(DetailView):
    model = {{MODEL_NAME}}
    template_name = "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_detail.html"
    slug_field = "{{LOOKUP_FIELD}}"
    slug_url_kwarg = "{{LOOKUP_FIELD}}"

    # def get_context_data(self, **kwargs):
    #     return super().get_context_data(**kwargs)


class {{MODEL_NAME}}CreateView(CreateView):
    model = {{MODEL_NAME}}
    form_class = {{MODEL_NAME}}Form
    template_name = "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_create.html"

    # def form_valid(self, form):
    #     return super().form_valid(form)


class {{MODEL_NAME}}UpdateView(UpdateView):
    model = {{MODEL_NAME}}
    form_class = {{MODEL_NAME}}Form
    template_name = "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_update.html"
    slug_field = "{{LOOKUP_FIELD}}"
    slug_url_kwarg = "{{LOOKUP_FIELD}}"


class {{MODEL_NAME}}DeleteView(DeleteView):
    model = {{MODEL_NAME}}
    template_name = "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_delete.html"
    slug_field = "{{LOOKUP_FIELD}}"
    slug_url_kwarg = "{{LOOKUP_FIELD}}"
    success_url = reverse_lazy("{{MODEL_NAME_SNAKE}}_list")
"#;

const URLS: &str = r#"from django.urls import path

from ..views import (
    {{MODEL_NAME}}CreateView,
    {{MODEL_NAME}}DeleteView,
    {{MODEL_NAME}}DetailView,
    {{MODEL_NAME}}ListView,
    {{MODEL_NAME}}UpdateView,
)

urlpatterns = [
    path("", {{MODEL_NAME}}ListView.as_view(), name="{{MODEL_NAME_SNAKE}}_list"),
    path("create/", {{MODEL_NAME}}CreateView.as_view(), name="{{MODEL_NAME_SNAKE}}_create"),
    path("<{{LOOKUP_URL_PATTERN}}>/", {{MODEL_NAME}}DetailView.as_view(), name="{{MODEL_NAME_SNAKE}}_detail"),
    path("<{{LOOKUP_URL_PATTERN}}>/update/", {{MODEL_NAME}}UpdateView.as_view(), name="{{MODEL_NAME_SNAKE}}_update"),
    path("<{{LOOKUP_URL_PATTERN}}>/delete/", {{MODEL_NAME}}DeleteView.as_view(), name="{{MODEL_NAME_SNAKE}}_delete"),
]
"#;

const FORMS: &str = r#"from django import forms

from .models import {{MODEL_NAME}}


class {{MODEL_NAME}}Form(forms.ModelForm):
    class Meta:
        model = {{MODEL_NAME}}
        fields = {{FIELDS}}

    # def clean(self):
    #     return super().clean()
"#;

const ADMIN: &str = r#"from django.contrib import admin
from django.utils.html import format_html

from .models import {{MODEL_NAME}}


@admin.register({{MODEL_NAME}})
class {{MODEL_NAME}}Admin(admin.ModelAdmin):
    list_select_related = {{LIST_SELECT_RELATED}}
    list_display = {{LIST_DISPLAY}}
    list_filter = {{LIST_FILTER}}
    search_fields = {{SEARCH_FIELDS}}
{{LINKED_FIELD_METHODS}}"#;

// ── Per-model page templates ──────────────────────────────────────────────────

const BASE_HTML: &str = r#"{% extends "base.html" %}
"#;

const LIST_HTML: &str = r#"{% extends "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_base.html" %}

{% block content %}
<h1>{{MODEL_NAME_PLURAL}}</h1>
<ul>
  {% for object in object_list %}
  <li><a href="{% url '{{MODEL_NAME_SNAKE}}_detail' object.{{LOOKUP_FIELD}} %}">{{ object }}</a></li>
  {% empty %}
  <li>No {{MODEL_NAME_PLURAL_SNAKE}} yet.</li>
  {% endfor %}
</ul>
<a href="{% url '{{MODEL_NAME_SNAKE}}_create' %}">New {{MODEL_NAME}}</a>
{% endblock %}
"#;

const DETAIL_HTML: &str = r#"{% extends "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_base.html" %}

{% block content %}
<h1>{{ object }}</h1>
<a href="{% url '{{MODEL_NAME_SNAKE}}_update' object.{{LOOKUP_FIELD}} %}">Edit</a>
<a href="{% url '{{MODEL_NAME_SNAKE}}_delete' object.{{LOOKUP_FIELD}} %}">Delete</a>
{% endblock %}
"#;

const CREATE_HTML: &str = r#"{% extends "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_base.html" %}

{% block content %}
<h1>New {{MODEL_NAME}}</h1>
<form method="post">
  {% csrf_token %}
  {{ form.as_p }}
  <button type="submit">Save</button>
</form>
{% endblock %}
"#;

const UPDATE_HTML: &str = r#"{% extends "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_base.html" %}

{% block content %}
<h1>Edit {{ object }}</h1>
<form method="post">
  {% csrf_token %}
  {{ form.as_p }}
  <button type="submit">Save</button>
</form>
{% endblock %}
"#;

const DELETE_HTML: &str = r#"{% extends "{{APP_NAME}}/{{MODEL_NAME_SNAKE}}_base.html" %}

{% block content %}
<h1>Delete {{ object }}?</h1>
<form method="post">
  {% csrf_token %}
  <button type="submit">Confirm</button>
  <a href="{% url '{{MODEL_NAME_SNAKE}}_list' %}">Cancel</a>
</form>
{% endblock %}
"#;

// ── Per-app aggregators ───────────────────────────────────────────────────────

const VIEWS_INIT: &str = r#"{{VIEWS_IMPORTS}}
"#;

const URLS_INIT: &str = r#"from django.urls import include, path

urlpatterns = [
{{URL_INCLUDES}}
]
"#;
