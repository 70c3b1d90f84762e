//! Integration tests for affordance form rendering
//!
//! Exercises the public API end to end: template loading, affordance
//! selection, rendering and the capability checks.

use std::io::Read;
use std::sync::Arc;

use acton_hateoas::prelude::*;
use acton_hateoas::template::{DirectoryTemplates, LayeredTemplates, TemplateOptions, FORM_TEMPLATE};
use proptest::prelude::*;
use serde_json::json;

/// Helper to build a resource whose self link carries one affordance
fn resource_with(target: &str, properties: Vec<PropertyMetadata>) -> Resource {
    Resource::new(json!({})).add(Link::of(target).and_affordance(
        Affordance::builder("create", HttpMethod::Post, target)
            .properties(properties)
            .build(),
    ))
}

fn render_html(renderer: &AffordanceFormRenderer, resource: &Resource) -> String {
    String::from_utf8(renderer.render(resource).unwrap()).unwrap()
}

/// Value of the form's `action` attribute with HTML entities decoded
fn decoded_action(html: &str) -> Option<String> {
    let start = html.find(r#"action=""#)? + r#"action=""#.len();
    let end = start + html[start..].find('"')?;
    Some(
        html[start..end]
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&amp;", "&"),
    )
}

/// Reader that fails the test if anything reads from it
struct UntouchedReader;

impl Read for UntouchedReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        panic!("read path must not consume input");
    }
}

#[test]
fn test_renders_target_url() {
    let renderer = AffordanceFormRenderer::embedded().unwrap();
    let html = render_html(
        &renderer,
        &resource_with("/employees", vec![PropertyMetadata::text("name")]),
    );

    assert!(html.contains("/employees"));
    assert!(html.contains("<form"));
}

#[test]
fn test_query_string_target_is_attribute_encoded() {
    let renderer = AffordanceFormRenderer::embedded().unwrap();
    let target = "/employees?page=1&size=20";
    let html = render_html(&renderer, &resource_with(target, Vec::new()));

    assert!(html.contains(r#"action="/employees?page=1&amp;size=20""#));
    assert_eq!(decoded_action(&html).as_deref(), Some(target));
}

#[test]
fn test_only_first_affordance_is_rendered() {
    let renderer = AffordanceFormRenderer::embedded().unwrap();
    let resource = Resource::default().add(
        Link::of("/orders")
            .and_affordance(
                Affordance::builder("create", HttpMethod::Post, "/orders")
                    .property(PropertyMetadata::text("item"))
                    .build(),
            )
            .and_affordance(
                Affordance::builder("search", HttpMethod::Get, "/orders/search")
                    .property(PropertyMetadata::text("query"))
                    .build(),
            ),
    );

    let html = render_html(&renderer, &resource);
    assert!(html.contains(r#"name="item""#));
    assert!(!html.contains(r#"name="query""#));
    assert!(!html.contains("/orders/search"));
}

#[test]
fn test_missing_self_link_writes_nothing() {
    let renderer = AffordanceFormRenderer::embedded().unwrap();
    let resource = Resource::default().add(
        Link::new("/orders", LinkRelation::COLLECTION).and_affordance(
            Affordance::builder("create", HttpMethod::Post, "/orders").build(),
        ),
    );

    let mut sink = Vec::new();
    let err = renderer.write_to(&resource, &mut sink).unwrap_err();

    assert!(err.is_lookup());
    assert!(matches!(err, AffordanceError::LinkNotFound { .. }));
    assert!(sink.is_empty());
}

#[test]
fn test_missing_affordance_fails() {
    let renderer = AffordanceFormRenderer::embedded().unwrap();
    let resource = Resource::default().add(Link::of("/orders"));

    let err = renderer.render(&resource).unwrap_err();
    assert!(matches!(err, AffordanceError::NoAffordance { .. }));
}

#[test]
fn test_renderer_survives_failures() {
    let renderer = AffordanceFormRenderer::embedded().unwrap();
    assert!(renderer.render(&Resource::default()).is_err());

    let html = render_html(&renderer, &resource_with("/after", Vec::new()));
    assert!(html.contains("/after"));
}

#[test]
fn test_duplicate_names_render_twice() {
    let renderer = AffordanceFormRenderer::embedded().unwrap();
    let html = render_html(
        &renderer,
        &resource_with(
            "/tags",
            vec![PropertyMetadata::text("tag"), PropertyMetadata::text("tag")],
        ),
    );

    assert_eq!(html.matches(r#"name="tag""#).count(), 2);
}

#[test]
fn test_can_write_truth_table() {
    let renderer = AffordanceFormRenderer::embedded().unwrap();
    let html_utf8: mime::Mime = "text/html; charset=utf-8".parse().unwrap();

    assert!(renderer.can_write::<Resource>(&mime::TEXT_HTML));
    assert!(!renderer.can_write::<Resource>(&mime::APPLICATION_JSON));
    assert!(!renderer.can_write::<Resource>(&mime::TEXT_PLAIN));
    assert!(!renderer.can_write::<Resource>(&html_utf8));
    assert!(!renderer.can_write::<serde_json::Value>(&mime::TEXT_HTML));
    assert!(!renderer.can_write::<str>(&mime::TEXT_HTML));
    assert!(!renderer.can_read::<Resource>(&mime::TEXT_HTML));
}

#[test]
fn test_read_is_unsupported_and_untouched() {
    let renderer = AffordanceFormRenderer::embedded().unwrap();

    let err = renderer.read(UntouchedReader).unwrap_err();
    assert!(matches!(err, AffordanceError::Unsupported { .. }));

    let err = renderer.read(&b""[..]).unwrap_err();
    assert!(matches!(err, AffordanceError::Unsupported { .. }));
}

#[test]
fn test_concurrent_rendering() {
    let renderer = Arc::new(AffordanceFormRenderer::embedded().unwrap());

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let renderer = Arc::clone(&renderer);
            scope.spawn(move || {
                let target = format!("/workers/{worker}");
                let field = format!("field_{worker}");
                let resource = resource_with(&target, vec![PropertyMetadata::text(field.clone())]);

                for _ in 0..50 {
                    let html = render_html(&renderer, &resource);
                    assert!(html.contains(&format!(r#"action="{target}""#)));
                    assert!(html.contains(&format!(r#"name="{field}""#)));
                    assert_eq!(html.matches("name=\"field_").count(), 1);
                }
            });
        }
    });
}

#[test]
fn test_custom_template_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("forms")).unwrap();
    std::fs::write(
        dir.path().join(FORM_TEMPLATE),
        "<form action=\"{{ target }}\">{% for p in properties %}[{{ p.name }}]{% endfor %}</form>",
    )
    .unwrap();

    let renderer = AffordanceFormRenderer::load(
        &DirectoryTemplates::new(dir.path()),
        TemplateOptions::default(),
    )
    .unwrap();

    let html = render_html(
        &renderer,
        &resource_with("/x", vec![PropertyMetadata::text("a"), PropertyMetadata::text("b")]),
    );
    assert_eq!(html, "<form action=\"/x\">[a][b]</form>");
}

#[test]
fn test_missing_template_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let err = AffordanceFormRenderer::load(
        &DirectoryTemplates::new(dir.path()),
        TemplateOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TemplateError::NotFound(_)));
}

#[test]
fn test_from_config_with_override_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = HateoasConfig::default();
    config.templates.template_dir = Some(dir.path().to_path_buf());

    // nothing customised yet: embedded default
    let renderer = AffordanceFormRenderer::from_config(&config).unwrap();
    assert!(render_html(&renderer, &resource_with("/a", Vec::new())).contains("<form"));

    std::fs::create_dir_all(dir.path().join("forms")).unwrap();
    std::fs::write(dir.path().join(FORM_TEMPLATE), "custom {{ target }}").unwrap();
    assert!(LayeredTemplates::new(dir.path()).is_customized(FORM_TEMPLATE));

    let renderer = AffordanceFormRenderer::from_config(&config).unwrap();
    assert_eq!(render_html(&renderer, &resource_with("/a", Vec::new())), "custom /a");
}

proptest! {
    #[test]
    fn prop_target_is_in_output(target in "/[a-zA-Z0-9/_.~+-]{0,24}") {
        let renderer = AffordanceFormRenderer::embedded().unwrap();
        let html = render_html(&renderer, &resource_with(&target, Vec::new()));

        prop_assert!(!html.is_empty());
        let expected = format!(r#"action="{target}""#);
        prop_assert!(html.contains(&expected));
    }

    #[test]
    fn prop_action_decodes_to_target(target in "/[a-zA-Z0-9/_.~+-]{0,16}(\\?[a-z0-9=&%#]{0,16})?") {
        let renderer = AffordanceFormRenderer::embedded().unwrap();
        let html = render_html(&renderer, &resource_with(&target, Vec::new()));

        prop_assert_eq!(decoded_action(&html), Some(target));
    }

    #[test]
    fn prop_one_entry_per_property_in_order(names in prop::collection::vec("[a-z][a-zA-Z0-9_]{0,10}", 0..12)) {
        let renderer = AffordanceFormRenderer::embedded().unwrap();
        let properties = names.iter().map(PropertyMetadata::text).collect();
        let html = render_html(&renderer, &resource_with("/items", properties));

        prop_assert_eq!(html.matches(r#"class="form-group""#).count(), names.len());

        let mut offset = 0;
        for name in &names {
            let needle = format!(r#"name="{name}""#);
            let found = html[offset..].find(&needle);
            prop_assert!(found.is_some(), "{} missing after offset {}", needle, offset);
            offset += found.unwrap_or_default() + needle.len();
        }
    }
}
