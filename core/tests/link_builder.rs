use linkt_core::{Invocation, LinkBuilder, RouteRegistry};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

const MANIFEST: &str = r#"
base_uri: http://localhost:8080
routes:
  - name: items.list
    path: /items
    query: [page, size, sort]
  - name: items.show
    path: /items/{id}
    query: [expand]
  - name: health
    path: /health
"#;

#[test]
fn link_from_manifest() {
    let builder = LinkBuilder::from_registry(RouteRegistry::from_yaml_str(MANIFEST).unwrap());

    let list = builder
        .link_to(&Invocation::new("items.list").arg("page", 3).arg("sort", "name"))
        .unwrap();
    assert_eq!(
        list.href.as_str(),
        "http://localhost:8080/items{?page,size,sort}"
    );

    let health = builder.link_to(&Invocation::new("health")).unwrap();
    assert_eq!(health.href.as_str(), "http://localhost:8080/health");
    assert!(!health.templated);
}

#[test]
fn shared_builder_across_threads() {
    let builder = Arc::new(LinkBuilder::from_registry(
        RouteRegistry::from_yaml_str(MANIFEST).unwrap(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let builder = Arc::clone(&builder);
            thread::spawn(move || {
                builder
                    .link_to(&Invocation::new("items.show").arg("id", i).arg("expand", "owner"))
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let link = handle.join().unwrap();
        assert_eq!(
            link.href.as_str(),
            format!("http://localhost:8080/items/{i}{{?expand}}")
        );
    }
}
