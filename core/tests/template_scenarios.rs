use linkt_core::{build_template, AppError};
use pretty_assertions::assert_eq;

const NO_NAMES: &[&str] = &[];

#[test]
fn scenario_table() {
    let cases: [(&str, &[&str], &str); 4] = [
        ("/items/5?sort=asc", &[], "/items/5"),
        ("/items/5", &["sort", "filter"], "/items/5{?sort,filter}"),
        ("/items/5{?stale}", &["fresh"], "/items/5{?fresh}"),
        ("/items/5?x=1", &["y"], "/items/5{?y}"),
    ];

    for (uri, names, expected) in cases {
        let template = build_template(uri, names).unwrap();
        assert_eq!(template.as_str(), expected, "input {uri:?} {names:?}");
    }
}

#[test]
fn clean_input_without_names_is_unchanged() {
    for uri in [
        "/items/5",
        "http://localhost:8080/api/items",
        "https://example.com/",
        "relative/path",
    ] {
        assert_eq!(build_template(uri, NO_NAMES).unwrap().as_str(), uri);
    }
}

#[test]
fn names_are_appended_verbatim() {
    let base = "https://example.com/orders/42";
    let template = build_template(base, &["status", "page", "size"]).unwrap();
    assert_eq!(template.to_string(), format!("{base}{{?status,page,size}}"));
}

#[test]
fn order_is_not_alphabetised() {
    let template = build_template("/x", &["b", "a"]).unwrap();
    assert!(template.as_str().ends_with("{?b,a}"));
}

#[test]
fn stale_expression_never_survives() {
    let template = build_template("/x{?old,older}", &["new"]).unwrap();
    assert_eq!(template.as_str(), "/x{?new}");
    assert!(!template.as_str().contains("old"));
}

#[test]
fn output_never_keeps_concrete_query() {
    let inputs = [
        "/a?k=v",
        "/a?k=v&l=w",
        "http://h/a?k=v{?t}",
        "http://h:9000/a/b?x=%20y",
    ];
    for uri in inputs {
        let template = build_template(uri, &["k"]).unwrap();
        let base = template.base();
        assert!(!base.contains('?'), "{uri} produced {template}");
    }
}

#[test]
fn malformed_base_uri_fails() {
    for uri in ["http://[invalid", "http://exa mple.com/", "https://:80/"] {
        let err = build_template(uri, &["a"]).unwrap_err();
        assert!(
            matches!(err, AppError::MalformedInput { .. }),
            "{uri} gave {err}"
        );
    }
}
