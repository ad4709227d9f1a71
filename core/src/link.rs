#![deny(missing_docs)]

//! # Links
//!
//! The hypermedia value a caller hands out: a template plus its relation.

use crate::template::UriTemplate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A link to an endpoint, possibly templated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URI or URI template.
    pub href: UriTemplate,
    /// Link relation type.
    pub rel: String,
    /// True when `href` carries a template expression.
    #[serde(default, skip_serializing_if = "is_false")]
    pub templated: bool,
}

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

impl Link {
    /// The default relation.
    pub const SELF_REL: &'static str = "self";

    /// A `self` link to `href`.
    pub fn of(href: UriTemplate) -> Self {
        let templated = href.is_templated();
        Self {
            href,
            rel: Self::SELF_REL.to_string(),
            templated,
        }
    }

    /// Replaces the relation.
    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }
}

/// Renders as an RFC 8288 `Link` header value.
impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>; rel=\"{}\"", self.href, self.rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::build_template;

    #[test]
    fn test_self_link_is_templated() {
        let link = Link::of(build_template("/items/5", &["sort"]).unwrap());
        assert_eq!(link.rel, "self");
        assert!(link.templated);
        assert_eq!(link.to_string(), "</items/5{?sort}>; rel=\"self\"");
    }

    #[test]
    fn test_json_shape() {
        let plain = Link::of(build_template("/items/5?x=1", &[] as &[&str]).unwrap())
            .with_rel("item");
        assert_eq!(
            serde_json::to_string(&plain).unwrap(),
            r#"{"href":"/items/5","rel":"item"}"#
        );

        let templated = Link::of(build_template("/items", &["page"]).unwrap());
        assert_eq!(
            serde_json::to_string(&templated).unwrap(),
            r#"{"href":"/items{?page}","rel":"self","templated":true}"#
        );
    }
}
