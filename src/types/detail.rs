//! Detail endpoints answer either `{"<key>": {...}}` or the bare object.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// A resource that may arrive wrapped under a named key.
pub trait Wrapped {
    const KEY: &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Detail<T> {
    Wrapped(T),
    Bare(T),
}

impl<T> Detail<T> {
    pub fn into_inner(self) -> T {
        match self {
            Detail::Wrapped(inner) | Detail::Bare(inner) => inner,
        }
    }
}

impl<'de, T> Deserialize<'de> for Detail<T>
where
    T: Wrapped + DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = Value::deserialize(deserializer)?;

        // Only an object under the wrapper key counts as wrapped.
        let wrapped = value
            .as_object_mut()
            .filter(|obj| obj.get(T::KEY).is_some_and(Value::is_object))
            .and_then(|obj| obj.remove(T::KEY));

        match wrapped {
            Some(inner) => serde_json::from_value(inner)
                .map(Detail::Wrapped)
                .map_err(serde::de::Error::custom),
            None => serde_json::from_value(value)
                .map(Detail::Bare)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{IssueDetail, PageDetail};

    #[test]
    fn unwraps_named_key() {
        let detail: Detail<IssueDetail> =
            serde_json::from_value(json!({ "issue": { "id": "i1", "title": "T" } })).unwrap();

        assert!(matches!(detail, Detail::Wrapped(_)));
        assert_eq!(detail.into_inner().id.as_deref(), Some("i1"));
    }

    #[test]
    fn accepts_bare_object() {
        let detail: Detail<PageDetail> =
            serde_json::from_value(json!({ "id": "p1", "title": "Roadmap" })).unwrap();

        assert!(matches!(detail, Detail::Bare(_)));
        assert_eq!(detail.into_inner().title.as_deref(), Some("Roadmap"));
    }

    #[test]
    fn other_resource_key_is_not_a_wrapper() {
        let detail: Detail<PageDetail> =
            serde_json::from_value(json!({ "issue": { "id": "i1" } })).unwrap();

        let page = match detail {
            Detail::Bare(page) => page,
            Detail::Wrapped(_) => panic!("page detail must not unwrap `issue`"),
        };
        assert!(page.extra.contains_key("issue"));
    }

    #[test]
    fn null_wrapper_falls_back_to_bare() {
        let detail: Detail<IssueDetail> =
            serde_json::from_value(json!({ "issue": null, "id": "i2" })).unwrap();

        assert!(matches!(detail, Detail::Bare(_)));
    }
}
