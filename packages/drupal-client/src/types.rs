use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A JSON:API response envelope.
///
/// `data` is a list for collection fetches and a single resource for
/// single-item fetches. Anything else (missing, `null`, an object that is not
/// a resource) is kept as [`PrimaryData::Malformed`] so callers can decide
/// how to degrade instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub data: PrimaryData,
    #[serde(default, deserialize_with = "lenient_resources")]
    pub included: Vec<Resource>,
}

/// Decode `included` entry by entry; an entry that is not a resource is
/// skipped instead of failing the whole document.
fn lenient_resources<'de, D>(deserializer: D) -> Result<Vec<Resource>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Resource>(value) {
            Ok(resource) => Some(resource),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping undecodable included resource");
                None
            }
        })
        .collect())
}

impl Document {
    /// Build a collection document.
    pub fn collection(data: Vec<Resource>, included: Vec<Resource>) -> Self {
        Self {
            data: PrimaryData::Many(data),
            included,
        }
    }

    /// Build a single-resource document.
    pub fn single(data: Resource, included: Vec<Resource>) -> Self {
        Self {
            data: PrimaryData::One(Box::new(data)),
            included,
        }
    }

    /// The primary resources when `data` is a list.
    pub fn resources(&self) -> Option<&[Resource]> {
        match &self.data {
            PrimaryData::Many(resources) => Some(resources),
            _ => None,
        }
    }

    /// Number of primary resources (0 for malformed data, 1 for a single resource).
    pub fn len(&self) -> usize {
        match &self.data {
            PrimaryData::Many(resources) => resources.len(),
            PrimaryData::One(_) => 1,
            PrimaryData::Malformed(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The `data` member of a [`Document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Many(Vec<Resource>),
    One(Box<Resource>),
    Malformed(Value),
}

impl Default for PrimaryData {
    fn default() -> Self {
        PrimaryData::Malformed(Value::Null)
    }
}

/// One addressable unit of content, identified by `(type, id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

impl Resource {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            attributes: Map::new(),
            relationships: HashMap::new(),
        }
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a relationship to a single target.
    pub fn with_relationship(mut self, name: impl Into<String>, target: ResourceIdentifier) -> Self {
        self.relationships.insert(
            name.into(),
            Relationship {
                data: Some(RelationshipData::One(target)),
            },
        );
        self
    }

    /// Set a relationship to an ordered list of targets.
    pub fn with_relationships(
        mut self,
        name: impl Into<String>,
        targets: Vec<ResourceIdentifier>,
    ) -> Self {
        self.relationships.insert(
            name.into(),
            Relationship {
                data: Some(RelationshipData::Many(targets)),
            },
        );
        self
    }

    /// The identifier pointing at this resource.
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(&self.kind, &self.id)
    }

    /// Raw attribute value, treating JSON `null` as absent.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name).filter(|v| !v.is_null())
    }

    /// Non-empty string attribute.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Drupal formatted-text attribute (`{ value, processed, ... }`).
    ///
    /// Prefers the rendered `processed` form and falls back to the raw
    /// `value`. A plain string attribute is returned as is.
    pub fn formatted_text(&self, name: &str) -> Option<&str> {
        match self.attr(name)? {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Object(field) => ["processed", "value"]
                .iter()
                .filter_map(|key| field.get(*key).and_then(Value::as_str))
                .find(|s| !s.is_empty()),
            _ => None,
        }
    }

    /// The references of a relationship, in document order.
    ///
    /// Returns an empty list when the relationship is missing or unset.
    pub fn references(&self, name: &str) -> Vec<&ResourceIdentifier> {
        match self.relationships.get(name).and_then(|r| r.data.as_ref()) {
            Some(RelationshipData::One(target)) => vec![target],
            Some(RelationshipData::Many(targets)) => targets.iter().collect(),
            None => Vec::new(),
        }
    }
}

/// A named relationship on a [`Resource`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<RelationshipData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

/// `{ type, id }` reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

/// Body of `POST /user/login?_format=json`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub name: &'a str,
    pub pass: &'a str,
}

/// Response of a successful Drupal login.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginResponse {
    pub csrf_token: Option<String>,
}
