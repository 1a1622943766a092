use std::{collections::HashMap, path::Path, sync::Arc};

use anyhow::Context as _;
use serde::ser::SerializeStruct as _;

use crate::{
    foundation::error::{MorphError, MorphResult},
    keyframe::element::Element,
};

/// Immutable snapshot of one slide's visual elements at rest.
///
/// The ordered element sequence is the public representation; an id index backs
/// [`Keyframe::lookup`]. Clones share storage. There are no mutating operations: changed
/// slide content always means building a new keyframe.
#[derive(Clone, Debug)]
pub struct Keyframe {
    elements: Arc<[Element]>,
    index: Arc<HashMap<String, usize>>,
}

impl Keyframe {
    /// Build a keyframe, rejecting duplicate ids and malformed attributes.
    pub fn build(elements: Vec<Element>) -> MorphResult<Self> {
        let mut index = HashMap::with_capacity(elements.len());
        for (i, el) in elements.iter().enumerate() {
            el.validate()?;
            if index.insert(el.id.clone(), i).is_some() {
                return Err(MorphError::duplicate_identity(el.id.clone()));
            }
        }
        Ok(Self {
            elements: elements.into(),
            index: Arc::new(index),
        })
    }

    /// Index elements whose ids are unique by construction. Attributes are not re-validated.
    pub(crate) fn from_unique(elements: Vec<Element>) -> Self {
        let index = elements
            .iter()
            .enumerate()
            .map(|(i, el)| (el.id.clone(), i))
            .collect::<HashMap<_, _>>();
        debug_assert_eq!(index.len(), elements.len());
        Self {
            elements: elements.into(),
            index: Arc::new(index),
        }
    }

    /// Keyframe with no elements.
    pub fn empty() -> Self {
        Self {
            elements: Arc::from(Vec::new()),
            index: Arc::new(HashMap::new()),
        }
    }

    /// Parse slide JSON: either an array of elements or an object with an `elements` array.
    pub fn from_json_value(value: &serde_json::Value) -> MorphResult<Self> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(obj) => obj
                .get("elements")
                .and_then(|v| v.as_array())
                .ok_or_else(|| {
                    MorphError::validation("keyframe object must have an `elements` array")
                })?,
            _ => {
                return Err(MorphError::validation(
                    "keyframe must be an array of elements or an object with `elements`",
                ));
            }
        };
        let elements = items
            .iter()
            .map(Element::from_json_value)
            .collect::<MorphResult<Vec<_>>>()?;
        Self::build(elements)
    }

    /// Parse slide JSON text.
    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        Self::from_json_value(&value)
    }

    /// Read and parse a slide JSON file.
    pub fn from_path(path: &Path) -> MorphResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read keyframe '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Elements in authored order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Element with the given id, if present.
    pub fn lookup(&self, id: &str) -> Option<&Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    /// Position of `id` in authored order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Whether an element with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the keyframe has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Keyframe {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Keyframe {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl serde::Serialize for Keyframe {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("Keyframe", 1)?;
        s.serialize_field("elements", &*self.elements)?;
        s.end()
    }
}

impl<'de> serde::Deserialize<'de> for Keyframe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/keyframe/model.rs"]
mod tests;
