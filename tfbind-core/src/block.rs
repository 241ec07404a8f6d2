//! Block - Helpers shared by generated nested-block types
//!
//! - `ComputedList` / `ComputedObject`: index-addressed accessors over
//!   computed nested objects whose values are only known after apply
//! - serde helpers accepting both Terraform JSON encodings of a block
//!   (a single object or an array of objects)
//! - `non_empty`: builder check for repeated blocks with `min_items >= 1`

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;
use crate::resource::Reference;

/// List of computed nested objects (e.g., the nodes of a cluster)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedList {
    base: Reference,
}

impl ComputedList {
    pub fn new(base: Reference) -> Self {
        Self { base }
    }

    /// Object at `index`
    pub fn get(&self, index: usize) -> ComputedObject {
        ComputedObject::new(self.base.index(index))
    }

    /// Reference to the whole list
    pub fn reference(&self) -> &Reference {
        &self.base
    }
}

/// One computed nested object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedObject {
    base: Reference,
}

impl ComputedObject {
    pub fn new(base: Reference) -> Self {
        Self { base }
    }

    /// Reference to a scalar attribute of this object
    pub fn attribute(&self, name: &str) -> Reference {
        self.base.attribute(name)
    }

    /// Nested list of computed objects
    pub fn list(&self, name: &str) -> ComputedList {
        ComputedList::new(self.base.attribute(name))
    }

    pub fn reference(&self) -> &Reference {
        &self.base
    }
}

/// Deserialize an optional block given either as an object or as an array
/// holding at most one object
pub fn optional_block<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(mut items) => match items.len() {
            0 => Ok(None),
            1 => T::deserialize(items.remove(0))
                .map(Some)
                .map_err(de::Error::custom),
            n => Err(de::Error::invalid_length(n, &"at most one block")),
        },
        other => T::deserialize(other).map(Some).map_err(de::Error::custom),
    }
}

/// Deserialize a block that must be present exactly once
pub fn required_block<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match optional_block(deserializer)? {
        Some(block) => Ok(block),
        None => Err(de::Error::invalid_length(0, &"exactly one block")),
    }
}

/// Deserialize a repeated block given either as an array or as a single object
pub fn block_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| T::deserialize(item).map_err(de::Error::custom))
            .collect(),
        other => T::deserialize(other)
            .map(|block| vec![block])
            .map_err(de::Error::custom),
    }
}

/// Require at least one item of a repeated block
pub fn non_empty<T>(items: Vec<T>, resource_type: &str, block: &str) -> Result<Vec<T>, ConfigError> {
    if items.is_empty() {
        return Err(ConfigError::missing(resource_type, block));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceId;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Pause {
        cluster_identifier: String,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "optional_block")]
        pause: Option<Pause>,
        #[serde(default, deserialize_with = "block_list")]
        parameter: Vec<Pause>,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct RequiredHolder {
        #[serde(deserialize_with = "required_block")]
        pause: Pause,
    }

    #[test]
    fn computed_list_paths() {
        let id = ResourceId::new("aws_redshift_endpoint_access", "reader");
        let endpoints = ComputedList::new(Reference::new(&id, "vpc_endpoint"));
        let interface = endpoints.get(0).list("network_interface").get(1);
        assert_eq!(
            interface.attribute("private_ip_address").to_string(),
            "${aws_redshift_endpoint_access.reader.vpc_endpoint[0].network_interface[1].private_ip_address}"
        );
        assert_eq!(
            endpoints.reference().to_string(),
            "${aws_redshift_endpoint_access.reader.vpc_endpoint}"
        );
    }

    #[test]
    fn optional_block_accepts_object_or_array() {
        let from_object: Holder =
            serde_json::from_value(json!({ "pause": { "cluster_identifier": "a" } })).unwrap();
        let from_array: Holder =
            serde_json::from_value(json!({ "pause": [{ "cluster_identifier": "a" }] })).unwrap();
        assert_eq!(from_object, from_array);

        let absent: Holder = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.pause, None);
        assert!(absent.parameter.is_empty());
    }

    #[test]
    fn optional_block_rejects_many() {
        let result: Result<Holder, _> = serde_json::from_value(json!({
            "pause": [{ "cluster_identifier": "a" }, { "cluster_identifier": "b" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn block_list_accepts_single_object() {
        let holder: Holder =
            serde_json::from_value(json!({ "parameter": { "cluster_identifier": "a" } })).unwrap();
        assert_eq!(holder.parameter.len(), 1);
    }

    #[test]
    fn non_empty_rejects_empty_list() {
        let err = non_empty::<Pause>(Vec::new(), "aws_redshift_security_group", "ingress")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "aws_redshift_security_group: required attribute 'ingress' is missing"
        );
        let items = non_empty(vec![1], "aws_redshift_security_group", "ingress").unwrap();
        assert_eq!(items, vec![1]);
    }

    #[test]
    fn required_block_must_be_present() {
        let ok: RequiredHolder =
            serde_json::from_value(json!({ "pause": [{ "cluster_identifier": "a" }] })).unwrap();
        assert_eq!(ok.pause.cluster_identifier, "a");

        assert!(serde_json::from_value::<RequiredHolder>(json!({ "pause": [] })).is_err());
        assert!(serde_json::from_value::<RequiredHolder>(json!({})).is_err());
    }
}
