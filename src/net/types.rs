//! Wire DTOs for the capabilities API.
//!
//! DESIGN
//! ======
//! `GET /capabilities` returns a JSON object keyed by capability name. Cards
//! render in the order the server wrote the keys, so `CapabilitySet` keeps
//! entries in a `Vec` and decodes the object with an order-preserving visitor
//! instead of going through a sorted or hashed map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Details for one capability as returned by the listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityDetails {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub practice_area: String,
    /// `None` renders as "Not specified".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_verticals: Option<Vec<String>>,
    /// Available hours per week; absent or `null` means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    /// Registered consultant emails in registration order.
    #[serde(default, deserialize_with = "deserialize_consultants")]
    pub consultants: Vec<String>,
}

impl CapabilityDetails {
    pub fn capacity_or_zero(&self) -> f64 {
        self.capacity.unwrap_or(0.0)
    }
}

/// A named capability.
#[derive(Clone, Debug, PartialEq)]
pub struct Capability {
    pub name: String,
    pub details: CapabilityDetails,
}

/// The full listing, in server order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CapabilitySet {
    entries: Vec<Capability>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `name`. A replaced entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, details: CapabilityDetails) {
        let name = name.into();
        if let Some(existing) = self.entries.iter_mut().find(|c| c.name == name) {
            existing.details = details;
        } else {
            self.entries.push(Capability { name, details });
        }
    }

    pub fn get(&self, name: &str) -> Option<&CapabilityDetails> {
        self.entries.iter().find(|c| c.name == name).map(|c| &c.details)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Capability> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = &'a Capability;
    type IntoIter = std::slice::Iter<'a, Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for CapabilitySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CapabilitySetVisitor;

        impl<'de> Visitor<'de> for CapabilitySetVisitor {
            type Value = CapabilitySet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping capability names to details")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut set = CapabilitySet {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((name, details)) = access.next_entry::<String, CapabilityDetails>()? {
                    set.insert(name, details);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(CapabilitySetVisitor)
    }
}

/// Success body of register/unregister.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body of register/unregister.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub detail: Option<String>,
}

fn deserialize_consultants<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
