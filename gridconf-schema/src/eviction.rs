//! Cache eviction policy metadata.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ClassDescriptor, Error, FieldDescriptor, Result};

const LRU: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.cache.eviction.lru.LruEvictionPolicy",
    fields: &[
        FieldDescriptor::auto("batchSize"),
        FieldDescriptor::auto("maxMemorySize"),
        FieldDescriptor::auto("maxSize"),
    ],
};

const RND: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.cache.eviction.random.RandomEvictionPolicy",
    fields: &[FieldDescriptor::auto("maxSize")],
};

const FIFO: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.cache.eviction.fifo.FifoEvictionPolicy",
    fields: &[
        FieldDescriptor::auto("batchSize"),
        FieldDescriptor::auto("maxMemorySize"),
        FieldDescriptor::auto("maxSize"),
    ],
};

const SORTED: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.cache.eviction.sorted.SortedEvictionPolicy",
    fields: &[
        FieldDescriptor::auto("batchSize"),
        FieldDescriptor::auto("maxMemorySize"),
        FieldDescriptor::auto("maxSize"),
    ],
};

/// Cache eviction policy kinds selectable in the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvictionPolicyKind {
    #[serde(rename = "LRU")]
    Lru,
    #[serde(rename = "RND")]
    Rnd,
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "SORTED")]
    Sorted,
}

impl EvictionPolicyKind {
    /// The symbolic name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lru => "LRU",
            Self::Rnd => "RND",
            Self::Fifo => "FIFO",
            Self::Sorted => "SORTED",
        }
    }

    /// The eviction policy class and its field schema.
    pub fn descriptor(&self) -> &'static ClassDescriptor {
        match self {
            Self::Lru => &LRU,
            Self::Rnd => &RND,
            Self::Fifo => &FIFO,
            Self::Sorted => &SORTED,
        }
    }
}

impl FromStr for EvictionPolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LRU" => Ok(Self::Lru),
            "RND" => Ok(Self::Rnd),
            "FIFO" => Ok(Self::Fifo),
            "SORTED" => Ok(Self::Sorted),
            _ => Err(Error::UnknownEvictionPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_class_names() {
        assert_eq!(
            EvictionPolicyKind::Lru.descriptor().class_name,
            "org.apache.ignite.cache.eviction.lru.LruEvictionPolicy"
        );
        assert_eq!(
            EvictionPolicyKind::Rnd.descriptor().class_name,
            "org.apache.ignite.cache.eviction.random.RandomEvictionPolicy"
        );
    }

    #[test]
    fn test_random_policy_has_only_max_size() {
        let fields = EvictionPolicyKind::Rnd.descriptor().fields;

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "maxSize");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "SORTED".parse::<EvictionPolicyKind>().unwrap(),
            EvictionPolicyKind::Sorted
        );
        assert_eq!(
            "bogus".parse::<EvictionPolicyKind>(),
            Err(Error::UnknownEvictionPolicy("bogus".to_string()))
        );
    }

    #[test]
    fn test_wire_roundtrip() {
        let kind: EvictionPolicyKind = serde_json::from_str("\"LRU\"").unwrap();

        assert_eq!(kind, EvictionPolicyKind::Lru);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"LRU\"");
    }
}
