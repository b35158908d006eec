//! Marshaller metadata.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ClassDescriptor, Error, FieldDescriptor, Result};

const OPTIMIZED: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.marshaller.optimized.OptimizedMarshaller",
    fields: &[
        FieldDescriptor::auto("poolSize"),
        FieldDescriptor::auto("requireSerializable"),
    ],
};

const JDK: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.marshaller.jdk.JdkMarshaller",
    fields: &[],
};

/// Serialization marshaller kinds selectable in the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarshallerKind {
    #[serde(rename = "OptimizedMarshaller")]
    Optimized,
    #[serde(rename = "JdkMarshaller")]
    Jdk,
}

impl MarshallerKind {
    /// The symbolic name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimized => "OptimizedMarshaller",
            Self::Jdk => "JdkMarshaller",
        }
    }

    /// The marshaller class and its field schema.
    pub fn descriptor(&self) -> &'static ClassDescriptor {
        match self {
            Self::Optimized => &OPTIMIZED,
            Self::Jdk => &JDK,
        }
    }
}

impl FromStr for MarshallerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "OptimizedMarshaller" => Ok(Self::Optimized),
            "JdkMarshaller" => Ok(Self::Jdk),
            _ => Err(Error::UnknownMarshaller(s.to_string())),
        }
    }
}
