//! Cluster-level singleton configuration descriptors.

use crate::{ClassDescriptor, FieldDescriptor};

/// Atomic data structures configuration.
pub const ATOMIC_CONFIGURATION: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.configuration.AtomicConfiguration",
    fields: &[
        FieldDescriptor::auto("backups"),
        FieldDescriptor::enumeration("cacheMode", "org.apache.ignite.cache.CacheMode"),
        FieldDescriptor::auto("atomicSequenceReserveSize"),
    ],
};

/// File-based swap space SPI configuration.
pub const SWAP_SPACE_SPI: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.spi.swapspace.file.FileSwapSpaceSpi",
    fields: &[
        FieldDescriptor::auto("baseDirectory"),
        FieldDescriptor::auto("readStripesNumber"),
        FieldDescriptor::float("maximumSparsity"),
        FieldDescriptor::auto("maxWriteQueueSize"),
        FieldDescriptor::auto("writeBufferSize"),
    ],
};

/// Transactions configuration.
pub const TRANSACTION_CONFIGURATION: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.configuration.TransactionConfiguration",
    fields: &[
        FieldDescriptor::enumeration(
            "defaultTxConcurrency",
            "org.apache.ignite.transactions.TransactionConcurrency",
        ),
        FieldDescriptor::enumeration(
            "transactionIsolation",
            "org.apache.ignite.transactions.TransactionIsolation",
        )
        .with_setter("defaultTxIsolation"),
        FieldDescriptor::auto("defaultTxTimeout"),
        FieldDescriptor::auto("pessimisticTxLogLinger"),
        FieldDescriptor::auto("pessimisticTxLogSize"),
        FieldDescriptor::auto("txSerializableEnabled"),
    ],
};

#[cfg(test)]
mod tests {
    use crate::FieldKind;

    use super::*;

    #[test]
    fn test_atomic_configuration() {
        assert_eq!(
            ATOMIC_CONFIGURATION.class_name,
            "org.apache.ignite.configuration.AtomicConfiguration"
        );

        let cache_mode = ATOMIC_CONFIGURATION.field("cacheMode").unwrap();
        assert_eq!(
            cache_mode.kind,
            FieldKind::Enum {
                class: "org.apache.ignite.cache.CacheMode"
            }
        );
    }

    #[test]
    fn test_swap_space_sparsity_is_float() {
        let sparsity = SWAP_SPACE_SPI.field("maximumSparsity").unwrap();

        assert_eq!(sparsity.kind, FieldKind::Float);
    }

    #[test]
    fn test_transaction_isolation_setter_override() {
        let isolation = TRANSACTION_CONFIGURATION.field("transactionIsolation").unwrap();

        assert_eq!(isolation.setter, Some("defaultTxIsolation"));
        assert_eq!(isolation.setter_name(), "setDefaultTxIsolation");
    }
}
