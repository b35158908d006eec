//! Cache store metadata: JDBC dialects, pooled data sources, and store
//! factories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ClassDescriptor, Error, FieldDescriptor, Result};

/// Databases supported as cache store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseKind {
    Oracle,
    #[serde(rename = "DB2")]
    Db2,
    #[serde(rename = "SQLServer")]
    SqlServer,
    #[serde(rename = "MySQL")]
    MySql,
    #[serde(rename = "PostgreSQL")]
    PostgreSql,
    H2,
}

impl DatabaseKind {
    /// The symbolic name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oracle => "Oracle",
            Self::Db2 => "DB2",
            Self::SqlServer => "SQLServer",
            Self::MySql => "MySQL",
            Self::PostgreSql => "PostgreSQL",
            Self::H2 => "H2",
        }
    }

    /// Fully-qualified JDBC dialect class for this database.
    ///
    /// PostgreSQL has no dedicated dialect and falls back to the basic one.
    pub fn jdbc_dialect_class(&self) -> &'static str {
        match self {
            Self::Oracle => "org.apache.ignite.cache.store.jdbc.dialect.OracleDialect",
            Self::Db2 => "org.apache.ignite.cache.store.jdbc.dialect.DB2Dialect",
            Self::SqlServer => "org.apache.ignite.cache.store.jdbc.dialect.SQLServerDialect",
            Self::MySql => "org.apache.ignite.cache.store.jdbc.dialect.MySQLDialect",
            Self::PostgreSql => "org.apache.ignite.cache.store.jdbc.dialect.BasicJdbcDialect",
            Self::H2 => "org.apache.ignite.cache.store.jdbc.dialect.H2Dialect",
        }
    }

    /// Fully-qualified pooled data source class for this database.
    pub fn data_source_class(&self) -> &'static str {
        match self {
            Self::Oracle => "oracle.jdbc.pool.OracleDataSource",
            Self::Db2 => "com.ibm.db2.jcc.DB2ConnectionPoolDataSource",
            Self::SqlServer => "com.microsoft.sqlserver.jdbc.SQLServerDataSource",
            Self::MySql => "com.mysql.jdbc.jdbc2.optional.MysqlDataSource",
            Self::PostgreSql => "org.postgresql.ds.PGPoolingDataSource",
            Self::H2 => "org.h2.jdbcx.JdbcDataSource",
        }
    }
}

impl FromStr for DatabaseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Oracle" => Ok(Self::Oracle),
            "DB2" => Ok(Self::Db2),
            "SQLServer" => Ok(Self::SqlServer),
            "MySQL" => Ok(Self::MySql),
            "PostgreSQL" => Ok(Self::PostgreSql),
            "H2" => Ok(Self::H2),
            _ => Err(Error::UnknownDatabase(s.to_string())),
        }
    }
}

const JDBC_POJO: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.cache.store.jdbc.CacheJdbcPojoStoreFactory",
    fields: &[
        FieldDescriptor::auto("dataSourceBean"),
        FieldDescriptor::jdbc_dialect("dialect"),
    ],
};

const JDBC_BLOB: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.cache.store.jdbc.CacheJdbcBlobStoreFactory",
    fields: &[
        FieldDescriptor::auto("user"),
        FieldDescriptor::auto("dataSourceBean"),
        FieldDescriptor::auto("initSchema"),
        FieldDescriptor::auto("createTableQuery"),
        FieldDescriptor::auto("loadQuery"),
        FieldDescriptor::auto("insertQuery"),
        FieldDescriptor::auto("updateQuery"),
        FieldDescriptor::auto("deleteQuery"),
    ],
};

const HIBERNATE_BLOB: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.cache.store.hibernate.CacheHibernateBlobStoreFactory",
    fields: &[FieldDescriptor::properties_as_list(
        "hibernateProperties",
        "props",
    )],
};

/// Cache store factory kinds selectable in the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreFactoryKind {
    #[serde(rename = "CacheJdbcPojoStoreFactory")]
    JdbcPojo,
    #[serde(rename = "CacheJdbcBlobStoreFactory")]
    JdbcBlob,
    #[serde(rename = "CacheHibernateBlobStoreFactory")]
    HibernateBlob,
}

impl StoreFactoryKind {
    /// The symbolic name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JdbcPojo => "CacheJdbcPojoStoreFactory",
            Self::JdbcBlob => "CacheJdbcBlobStoreFactory",
            Self::HibernateBlob => "CacheHibernateBlobStoreFactory",
        }
    }

    /// The store factory class and its field schema.
    pub fn descriptor(&self) -> &'static ClassDescriptor {
        match self {
            Self::JdbcPojo => &JDBC_POJO,
            Self::JdbcBlob => &JDBC_BLOB,
            Self::HibernateBlob => &HIBERNATE_BLOB,
        }
    }
}

impl FromStr for StoreFactoryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CacheJdbcPojoStoreFactory" => Ok(Self::JdbcPojo),
            "CacheJdbcBlobStoreFactory" => Ok(Self::JdbcBlob),
            "CacheHibernateBlobStoreFactory" => Ok(Self::HibernateBlob),
            _ => Err(Error::UnknownStoreFactory(s.to_string())),
        }
    }
}
