//! End-to-end generation of cache configuration source.

use chrono::{NaiveDate, NaiveDateTime};
use gridconf_codegen::{JavaBuilder, JavaFile};
use gridconf_schema::{DatabaseKind, EvictionPolicyKind, StoreFactoryKind};

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 3, 9)
        .unwrap()
        .and_hms_opt(8, 5, 0)
        .unwrap()
}

#[test]
fn generates_cache_configuration_source() {
    let mut b = JavaBuilder::new();

    let cache_cfg = b.register_import("org.apache.ignite.configuration.CacheConfiguration");
    let policy_cls = b.register_import(EvictionPolicyKind::Lru.descriptor().class_name);
    assert_eq!(policy_cls, "LruEvictionPolicy");

    b.start_block("public class CacheConfigurationFactory {");
    b.start_block(&format!("public static {} create() {{", cache_cfg));
    b.line(&format!("{} cfg = new {}();", cache_cfg, cache_cfg));

    b.need_empty_line = true;
    assert!(b.empty_line_if_needed());

    b.line(&format!("{} policy = new {}();", policy_cls, policy_cls))
        .line("policy.setMaxSize(10000);")
        .line("cfg.setEvictionPolicy(policy);")
        .blank()
        .line("return cfg;");
    b.end_block("}");
    b.end_block("}");

    assert_eq!(b.depth(), 0);

    let source = JavaFile::new()
        .provenance(&generated_at())
        .package("org.example.config")
        .with_builder(b)
        .render();

    let expected = "\
/**
 * This configuration was generated by the grid configuration console (03/09/2015 08:05)
 */

package org.example.config;

import org.apache.ignite.cache.eviction.lru.LruEvictionPolicy;
import org.apache.ignite.configuration.CacheConfiguration;

public class CacheConfigurationFactory {
    public static CacheConfiguration create() {
        CacheConfiguration cfg = new CacheConfiguration();

        LruEvictionPolicy policy = new LruEvictionPolicy();
        policy.setMaxSize(10000);
        cfg.setEvictionPolicy(policy);

        return cfg;
    }
}
";
    assert_eq!(source, expected);
}

#[test]
fn generates_store_factory_with_dialect() {
    let mut b = JavaBuilder::new();

    let descriptor = StoreFactoryKind::JdbcPojo.descriptor();
    let factory = b.register_import(descriptor.class_name);
    let dialect = b.register_import(DatabaseKind::PostgreSql.jdbc_dialect_class());

    let bean_setter = descriptor.field("dataSourceBean").unwrap().setter_name();

    b.line(&format!("{} storeFactory = new {}();", factory, factory))
        .line(&format!("storeFactory.{}(\"dsPostgres\");", bean_setter))
        .line(&format!("storeFactory.setDialect(new {}());", dialect));

    assert_eq!(
        b.render_imports(),
        "import org.apache.ignite.cache.store.jdbc.CacheJdbcPojoStoreFactory;\n\
         import org.apache.ignite.cache.store.jdbc.dialect.BasicJdbcDialect;"
    );
    assert_eq!(
        b.build(),
        "CacheJdbcPojoStoreFactory storeFactory = new CacheJdbcPojoStoreFactory();\n\
         storeFactory.setDataSourceBean(\"dsPostgres\");\n\
         storeFactory.setDialect(new BasicJdbcDialect());\n"
    );
}

#[test]
fn colliding_short_names_use_full_name_at_call_site() {
    let mut b = JavaBuilder::new();

    let first = b.register_import("org.example.store.Factory");
    let second = b.register_import("org.other.pool.Factory");

    b.line(&format!("{} a = new {}();", first, first));
    b.line(&format!("{} b = new {}();", second, second));

    // Only the winner of the short name appears in the import block.
    assert_eq!(b.render_imports(), "import org.example.store.Factory;");
    assert_eq!(
        b.build(),
        "Factory a = new Factory();\n\
         org.other.pool.Factory b = new org.other.pool.Factory();\n"
    );
}
