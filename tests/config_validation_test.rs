use summit::config::{AppConfig, DatabaseBackendKind, DatabaseSection, PostgresSection};
use summit::store::StoreConfig;

#[test]
fn postgres_backend_requires_connection_section() {
    let config = AppConfig {
        database: DatabaseSection {
            backend: DatabaseBackendKind::Postgres,
            postgres: None,
            ..Default::default()
        },
        ..Default::default()
    };

    let result = config.store_config();
    assert!(
        result.is_err(),
        "Expected postgres backend without connection settings to fail validation"
    );
}

#[test]
fn postgres_backend_requires_nonempty_host() {
    let config = AppConfig {
        database: DatabaseSection {
            backend: DatabaseBackendKind::Postgres,
            postgres: Some(PostgresSection {
                host: "  ".into(),
                user: "postgres".into(),
                password: "example".into(),
                dbname: "postgres".into(),
                port: None,
            }),
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(config.store_config().is_err());
}

#[test]
fn postgres_url_is_assembled_from_parts() {
    let config = AppConfig {
        database: DatabaseSection {
            backend: DatabaseBackendKind::Postgres,
            postgres: Some(PostgresSection {
                host: "db".into(),
                port: Some(5433),
                user: "postgres".into(),
                password: "example".into(),
                dbname: "peaks".into(),
            }),
            ..Default::default()
        },
        ..Default::default()
    };

    match config.store_config().unwrap() {
        StoreConfig::Postgres { url } => {
            assert_eq!(url, "postgres://postgres:example@db:5433/peaks");
        }
        other => panic!("expected postgres store config, got {other:?}"),
    }
}

#[test]
fn default_backend_is_sqlite() {
    let config = AppConfig::default();

    match config.store_config().unwrap() {
        StoreConfig::Sqlite { path } => assert_eq!(path, "./summit.db"),
        other => panic!("expected sqlite store config, got {other:?}"),
    }
}

#[test]
fn reset_and_seed_defaults_off() {
    let config = AppConfig::default();
    assert!(!config.database.reset_and_seed);
}
