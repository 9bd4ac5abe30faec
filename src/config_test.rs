use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(cfg.public_dir, PathBuf::from(DEFAULT_PUBLIC_DIR));
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_applied() {
    let cfg = Config::from_lookup(lookup(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("DATABASE_URL", "postgres://localhost/aios"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("PUBLIC_DIR", "/srv/aios/public"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/aios"));
    assert_eq!(cfg.db_max_connections, 12);
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/aios/public"));
}

#[test]
fn blank_database_url_disables_database() {
    let cfg = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
    assert!(cfg.database_url.is_none());
}

#[test]
fn invalid_port_is_an_error() {
    let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert_eq!(err.to_string(), r#"invalid PORT: "eighty""#);
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(Config::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_pool_size_and_host_are_errors() {
    assert!(matches!(
        Config::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "-1")])),
        Err(ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. })
    ));
    assert!(matches!(
        Config::from_lookup(lookup(&[("HOST", "localhost")])),
        Err(ConfigError::Invalid { var: "HOST", .. })
    ));
}
