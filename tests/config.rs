use std::net::SocketAddr;

use timekeeper::config::ServerConfig;
use timekeeper::error::ConfigError;

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = ServerConfig::from_json("{}").unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(
        config.socket_addr().unwrap(),
        "127.0.0.1:50052".parse::<SocketAddr>().unwrap()
    );
}

#[test]
fn reads_overrides() {
    let config =
        ServerConfig::from_json(r#"{ "listen_addr": "0.0.0.0:6000", "max_timers": 3 }"#).unwrap();
    assert_eq!(config.max_timers, 3);
    assert_eq!(config.socket_addr().unwrap().port(), 6000);
}

#[test]
fn reports_bad_input() {
    assert!(matches!(
        ServerConfig::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));

    let config = ServerConfig::from_json(r#"{ "listen_addr": "nowhere" }"#).unwrap();
    assert!(matches!(config.socket_addr(), Err(ConfigError::ListenAddr(_))));

    let missing = std::path::Path::new("/nonexistent/timekeeper.json");
    assert!(matches!(
        ServerConfig::from_path(missing),
        Err(ConfigError::Read { .. })
    ));
}
