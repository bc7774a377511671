use std::path::PathBuf;

use clap::Parser;
use herodex_server::ServerConfig;
use herodex_upstream::UpstreamMode;

#[test]
fn explicit_flags_are_parsed() {
    let config = ServerConfig::try_parse_from([
        "herodex",
        "--host",
        "127.0.0.1",
        "--port",
        "9000",
        "--database",
        "/tmp/heroes.db",
        "--source",
        "https://example.test/api/all.json",
        "--upstream-timeout",
        "5",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(config.port, 9000);
    assert_eq!(config.database, PathBuf::from("/tmp/heroes.db"));
    assert!(config.verbose);
    assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:9000");

    let upstream = config.upstream();
    assert_eq!(upstream.timeout_secs, 5);
    assert_eq!(
        upstream.mode(),
        UpstreamMode::Dataset {
            url: "https://example.test/api/all.json".to_string()
        }
    );
}

#[test]
fn token_selects_search_mode() {
    let config = ServerConfig::try_parse_from([
        "herodex",
        "--token",
        "tok",
        "--search-base-url",
        "https://search.test",
    ])
    .unwrap();

    assert_eq!(
        config.upstream().mode(),
        UpstreamMode::Search {
            base_url: "https://search.test".to_string(),
            token: "tok".to_string(),
        }
    );
}

#[test]
fn invalid_host_is_an_error() {
    let config = ServerConfig::try_parse_from(["herodex", "--host", "not a host"]).unwrap();
    assert!(config.listen_addr().is_err());
}

#[test]
fn invalid_port_is_rejected() {
    assert!(ServerConfig::try_parse_from(["herodex", "--port", "99999"]).is_err());
}
