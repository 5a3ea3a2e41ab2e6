use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_bind_all_interfaces_on_3000() {
    let config = PreviewConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
}

#[test]
fn port_and_bind_addr_override_defaults() {
    let config = PreviewConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let config = PreviewConfig::from_lookup(lookup_from(&[("BIND_ADDR", "::1")])).unwrap();
    assert!(config.addr.is_ipv6());
    assert_eq!(config.addr.port(), 3000);
}

#[test]
fn invalid_port_is_an_error() {
    let err = PreviewConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn out_of_range_port_is_an_error() {
    let err = PreviewConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn invalid_bind_addr_is_an_error() {
    let err = PreviewConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
}
