//! Tests for command-line argument parsing.

use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;
use mail_posture::Config;

#[test]
fn parses_comma_separated_domains() {
    let config = Config::try_parse_from(["mail_posture", "--domains", "a.com,b.com,c.com"])
        .expect("comma-separated domains should parse");
    assert_eq!(config.domains, vec!["a.com", "b.com", "c.com"]);
}

#[test]
fn parses_repeated_domain_flags() {
    let config = Config::try_parse_from([
        "mail_posture",
        "--domains",
        "a.com",
        "--domains",
        "b.com",
    ])
    .expect("repeated --domains should parse");
    assert_eq!(config.domains, vec!["a.com", "b.com"]);
}

#[test]
fn dns_server_defaults_to_google() {
    let config = Config::try_parse_from(["mail_posture", "--domains", "a.com"]).unwrap();
    assert_eq!(config.dns_server, IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)));
}

#[test]
fn dns_server_override() {
    let config = Config::try_parse_from([
        "mail_posture",
        "--domains",
        "a.com",
        "--dns-server",
        "1.1.1.1",
    ])
    .unwrap();
    assert_eq!(config.dns_server, IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)));
}

#[test]
fn domains_are_required() {
    assert!(Config::try_parse_from(["mail_posture"]).is_err());
}

#[test]
fn rejects_invalid_dns_server() {
    let result = Config::try_parse_from([
        "mail_posture",
        "--domains",
        "a.com",
        "--dns-server",
        "not-an-ip",
    ]);
    assert!(result.is_err());
}

#[test]
fn output_flags_default_off() {
    let config = Config::try_parse_from(["mail_posture", "--domains", "a.com"]).unwrap();
    assert!(!config.csv);
    assert!(!config.html);
    assert!(!config.details);
    assert!(!config.recommend);
}

#[test]
fn report_location_and_file_overrides() {
    let config = Config::try_parse_from([
        "mail_posture",
        "--domains",
        "a.com",
        "--csv",
        "--report-location",
        "/tmp/reports",
        "--file",
        "posture.csv",
    ])
    .unwrap();
    assert!(config.csv);
    assert_eq!(
        config.report_location.as_deref(),
        Some(std::path::Path::new("/tmp/reports"))
    );
    assert_eq!(config.file.as_deref(), Some("posture.csv"));
}
