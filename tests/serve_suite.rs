#[allow(dead_code)]
#[path = "../src/bin/serve.rs"]
mod serve;

use clap::Parser;
use std::path::PathBuf;

#[test]
fn parse_args_defaults_are_stable() {
    let args = serve::Args::try_parse_from(["serve"]).expect("parse should succeed");

    assert_eq!(args.root, PathBuf::from("."));
    assert_eq!(args.port, 3000);
}

#[test]
fn parse_args_overrides_work() {
    let args = serve::Args::try_parse_from(["serve", "--root", "web", "--port", "8080"])
        .expect("parse should succeed");

    assert_eq!(args.root, PathBuf::from("web"));
    assert_eq!(args.port, 8080);
}

#[test]
fn parse_rejects_out_of_range_ports() {
    assert!(serve::Args::try_parse_from(["serve", "--port", "70000"]).is_err());
}
