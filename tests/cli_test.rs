use clap::Parser;
use quickstart::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("quickstart")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["--group-id", "com.example", "--artifact-id", "demo"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.group_id, "com.example");
    assert_eq!(parsed.artifact_id, "demo");
    assert_eq!(parsed.version, "1.0-SNAPSHOT");
    assert_eq!(parsed.main_class, "App");
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--group-id=org.acme",
        "--artifact-id=tool",
        "--version=2.1",
        "--main-class=Main",
        "--output-dir=./out",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.group_id, "org.acme");
    assert_eq!(parsed.artifact_id, "tool");
    assert_eq!(parsed.version, "2.1");
    assert_eq!(parsed.main_class, "Main");
    assert_eq!(parsed.output_dir, PathBuf::from("./out"));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-g", "org.acme", "-a", "tool", "-v", "0.1", "-m", "Cli", "-o", "out"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.group_id, "org.acme");
    assert_eq!(parsed.artifact_id, "tool");
    assert_eq!(parsed.version, "0.1");
    assert_eq!(parsed.main_class, "Cli");
    assert_eq!(parsed.output_dir, PathBuf::from("out"));
}

#[test]
fn test_missing_args() {
    let args = make_args(&["--group-id", "com.example"]);
    let err = Args::try_parse_from(args).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_unexpected_positional() {
    let args = make_args(&["-g", "com.example", "-a", "demo", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
