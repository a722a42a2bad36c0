use clap::Parser;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["stamp"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_validate_command() {
    let cli = Cli::try_parse_from(["stamp", "validate", "stamp://checkin/abc"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Validate { ref uri }) if uri == "stamp://checkin/abc"
    ));
}

#[test]
fn validate_requires_uri() {
    assert!(Cli::try_parse_from(["stamp", "validate"]).is_err());
}

#[test]
fn parses_encode_checkin_command() {
    let cli = Cli::try_parse_from([
        "stamp",
        "encode",
        "checkin",
        "--location-id",
        "L2",
        "--campaign",
        "C2",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Encode {
            command: EncodeCommands::Checkin {
                ref location_id,
                ref campaign,
                base: None,
            }
        }) if location_id == "L2" && campaign == "C2"
    ));
}

#[test]
fn parses_encode_referral_with_base() {
    let cli = Cli::try_parse_from([
        "stamp",
        "encode",
        "referral",
        "--location-id",
        "L1",
        "--referral-code",
        "R1",
        "--base",
        "https://app.stamp.example",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Encode {
            command: EncodeCommands::Referral {
                base: Some(ref b),
                ..
            }
        }) if b == "https://app.stamp.example"
    ));
}

#[test]
fn encode_referral_requires_code() {
    let result = Cli::try_parse_from(["stamp", "encode", "referral", "--location-id", "L1"]);
    assert!(result.is_err());
}

#[test]
fn parses_scan_command() {
    let cli = Cli::try_parse_from(["stamp", "scan"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Scan)));
}

#[test]
fn scan_lines_map_to_events() {
    use stamp_dispatch::{AppState, ScanEvent};

    assert_eq!(scan::parse_event("   "), None);
    assert_eq!(
        scan::parse_event("background"),
        Some(ScanEvent::AppState(AppState::Background))
    );
    assert_eq!(
        scan::parse_event("foreground\n"),
        Some(ScanEvent::AppState(AppState::Active))
    );
    assert_eq!(
        scan::parse_event(" stamp://checkin/abc "),
        Some(ScanEvent::Link("stamp://checkin/abc".to_string()))
    );
}

#[test]
fn validate_reports_rejection_as_error() {
    assert!(run_validate("stamp://somethingelse").is_err());
}

async fn scan_output(input: &str) -> (Vec<serde_json::Value>, stamp_dispatch::ScanLock) {
    use std::sync::{Arc, Mutex};

    let out = Arc::new(Mutex::new(Vec::<u8>::new()));
    let lock = scan::scan_events(input.as_bytes(), Arc::clone(&out), std::time::Duration::ZERO)
        .await
        .unwrap();
    let bytes = out.lock().unwrap().clone();
    let lines = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (lines, lock)
}

#[tokio::test]
async fn scan_writes_errors_and_navigations_as_json_lines() {
    let checkin = stamp_core::encode_checkin_link("stamp://", "L2", "C2").unwrap();
    let input = format!("stamp://nope\n\n{checkin}\nstamp://checkin/ignored\n");

    let (lines, lock) = scan_output(&input).await;

    assert_eq!(
        lines,
        vec![
            serde_json::json!({
                "error": {
                    "type": "uri-validation-error",
                    "message": "Unsupported link [uriValidator]",
                }
            }),
            serde_json::json!({
                "screen": "LocationDetail",
                "params": { "locationId": "L2", "campaignShortCode": "C2" },
            }),
        ]
    );
    assert_eq!(lock, stamp_dispatch::ScanLock::Pending);
}

#[tokio::test]
async fn scan_foreground_return_allows_next_link() {
    let referral =
        stamp_core::encode_referral_link("https://app.stamp.example", "L1", "R1").unwrap();
    let checkin = stamp_core::encode_checkin_link("stamp://", "L2", "C2").unwrap();
    let input = format!("{referral}\nbackground\nforeground\n{checkin}\n");

    let (lines, lock) = scan_output(&input).await;

    assert_eq!(
        lines,
        vec![
            serde_json::json!({
                "screen": "LocationDetail",
                "params": { "locationId": "L1", "referralCode": "R1" },
            }),
            serde_json::json!({
                "screen": "LocationDetail",
                "params": { "locationId": "L2", "campaignShortCode": "C2" },
            }),
        ]
    );
    assert_eq!(lock, stamp_dispatch::ScanLock::Pending);
}

#[tokio::test]
async fn scan_of_empty_input_leaves_lock_idle() {
    let (lines, lock) = scan_output("\n  \n").await;
    assert!(lines.is_empty());
    assert_eq!(lock, stamp_dispatch::ScanLock::Idle);
}
