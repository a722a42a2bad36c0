//! Behavioural checks on the public link API: generated links classify back
//! to their inputs and every input gets a definite outcome.

use stamp_core::{
    encode_checkin_link, encode_referral_link, validate, validate_str, ParsedUri,
    UriValidatorError, UriValidatorResult,
};

const ODD_INPUTS: &[&str] = &[
    "",
    " ",
    "://",
    "stamp://",
    "stamp:///",
    "stamp://checkin",
    "stamp://checkin/",
    "stamp://checkin//",
    "stamp://checkin/%FF%FE",
    "stamp://referral?info=",
    "stamp://referral?info=%E2%82",
    "stamp://referral?=&&=",
    "https://app.stamp.example",
    "https://app.stamp.example/",
    "https://app.stamp.example/checkin/a/b/c",
    "mailto:someone@example.com",
    "javascript:alert(1)",
    "stamp://somethingelse/checkin/eyJ9",
];

#[test]
fn every_input_gets_a_tagged_outcome() {
    for raw in ODD_INPUTS {
        match validate_str(raw) {
            Ok(result) => panic!("unexpected success for {raw:?}: {result:?}"),
            Err(err) => {
                assert_eq!(err.tag(), UriValidatorError::TAG, "input {raw:?}");
                assert!(!err.message().is_empty(), "input {raw:?}");
            }
        }
    }
}

#[test]
fn trailing_slash_does_not_change_outcome() {
    let links = [
        encode_checkin_link("stamp://", "L2", "C2").unwrap(),
        "stamp://checkin".to_string(),
        "stamp://referral".to_string(),
        "stamp://somethingelse".to_string(),
    ];
    for link in links {
        let uri = ParsedUri::parse(&link);
        let mut slashed = uri.clone();
        slashed.path = uri.path.as_ref().map(|p| format!("{p}/"));
        assert_eq!(validate(&uri), validate(&slashed), "link: {link}");
    }
}

#[test]
fn referral_round_trip_through_universal_link() {
    let link = encode_referral_link("https://app.stamp.example", "loc-9", "ANNA-2024").unwrap();
    let result = validate_str(&link).unwrap();
    assert_eq!(
        result,
        UriValidatorResult::Referral {
            location_id: "loc-9".to_string(),
            referral_code: "ANNA-2024".to_string(),
        }
    );
    assert_eq!(result.location_id(), "loc-9");
}

#[test]
fn outcome_json_for_display() {
    let err = validate_str("stamp://nope").unwrap_err();
    assert_eq!(
        err.to_json(),
        serde_json::json!({
            "error": {"type": "uri-validation-error", "message": "Unsupported link [uriValidator]"}
        })
    );
}
