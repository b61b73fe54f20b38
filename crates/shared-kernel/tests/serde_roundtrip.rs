// crates/shared-kernel/tests/serde_roundtrip.rs
use react_native_version_kernel::{Prerelease, VersionDescriptor};

#[test]
fn json_roundtrip() {
    let original = VersionDescriptor::new(0, 57, 0, Some(Prerelease::from_static("rc.0")));
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"major":0,"minor":57,"patch":0,"prerelease":"rc.0"}"#);
    let decoded: VersionDescriptor = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn missing_or_null_prerelease_is_a_final_release() {
    let missing: VersionDescriptor =
        serde_json::from_str(r#"{"major":1,"minor":0,"patch":0}"#).expect("deserializes");
    let null: VersionDescriptor =
        serde_json::from_str(r#"{"major":1,"minor":0,"patch":0,"prerelease":null}"#).expect("deserializes");
    assert_eq!(missing, VersionDescriptor::release(1, 0, 0));
    assert_eq!(null, missing);
}

#[test]
fn empty_prerelease_is_rejected() {
    let err = serde_json::from_str::<VersionDescriptor>(r#"{"major":0,"minor":57,"patch":0,"prerelease":""}"#)
        .unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_str::<VersionDescriptor>(r#"{"major":0,"minor":57,"patch":0,"build":"abc"}"#);
    assert!(result.is_err());
}

#[test]
fn negative_numbers_are_rejected() {
    let result = serde_json::from_str::<VersionDescriptor>(r#"{"major":-1,"minor":0,"patch":0}"#);
    assert!(result.is_err());
}
