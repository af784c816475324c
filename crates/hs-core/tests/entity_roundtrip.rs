//! Serde roundtrip and JsonSchema validation tests for entity types.

use chrono::Utc;
use hs_core::entities::*;
use hs_core::enums::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User::new("Ada Lovelace", "ada@example.com")
);

roundtrip_and_validate!(
    group_team_roundtrip,
    Team,
    Team::group(
        "Analytical Engines",
        vec![
            TeamMember::new("Charles Babbage", "charles@example.com"),
            TeamMember::new("Mary Somerville", "mary@example.com"),
        ],
    )
    .unwrap()
);

roundtrip_and_validate!(solo_team_roundtrip, Team, Team::solo("Solo Act"));

roundtrip_and_validate!(
    receipt_roundtrip,
    SubmissionReceipt,
    SubmissionReceipt {
        participant: "ada@example.com".into(),
        team_name: Some("Analytical Engines".into()),
        github_link: "https://github.com/ada/engine".into(),
        project_file: ArtifactFile::new("engine.zip", 4_096, "application/zip"),
        demo_video: Some(ArtifactFile::new("demo.mp4", 1_048_576, "video/mp4")),
        dataset: None,
        note: Some("Punch cards included".into()),
        submitted_at: Utc::now(),
        message: "Project submitted successfully!".into(),
    }
);

roundtrip_and_validate!(route_roundtrip, Route, Route::Terms);

roundtrip_and_validate!(phase_roundtrip, SessionPhase, SessionPhase::TermsPending);

#[test]
fn team_schema_rejects_missing_members_field() {
    let schema = serde_json::to_value(schema_for!(Team)).unwrap();
    let instance = serde_json::json!({
        "name": "Half",
        "is_group": true,
        "size": 2
    });
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty());
}
