use hs_core::entities::{ArtifactFile, SubmissionReceipt, Team, User};
use hs_core::enums::{PortalVariant, Route, SessionPhase};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `hacksphere schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.type_name), flags.format)
}

fn schema(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::User => schema_for!(User),
        SchemaType::Team => schema_for!(Team),
        SchemaType::Artifact => schema_for!(ArtifactFile),
        SchemaType::Receipt => schema_for!(SubmissionReceipt),
        SchemaType::Route => schema_for!(Route),
        SchemaType::Phase => schema_for!(SessionPhase),
        SchemaType::Variant => schema_for!(PortalVariant),
    }
}

#[cfg(test)]
mod tests {
    use super::{SchemaType, schema};

    #[test]
    fn team_schema_lists_members() {
        let value = serde_json::to_value(schema(SchemaType::Team)).unwrap();
        assert_eq!(value["title"], "Team");
        assert!(value["properties"]["members"].is_object());
    }

    #[test]
    fn variant_schema_enumerates_values() {
        let value = serde_json::to_value(schema(SchemaType::Variant)).unwrap();
        let text = value.to_string();
        assert!(text.contains("classic"));
        assert!(text.contains("extended"));
    }
}
