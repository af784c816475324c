use std::path::Path;

use hs_api::PortalApiClient;
use hs_config::HsConfig;
use hs_core::enums::ArtifactSlot;
use hs_portal::{Portal, SimulatedUploader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::commands::shared::artifact::load_artifact;
use crate::commands::shared::session::{require_dashboard, sign_in, upload_message};
use crate::output::output;
use crate::progress::track;

/// Handle `hacksphere submit`.
pub async fn handle(args: &SubmitArgs, config: HsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut portal = Portal::from_config(config)?;
    let navigation = sign_in(&mut portal, &args.credentials, args.accept_terms).await?;
    require_dashboard(&navigation)?;

    upload(&mut portal, ArtifactSlot::ProjectFile, &args.project_file).await?;
    if let Some(video) = &args.video {
        upload(&mut portal, ArtifactSlot::DemoVideo, video).await?;
    }
    if let Some(dataset) = &args.dataset {
        upload(&mut portal, ArtifactSlot::Dataset, dataset).await?;
    }

    portal.set_github_link(&args.github)?;
    if let Some(note) = &args.note {
        portal.set_note(note)?;
    }

    let receipt = portal.submit_project()?;
    output(&receipt, flags.format)
}

async fn upload(
    portal: &mut Portal<PortalApiClient, SimulatedUploader>,
    slot: ArtifactSlot,
    path: &Path,
) -> anyhow::Result<()> {
    let file = load_artifact(path)?;
    track(upload_message(slot), portal.select_artifact(slot, file)).await?;
    Ok(())
}
