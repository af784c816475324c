use anyhow::Context;
use hs_config::HsConfig;
use hs_portal::{Portal, RegisterForm};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RegisterArgs;
use crate::commands::shared::session::Landing;
use crate::output::output;
use crate::progress::track;

/// Handle `hacksphere register`.
pub async fn handle(
    args: &RegisterArgs,
    config: HsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = build_form(args)?;
    let mut portal = Portal::from_config(config)?;
    portal.navigate("/register");

    tracing::debug!(
        url = portal.config().api.team_create_url(),
        group = form.is_group(),
        "submitting registration"
    );
    let navigation = track("Registering team...", portal.register(&mut form)).await?;
    output(&Landing::capture(&portal, navigation)?, flags.format)
}

/// Fill the registration form from the command line. Group mode is on when
/// any member is given, sized to the members plus the leader.
fn build_form(args: &RegisterArgs) -> anyhow::Result<RegisterForm> {
    let mut form = RegisterForm::new();
    form.team_name.clone_from(&args.team_name);
    form.name.clone_from(&args.name);
    form.email.clone_from(&args.email);
    form.password.clone_from(&args.password);
    form.topic_id.clone_from(&args.topic_id);

    if !args.members.is_empty() {
        let size = u8::try_from(args.members.len() + 1)
            .ok()
            .context("a team has at most 3 members besides the leader")?;
        form.set_group_size(size)
            .context("a team has at most 3 members besides the leader")?;
        form.set_group(true);
        for (index, member) in args.members.iter().enumerate() {
            form.set_member(index, member.name.clone(), member.email.clone())?;
        }
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use hs_core::entities::TeamMember;
    use pretty_assertions::assert_eq;

    use super::build_form;
    use crate::cli::root_commands::RegisterArgs;

    fn args(members: Vec<TeamMember>) -> RegisterArgs {
        RegisterArgs {
            team_name: "Ferrous".into(),
            name: "Ferris".into(),
            email: "ferris@example.com".into(),
            password: "crab-rave".into(),
            topic_id: None,
            members,
        }
    }

    #[test]
    fn no_members_is_solo() {
        let form = build_form(&args(Vec::new())).unwrap();
        assert!(!form.is_group());
        assert!(form.members().is_empty());
    }

    #[test]
    fn members_set_group_size() {
        let members = vec![
            TeamMember::new("Corro", "corro@example.com"),
            TeamMember::new("Bors", "bors@example.com"),
        ];
        let form = build_form(&args(members.clone())).unwrap();
        assert!(form.is_group());
        assert_eq!(form.group_size(), 3);
        assert_eq!(form.members(), members.as_slice());
    }

    #[test]
    fn four_members_is_too_many() {
        let members = (0..4)
            .map(|i| TeamMember::new(format!("m{i}"), format!("m{i}@example.com")))
            .collect();
        let err = build_form(&args(members)).unwrap_err();
        assert!(err.to_string().contains("at most 3 members"));
    }
}
