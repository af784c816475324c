use hs_core::entities::TeamMember;

/// Parse a `--member` value written as `Name <email>`.
///
/// Only the shape is checked here; the registration form validates the name
/// and email themselves.
pub fn parse_member(raw: &str) -> Result<TeamMember, String> {
    let raw = raw.trim();
    let (name, rest) = raw
        .split_once('<')
        .ok_or_else(|| format!("expected \"Name <email>\", got '{raw}'"))?;
    let email = rest
        .strip_suffix('>')
        .ok_or_else(|| format!("missing closing '>' in '{raw}'"))?;
    Ok(TeamMember::new(name.trim(), email.trim()))
}
