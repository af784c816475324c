use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use hs_core::entities::TeamMember;

use crate::commands::shared::parse::parse_member;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in and show the page the session lands on.
    Login(LoginArgs),
    /// Register a team (solo, or a group when members are given).
    Register(RegisterArgs),
    /// Show the terms and conditions, or accept them.
    Terms(TermsArgs),
    /// Sign in and show the dashboard.
    Dashboard(DashboardArgs),
    /// Sign in, upload artifacts, and submit a project.
    Submit(SubmitArgs),
    /// Show how the navigation guard resolves a path.
    Route(RouteArgs),
    /// Print the JSON Schema of a portal record.
    Schema(SchemaArgs),
}

/// Email and password for the login page.
#[derive(Clone, Debug, Args)]
pub struct Credentials {
    /// Participant email
    #[arg(long)]
    pub email: String,
    /// Participant password
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[command(flatten)]
    pub credentials: Credentials,
}

#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    /// Team name
    #[arg(long)]
    pub team_name: String,
    /// Team leader name
    #[arg(long)]
    pub name: String,
    /// Team leader email
    #[arg(long)]
    pub email: String,
    /// Team password
    #[arg(long)]
    pub password: String,
    /// Topic to register under (defaults to `api.default_topic_id`)
    #[arg(long)]
    pub topic_id: Option<String>,
    /// Additional member as "Name <email>"; repeat for up to three members
    #[arg(long = "member", value_name = "NAME <EMAIL>", value_parser = parse_member)]
    pub members: Vec<TeamMember>,
}

#[derive(Clone, Debug, Args)]
pub struct TermsArgs {
    /// Sign in and accept the terms
    #[arg(long, requires_all = ["email", "password"])]
    pub accept: bool,
    /// Participant email (with --accept)
    #[arg(long)]
    pub email: Option<String>,
    /// Participant password (with --accept)
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub credentials: Credentials,
    /// Accept the terms on the way in (extended portal)
    #[arg(long)]
    pub accept_terms: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub credentials: Credentials,
    /// Accept the terms on the way in (extended portal)
    #[arg(long)]
    pub accept_terms: bool,
    /// GitHub repository URL
    #[arg(long)]
    pub github: String,
    /// Project archive to upload
    #[arg(long)]
    pub project_file: PathBuf,
    /// Demo video to upload
    #[arg(long)]
    pub video: Option<PathBuf>,
    /// CSV dataset to upload (extended portal)
    #[arg(long)]
    pub dataset: Option<PathBuf>,
    /// Free-text note for the judges (extended portal)
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RouteArgs {
    /// Requested path, e.g. /dashboard
    pub path: String,
    /// Evaluate for a signed-in session
    #[arg(long)]
    pub authenticated: bool,
    /// Evaluate as if the terms were accepted
    #[arg(long, requires = "authenticated")]
    pub terms_accepted: bool,
}

/// Records with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    User,
    Team,
    Artifact,
    Receipt,
    Route,
    Phase,
    Variant,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record to describe
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
