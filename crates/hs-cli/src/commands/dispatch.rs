use crate::bootstrap::load_config;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Commands::Schema(args) = &command {
        return commands::schema::handle(args, flags);
    }

    let config = load_config(flags)?;
    match command {
        Commands::Login(args) => commands::login::handle(&args, config, flags).await,
        Commands::Register(args) => commands::register::handle(&args, config, flags).await,
        Commands::Terms(args) => commands::terms::handle(&args, config, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, config, flags).await,
        Commands::Submit(args) => commands::submit::handle(&args, config, flags).await,
        Commands::Route(args) => commands::route::handle(&args, &config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
