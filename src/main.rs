use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use promptpilot::cli::{AuthCommand, Cli, Commands};
use promptpilot::commands::analyze::cmd_analyze;
use promptpilot::commands::auth::{
    cmd_auth_list, cmd_auth_login, cmd_auth_logout, cmd_auth_status, cmd_auth_test,
};
use promptpilot::commands::catalog::{cmd_examples, cmd_models};
use promptpilot::commands::compare::cmd_compare;
use promptpilot::config::{registry_from_env, Config};
use promptpilot::Result;

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "promptpilot=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    // A missing .env is fine; keys may come from the environment or auth.json
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Analysis is purely local — no Config or API key needed
    if let Commands::Analyze {
        prompt,
        debug,
        json,
    } = cli.command
    {
        return cmd_analyze(prompt, debug, json);
    }

    match &cli.command {
        Commands::Examples => return cmd_examples(),
        Commands::Models => return cmd_models(&registry_from_env()),
        _ => {}
    }

    // Auth commands that only touch auth.json
    if let Commands::Auth { command } = &cli.command {
        match command {
            AuthCommand::Login { key } => return cmd_auth_login(key.clone()),
            AuthCommand::Logout => return cmd_auth_logout(),
            AuthCommand::Status => return cmd_auth_status(),
            AuthCommand::List => return cmd_auth_list(),
            AuthCommand::Test { .. } => {}
        }
    }

    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            prompt,
            model,
            iterations,
            debug,
            save,
            output,
            skip_validation,
        } => cmd_compare(
            &config,
            prompt,
            model,
            iterations,
            debug,
            save,
            output,
            skip_validation,
        ),
        Commands::Auth {
            command: AuthCommand::Test { model },
        } => cmd_auth_test(&config, model),
        Commands::Analyze { .. } | Commands::Examples | Commands::Models | Commands::Auth { .. } => {
            Ok(())
        }
    }
}
