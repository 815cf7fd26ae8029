use colored::Colorize;

use crate::auth;
use crate::auth::providers::Provider;
use crate::commands::runtime;
use crate::config::Config;
use crate::error::{PilotError, Result};
use crate::llm::registry::default_model;
use crate::llm::OpenRouterClient;

pub fn cmd_auth_login(key: Option<String>) -> Result<()> {
    use dialoguer::Password;

    let provider = Provider::OpenRouter;
    let key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt(format!("Enter {} API key", provider.display_name()))
            .interact()
            .map_err(|e| PilotError::Auth(format!("Input cancelled: {}", e)))?,
    };

    if key.trim().is_empty() {
        return Err(PilotError::Auth("API key cannot be empty".into()));
    }
    if !auth::is_usable_key(&key) {
        return Err(PilotError::Auth(format!(
            "'{}' is a placeholder, not a key. Get one from {}",
            key.trim(),
            provider.key_url()
        )));
    }

    let mut store = auth::AuthStore::load()?;
    store.set(provider, auth::ProviderCredential::api_key(key.trim()));
    store.save()?;

    println!(
        "{} Logged in to {}.",
        "Done!".green().bold(),
        provider.display_name()
    );
    Ok(())
}

pub fn cmd_auth_logout() -> Result<()> {
    let provider = Provider::OpenRouter;
    let mut store = auth::AuthStore::load()?;
    if store.remove(provider) {
        store.save()?;
        println!(
            "{} Removed credentials for {}.",
            "Done!".green().bold(),
            provider.display_name()
        );
    } else {
        println!(
            "{} No stored credentials for {}.",
            "Note:".cyan(),
            provider.display_name()
        );
    }
    Ok(())
}

pub fn cmd_auth_list() -> Result<()> {
    let store = auth::AuthStore::load()?;

    println!("{}", "Configured Providers".green().bold());
    println!("{}", "=".repeat(50));

    for &provider in Provider::all() {
        let env_set = std::env::var(provider.env_var_name())
            .map(|k| auth::is_usable_key(&k))
            .unwrap_or(false);
        let stored = store.get(provider).is_some();

        let status = if env_set {
            "env var".green().to_string()
        } else if stored {
            "auth.json".cyan().to_string()
        } else {
            "not configured".dimmed().to_string()
        };

        println!("  {}\t{}", provider.display_name().cyan().bold(), status);
    }
    Ok(())
}

pub fn cmd_auth_status() -> Result<()> {
    let provider = Provider::OpenRouter;
    match auth::resolve_api_key(provider)? {
        Some(resolved) => {
            println!("{}", "Active API Key".green().bold());
            println!("{}", "=".repeat(40));
            println!("  Provider:  {}", provider.display_name().cyan());
            println!("  API Key:   {}", auth::mask_key(&resolved.key));
            match resolved.source {
                auth::KeySource::Env => {
                    println!("  Source:    {} (env var)", provider.env_var_name())
                }
                auth::KeySource::AuthFile => println!("  Source:    auth.json"),
            }
        }
        None => {
            println!(
                "{} No {} API key configured.",
                "Note:".yellow(),
                provider.display_name()
            );
            println!(
                "  1. Set {} in your environment or `.env` file",
                provider.env_var_name()
            );
            println!("  2. Or run 'promptpilot auth login'");
            println!("  Get a free key from {}", provider.key_url());
        }
    }
    Ok(())
}

pub fn cmd_auth_test(config: &Config, model: Option<String>) -> Result<()> {
    let model = model.unwrap_or_else(|| default_model().to_string());
    let resolved = config.resolve_model(&model)?;
    let client = OpenRouterClient::new(&resolved, config.timeout);

    tracing::info!("validating OpenRouter API key...");
    let start = std::time::Instant::now();
    runtime()?.block_on(client.validate())?;

    println!(
        "{} API key accepted by {} ({} ms)",
        "✓".green(),
        client.model().cyan(),
        start.elapsed().as_millis()
    );
    Ok(())
}
