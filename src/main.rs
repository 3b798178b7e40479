use poise::serenity_prelude as serenity;
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::BotConfig;
use crate::data::roster::RecordStore;

pub struct CommandStatus {
    pub name: String,
    pub status: String,
}

pub struct Data {
    pub started_at: Instant,
    pub commands_check_duration: Duration,
    pub command_statuses: Vec<CommandStatus>,
    pub store: RecordStore,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;

mod handlers;
pub mod commands;
pub mod config;
pub mod data;
pub mod keepalive;
pub mod scoring;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grx_manager=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "GRx Manager stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let program_started = Instant::now();
    let config = BotConfig::from_env()?;

    keepalive::spawn(config.keepalive_addr);

    let store = RecordStore::from_files(&config.players_path, &config.matches_path);
    info!(
        players = %config.players_path.display(),
        matches = %config.matches_path.display(),
        "Using file record store"
    );

    let intents = serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(handlers::error_handler::on_error(error)),
            pre_command: |ctx| {
                Box::pin(async move {
                    info!(command = %ctx.command().qualified_name, user = %ctx.author().name, "Received command");
                })
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(async move {
                    handlers::event_handler::handle_event(ctx, event, framework, data).await
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                let mut statuses: Vec<CommandStatus> = framework
                    .options()
                    .commands
                    .iter()
                    .map(|c| CommandStatus {
                        name: c.name.to_string(),
                        status: "Loaded".to_string(),
                    })
                    .collect();

                let check_started = Instant::now();
                let reg_result = poise::builtins::register_globally(ctx, &framework.options().commands).await;
                let commands_check_duration = check_started.elapsed();

                let status = match reg_result {
                    Ok(()) => "Registered".to_string(),
                    Err(e) => {
                        error!(error = %e, "Failed to register slash commands");
                        format!("Reg err: {}", e)
                    }
                };
                for s in &mut statuses {
                    s.status = status.clone();
                }

                Ok(Data {
                    started_at: program_started,
                    commands_check_duration,
                    command_statuses: statuses,
                    store,
                })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await?;
    client.start().await?;
    Ok(())
}
