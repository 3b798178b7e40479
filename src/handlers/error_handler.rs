use tracing::{error, warn};

/// Argument shape and an example for each command, shown on bad input.
fn usage(command: &str) -> Option<(&'static str, &'static str)> {
    match command {
        "register" => Some(("<IGN> <UID> <Rank> <Role>", "Mortal 5123456789 Conqueror IGL")),
        "profile" => Some(("[@user]", "@Mortal")),
        "update" => Some(("<ign|uid|rank|role> <new value>", "rank Ace Master")),
        "matchlog" => Some(("<kills> <place> [map]", "10 1 Erangel")),
        _ => None,
    }
}

pub fn format_error_message(command: &str, prefix: &str) -> String {
    match usage(command) {
        Some((args, example)) => format!(
            "❌ **Format Error!** You missed some info.\nCorrect usage: `{p}{c} {args}`\nExample: `{p}{c} {example}`",
            p = prefix,
            c = command,
        ),
        None => format!(
            "❌ **Format Error!** You missed some info for `{}{}`.",
            prefix, command
        ),
    }
}

pub fn type_error_message(command: &str, input: &str) -> String {
    match command {
        "matchlog" => "❌ **Type Error!** Please use numbers for Kills and Place.".to_string(),
        _ => format!("❌ **Type Error!** Couldn't understand `{}`.", input),
    }
}

const GENERIC_FAILURE: &str = "⚠️ Something went wrong while running that command. It has been logged.";

pub async fn on_error(error: poise::FrameworkError<'_, crate::Data, crate::Error>) {
    match error {
        poise::FrameworkError::ArgumentParse { error, input, ctx, .. } => {
            let command = ctx.command().name.clone();
            warn!(command = %command, input = ?input, error = %error, "Bad command arguments");
            let msg = match input {
                None => format_error_message(&command, ctx.prefix()),
                Some(input) => type_error_message(&command, &input),
            };
            if let Err(e) = ctx.say(msg).await {
                error!(error = %e, "Failed to send usage hint");
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().name, user = %ctx.author().name, error = %error, "Command failed");
            if let Err(e) = ctx.say(GENERIC_FAILURE).await {
                error!(error = %e, "Failed to send failure notice");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!(error = %e, "Error while handling error");
            }
        }
    }
}
