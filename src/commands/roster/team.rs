use poise::serenity_prelude as serenity;

use crate::commands::embeds::{roster_lines, GOLD};

/// List all registered players.
#[poise::command(slash_command, prefix_command)]
pub async fn team(ctx: poise::Context<'_, crate::Data, crate::Error>) -> Result<(), crate::Error> {
    let team = ctx.data().store.team().await;
    if team.is_empty() {
        ctx.say("No players registered yet.").await?;
        return Ok(());
    }

    let embed = serenity::CreateEmbed::default()
        .title("🏆 TEAM ROSTER")
        .description(roster_lines(&team))
        .color(GOLD);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
