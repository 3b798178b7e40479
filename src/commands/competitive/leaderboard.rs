use poise::serenity_prelude as serenity;

use crate::commands::embeds::{leaderboard_lines, RED};

/// Shows players ranked by their tier.
#[poise::command(slash_command, prefix_command)]
pub async fn leaderboard(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
) -> Result<(), crate::Error> {
    let ranked = ctx.data().store.leaderboard().await;
    if ranked.is_empty() {
        ctx.say("No players registered yet.").await?;
        return Ok(());
    }

    let embed = serenity::CreateEmbed::default()
        .title("🔥 RANK LEADERBOARD")
        .description(leaderboard_lines(&ranked))
        .color(RED);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
