use poise::serenity_prelude as serenity;

use crate::commands::embeds::BLUE;

/// View a player's profile. Usage: !profile OR !profile @User
#[poise::command(slash_command, prefix_command)]
pub async fn profile(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
    #[description = "Player to look up (defaults to you)"] member: Option<serenity::User>,
) -> Result<(), crate::Error> {
    let user = member.as_ref().unwrap_or_else(|| ctx.author());
    let user_id = user.id.get().to_string();

    let Some(p) = ctx.data().store.profile(&user_id).await else {
        ctx.say(not_registered_message(user, ctx.prefix())).await?;
        return Ok(());
    };

    let embed = serenity::CreateEmbed::default()
        .title(format!("📄 Profile: {}", p.ign))
        .thumbnail(user.face())
        .field("🆔 UID", &p.uid, false)
        .field("🎖️ Rank", &p.rank, true)
        .field("🔫 Role", &p.role, true)
        .color(BLUE);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Names the player the way the server shows them, not by account handle.
fn not_registered_message(user: &serenity::User, prefix: &str) -> String {
    format!(
        "⚠️ {} is not registered! Use `{}register`.",
        user.display_name(),
        prefix
    )
}
