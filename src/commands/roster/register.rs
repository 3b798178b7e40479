use poise::serenity_prelude as serenity;

use crate::commands::embeds::GREEN;

/// Register your BGMI details. Usage: !register <IGN> <UID> <Rank> <Role>
#[poise::command(slash_command, prefix_command)]
pub async fn register(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
    #[description = "In-game name"] ign: String,
    #[description = "In-game UID"] uid: String,
    #[description = "Rank tier (e.g., Crown, Ace, Conqueror)"] rank: String,
    #[description = "Squad role (e.g., IGL, Assaulter, Sniper)"] role: String,
) -> Result<(), crate::Error> {
    let user_id = ctx.author().id.get().to_string();
    let today = chrono::Local::now().date_naive();
    let record = ctx
        .data()
        .store
        .register(&user_id, ign, uid, rank, role, today)
        .await?;

    let embed = serenity::CreateEmbed::default()
        .title("✅ Registration Successful")
        .field("Player", &record.ign, true)
        .field("Role", &record.role, true)
        .color(GREEN);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
