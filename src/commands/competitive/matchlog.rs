use poise::serenity_prelude as serenity;

use crate::commands::embeds::GREEN;
use crate::data::roster::StoreError;

/// Log a match result. Usage: !matchlog <kills> <place> <map>
#[poise::command(slash_command, prefix_command)]
pub async fn matchlog(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
    #[description = "Kills"] kills: u32,
    #[description = "Finishing place (1-8 score placement points)"] place: u32,
    #[description = "Map name (defaults to Erangel)"]
    #[rest]
    map_name: Option<String>,
) -> Result<(), crate::Error> {
    let today = chrono::Local::now().date_naive();
    let record = match ctx.data().store.log_match(kills, place, map_name, today).await {
        Ok(r) => r,
        Err(StoreError::Validation(msg)) => {
            ctx.say(format!("❌ {}", msg)).await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let embed = serenity::CreateEmbed::default()
        .title(format!("📝 Match Recorded: {}", record.map))
        .field("Kills", record.kills.to_string(), true)
        .field("Place", format!("#{}", record.place), true)
        .field("Placement Pts", record.placement_points().to_string(), true)
        .field("Total Points", format!("**{}**", record.total_points), false)
        .color(GREEN);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
