use crate::data::roster::{StoreError, UpdateOutcome};

/// Update your info. Usage: !update rank Ace Master
#[poise::command(slash_command, prefix_command)]
pub async fn update(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
    #[description = "Field to change (ign, uid, rank, role)"] field: String,
    #[description = "New value"]
    #[rest]
    new_value: String,
) -> Result<(), crate::Error> {
    let user_id = ctx.author().id.get().to_string();
    let new_value = new_value.trim().to_string();

    match ctx
        .data()
        .store
        .update_field(&user_id, &field, new_value.clone())
        .await
    {
        Ok(UpdateOutcome::Updated(_)) => {
            ctx.say(format!(
                "✅ Updated your **{}** to: **{}**",
                field.trim().to_uppercase(),
                new_value
            ))
            .await?;
        }
        Ok(UpdateOutcome::NotRegistered) => {
            ctx.say("⚠️ You are not registered.").await?;
        }
        Err(StoreError::Validation(msg)) => {
            ctx.say(format!("❌ {}", msg)).await?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
