use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};

use crate::{config, messages, Data, Error};

/// Handle when a new member joins the guild
pub async fn handle_member_add(
    ctx: &serenity::Context,
    new_member: &serenity::Member,
    data: &Data,
) -> Result<(), Error> {
    let user_id = new_member.user.id;
    let guild_id = new_member.guild_id;

    info!(
        "New member joined: {} in guild {}",
        new_member.user.name, guild_id
    );

    // Consume any role choice made via the registration flow. The entry is
    // gone after this regardless of whether the grant below succeeds.
    let pending = data.role_choices.write().await.take(user_id);

    if let Some(role_id) = pending {
        match guild_id.roles(&ctx.http).await {
            Ok(roles) if roles.contains_key(&role_id) => {
                if let Err(e) = new_member.add_role(&ctx.http, role_id).await {
                    error!(
                        "Failed to assign role {} to {} in guild {}: {}. Bot requires 'Manage Roles' permission and a role above the one being assigned.",
                        role_id, user_id, guild_id, e
                    );
                } else {
                    info!("Assigned role {} to {}", role_id, user_id);
                }
            }
            Ok(_) => {
                warn!("Chosen role {} no longer exists in guild {}", role_id, guild_id);
            }
            Err(e) => {
                error!("Failed to fetch roles for guild {}: {}", guild_id, e);
            }
        }
    }

    // Welcome announcement goes out on every join, role choice or not.
    let message = serenity::CreateMessage::new().embed(messages::welcome_embed(user_id));
    if let Err(e) = config::WELCOME_CHANNEL_ID
        .send_message(&ctx.http, message)
        .await
    {
        warn!(
            "Could not send welcome message for {} to channel {}: {}",
            user_id,
            config::WELCOME_CHANNEL_ID,
            e
        );
    }

    Ok(())
}
