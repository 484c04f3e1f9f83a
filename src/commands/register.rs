use poise::serenity_prelude as serenity;
use poise::Modal;
use tracing::{error, info, warn};

use crate::webhook::RegistrationRecord;
use crate::{config, messages, Context, Data, Error};

#[derive(Debug, Modal)]
#[name = "WMI Registration"]
struct RegistrationModal {
    #[name = "Full Name"]
    #[placeholder = "Enter your full name"]
    name: String,
    #[name = "Email"]
    #[placeholder = "Enter your email (optional)"]
    email: Option<String>,
}

/// Register for Wisteria Medical Institute
#[poise::command(slash_command, guild_only)]
pub async fn register(ctx: poise::ApplicationContext<'_, Data, Error>) -> Result<(), Error> {
    let Some(submission) = RegistrationModal::execute(ctx).await? else {
        // Modal dismissed without submitting
        return Ok(());
    };

    let pctx: Context<'_> = poise::Context::Application(ctx);
    let author = pctx.author();
    let record = RegistrationRecord::new(
        submission.name,
        submission.email,
        author.name.clone(),
        author.id,
    );

    // The user only proceeds to role selection once the registration has
    // actually landed in the spreadsheet.
    if let Err(e) = pctx.data().notifier.notify(&record).await {
        error!("Webhook delivery failed for {}: {}", record.discord_id, e);
        pctx.send(
            poise::CreateReply::default()
                .content(messages::registration_failed_message())
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    info!(
        "Registration logged for {} ({})",
        record.discord_user, record.discord_id
    );

    let components = vec![serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new("role_first_year")
            .label(config::FIRST_YEAR_ROLE_LABEL)
            .style(serenity::ButtonStyle::Primary),
    ])];

    let reply = pctx
        .send(
            poise::CreateReply::default()
                .embed(messages::role_prompt_embed())
                .components(components)
                .ephemeral(true),
        )
        .await?;

    // Audit copy to the log channel; a missing or inaccessible channel is
    // not surfaced to the user.
    let log_message =
        serenity::CreateMessage::new().embed(messages::registration_log_embed(&record));
    if let Err(e) = config::LOG_CHANNEL_ID
        .send_message(pctx.http(), log_message)
        .await
    {
        warn!(
            "Could not post registration log for {}: {}",
            record.discord_id, e
        );
    }

    // The button stays valid until the process restarts, so no timeout on
    // the collector. Re-clicking just overwrites the pending choice.
    let bound_user = author.id;
    let message = reply.message().await?;

    while let Some(interaction) = message
        .await_component_interaction(pctx.serenity_context().shard.clone())
        .await
    {
        if interaction.user.id != bound_user {
            // The prompt is ephemeral, so this only happens on a forged
            // interaction. Reject without logging it as an error.
            respond_ephemeral(
                &interaction,
                pctx.http(),
                serenity::CreateInteractionResponseMessage::new()
                    .content(messages::wrong_user_message()),
            )
            .await;
            continue;
        }

        pctx.data()
            .role_choices
            .write()
            .await
            .set(bound_user, config::FIRST_YEAR_ROLE_ID);
        info!(
            "User {} ({}) selected role {}",
            interaction.user.name,
            bound_user,
            config::FIRST_YEAR_ROLE_ID
        );

        respond_ephemeral(
            &interaction,
            pctx.http(),
            serenity::CreateInteractionResponseMessage::new()
                .embed(messages::role_selected_embed()),
        )
        .await;
    }

    Ok(())
}

async fn respond_ephemeral(
    interaction: &serenity::ComponentInteraction,
    http: &serenity::Http,
    response: serenity::CreateInteractionResponseMessage,
) {
    if let Err(e) = interaction
        .create_response(
            http,
            serenity::CreateInteractionResponse::Message(response.ephemeral(true)),
        )
        .await
    {
        error!("Failed to respond to button interaction: {}", e);
    }
}
