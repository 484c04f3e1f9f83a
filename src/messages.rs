// src/messages.rs

use poise::serenity_prelude as serenity;

use crate::config;
use crate::webhook::RegistrationRecord;

pub fn role_prompt_embed() -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("Choose Your Role")
        .description("Click the button below to select your role at Wisteria Medical Institute.")
        .color(0xB19CD9)
}

pub fn role_selected_embed() -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("✅ Role Selected!")
        .description(format!(
            "You've selected **{}**!\n\n\
            🌐 Click here to join the private Wisteria medical institute community:\n{}",
            config::FIRST_YEAR_ROLE_LABEL,
            config::INVITE_LINK
        ))
        .color(0xC9A0DC)
}

pub fn registration_log_embed(record: &RegistrationRecord) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("📝 New Student Registration Logged")
        .color(0x7D5BA6)
        .field("👤 Name", record.name.clone(), true)
        .field("📧 Email", record.email.clone(), true)
        .field(
            "🆔 Discord",
            format!("{} ({})", record.discord_user, record.discord_id),
            false,
        )
        .field("🎓 Role", record.role.clone(), true)
        .field("🕒 Date (UTC)", record.timestamp.clone(), true)
}

pub fn welcome_embed(user_id: serenity::UserId) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("🌸 Welcome to Wisteria Medical Institute!")
        .description(format!(
            "Greetings, <@{}>!\n\n\
            On behalf of our Leadership Council, we are absolutely **thrilled** to have you join our community!\n\n\
            At **Wisteria Medical Institute**, we're dedicated to providing realistic medical education courses \
            and lessons while fostering an inclusive environment for all students and staff. Whether you're here \
            to **learn**, **teach**, or **make friends**, we're excited to have you with us. 💜\n\n\
            We can't wait to see all that you'll accomplish!\n\n\
            To gain full access to our community channels, please make sure to verify in <#1390781451812999349>.\n\n\
            Need assistance? Open a ModMail ticket. More information can be found in <#1390777039736537169>.\n\n\
            <:WMILogo:1393624412036534423>  **Wisteria Medical Institute** — All Rights Reserved.",
            user_id
        ))
        .color(0xB19CD9)
        .image(config::WELCOME_GIF_URL)
        .footer(
            serenity::CreateEmbedFooter::new("Wisteria Medical Institute")
                .icon_url(config::FOOTER_ICON_URL),
        )
}

pub fn registration_failed_message() -> &'static str {
    "Failed to log registration. Please try again."
}

pub fn wrong_user_message() -> &'static str {
    "This button is not for you."
}
