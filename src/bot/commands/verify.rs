//! Verification Discord command - `/verify` (prefix `!verify` / `!login`).
//!
//! A valid, registered student id earns the configured role and a
//! `"<id> | <name>"` nickname. Each Discord mutation is attempted on its own
//! and reported as a status line; a failure in one does not stop the other.

use crate::core::verification::{NicknameOutcome, RoleOutcome, VerifiedStudent};
use poise::serenity_prelude as serenity;
use tracing::{info, warn};

type Ctx<'a> = poise::Context<'a, crate::bot::BotData, crate::errors::Error>;

fn is_forbidden(error: &serenity::Error) -> bool {
    matches!(
        error,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403
    )
}

async fn assign_role(
    ctx: Ctx<'_>,
    guild_id: serenity::GuildId,
    member: Option<&serenity::Member>,
    role_name: &str,
) -> RoleOutcome {
    let roles = match guild_id.roles(ctx.http()).await {
        Ok(roles) => roles,
        Err(e) => return RoleOutcome::Failed(e.to_string()),
    };
    let Some(role) = roles.values().find(|role| role.name == role_name) else {
        warn!("Verification role {} missing in guild {}", role_name, guild_id);
        return RoleOutcome::Missing(role_name.to_string());
    };

    if member.is_some_and(|m| m.roles.contains(&role.id)) {
        return RoleOutcome::AlreadyHad(role_name.to_string());
    }

    match ctx
        .http()
        .add_member_role(guild_id, ctx.author().id, role.id, Some("Student verification"))
        .await
    {
        Ok(()) => RoleOutcome::Assigned(role_name.to_string()),
        Err(e) if is_forbidden(&e) => RoleOutcome::Forbidden(role_name.to_string()),
        Err(e) => RoleOutcome::Failed(e.to_string()),
    }
}

async fn apply_nickname(
    ctx: Ctx<'_>,
    guild_id: serenity::GuildId,
    member: Option<&serenity::Member>,
    student: &VerifiedStudent,
) -> NicknameOutcome {
    let nickname = student.nickname();
    if member.and_then(|m| m.nick.as_deref()) == Some(nickname.as_str()) {
        return NicknameOutcome::AlreadySet(nickname);
    }

    let builder = serenity::EditMember::new().nickname(nickname.clone());
    match guild_id.edit_member(ctx.http(), ctx.author().id, builder).await {
        Ok(_) => NicknameOutcome::Set(nickname),
        Err(e) if is_forbidden(&e) => NicknameOutcome::Forbidden,
        Err(e) => NicknameOutcome::Failed(e.to_string()),
    }
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{apply_nickname, assign_role, info};
    use crate::{
        bot::BotData,
        core::verification::{verification_report, verify_student},
        errors::{Error, Result},
    };

    /// Verifies you as a student of this faculty.
    ///
    /// Grants the student role and sets your nickname to `id | name`.
    #[poise::command(slash_command, prefix_command, guild_only, aliases("login"))]
    pub async fn verify(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Your student ID"] student_id: String,
    ) -> Result<()> {
        let config = &ctx.data().config.verification;

        let student = match verify_student(config, &student_id) {
            Ok(student) => student,
            Err(e) => {
                ctx.send(
                    poise::CreateReply::default()
                        .content(e.user_message())
                        .ephemeral(true),
                )
                .await?;
                return Ok(());
            }
        };

        let Some(guild_id) = ctx.guild_id() else {
            return Ok(());
        };
        ctx.defer_ephemeral().await?;

        let member = ctx.author_member().await.map(std::borrow::Cow::into_owned);
        let role = assign_role(ctx, guild_id, member.as_ref(), &config.role_name).await;
        let nickname = apply_nickname(ctx, guild_id, member.as_ref(), &student).await;

        info!(
            "Verified {} as {} ({}): {:?}, {:?}",
            ctx.author().name,
            student.id,
            student.name,
            role,
            nickname
        );

        ctx.send(
            poise::CreateReply::default()
                .content(verification_report(&student, &role, &nickname))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
