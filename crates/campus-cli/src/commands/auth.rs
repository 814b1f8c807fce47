use anyhow::Result;
use campus_core::user::{Role, UserSummary};

use super::Context;
use crate::output::details;

pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<()> {
    let user = ctx.app.session.login(email, password).await?;
    ctx.output.show(&user, |u| format!("Logged in as {} ({})", u.name, u.role))
}

pub async fn logout(ctx: &Context) -> Result<()> {
    ctx.app.session.teardown().await;
    ctx.output.done("Logged out")
}

pub async fn register(ctx: &Context, name: &str, email: &str, password: &str, role: Role) -> Result<()> {
    ctx.app.session.register(name, email, password, role).await?;
    ctx.output
        .done(&format!("Registered {email} as {role}. Run `campus login` to sign in."))
}

pub fn whoami(ctx: &Context) -> Result<()> {
    match ctx.app.session.current_user() {
        Some(user) => ctx.output.show(&user, render_user),
        None => ctx.output.show(&serde_json::Value::Null, |_| "Not logged in".to_string()),
    }
}

fn render_user(user: &UserSummary) -> String {
    details(&[
        ("id", user.id.clone()),
        ("name", user.name.clone()),
        ("email", user.email.clone()),
        ("role", user.role.to_string()),
    ])
}
