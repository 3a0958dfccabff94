use chrono::Utc;
use clap::Args;
use dialoguer::Password;

use super::Context;
use crate::error::{ClientError, ClientResult};
use crate::system::auth;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Admin email
    #[arg(long, short = 'e')]
    pub email: String,

    /// Password (prompted for when omitted)
    #[arg(long, env = "SOCIETY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

pub async fn login(ctx: &Context, args: LoginArgs) -> ClientResult<()> {
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| ClientError::Validation(format!("Cannot read password: {}", e)))?,
    };

    let session = auth::login(&ctx.client, &args.email, &password).await?;
    println!(
        "Logged in as {} ({})",
        session.display_name(),
        session.display_role()
    );
    Ok(())
}

pub fn logout(ctx: &Context) -> ClientResult<()> {
    if auth::logout(ctx.client.session_store().as_ref())? {
        println!("Logged out.");
    } else {
        println!("You are not logged in.");
    }
    Ok(())
}

pub fn whoami(ctx: &Context) -> ClientResult<()> {
    let Some(session) = ctx.client.session_store().load()? else {
        return Err(ClientError::NotAuthenticated);
    };

    println!("Name:    {}", session.display_name());
    println!("Role:    {}", session.display_role());
    if let Some(email) = &session.email {
        println!("Email:   {}", email);
    }
    if let Some(user_id) = session.user_id {
        println!("User ID: {}", user_id);
    }
    println!("Society: {}", ctx.society_id());
    println!("API:     {}", ctx.client.base_url());

    match session.expires_at {
        Some(expires_at) if session.is_expired_at(Utc::now()) => {
            println!("Session expired at {}. Run 'society login' again.", expires_at)
        }
        Some(expires_at) => println!("Expires: {}", expires_at),
        None => {}
    }
    Ok(())
}
