use clap::{Args, Subcommand};
use contracts::domain::a002_user::{User, UserRole};
use std::path::PathBuf;

use super::{print_json, Context};
use crate::error::{ClientError, ClientResult};
use crate::usecases::u501_import_residents::{import_file, preview_file};

#[derive(Args, Debug)]
pub struct ResidentsArgs {
    #[command(subcommand)]
    pub command: ResidentsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ResidentsCommands {
    /// List everyone registered in the society
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register residents from a CSV file, one row per resident
    Import {
        /// CSV with a header row (FullName, Email, Role, FlatNo, Phone)
        file: PathBuf,

        /// Show the requests that would be sent without sending them
        #[arg(long)]
        dry_run: bool,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List users with a given role (ADMIN, RESIDENT, VENDOR, GUARD)
    ByRole {
        role: String,

        #[arg(long)]
        json: bool,
    },
}

pub async fn execute(ctx: &Context, args: ResidentsArgs) -> ClientResult<()> {
    match args.command {
        ResidentsCommands::List { json } => list(ctx, json).await,
        ResidentsCommands::Import {
            file,
            dry_run: true,
            json,
        } => dry_run(ctx, file, json).await,
        ResidentsCommands::Import { file, json, .. } => import(ctx, file, json).await,
        ResidentsCommands::ByRole { role, json } => by_role(ctx, &role, json).await,
    }
}

async fn list(ctx: &Context, json: bool) -> ClientResult<()> {
    ctx.require_session()?;
    let users = ctx.client.users_by_society(ctx.society_id()).await?;
    if json {
        return print_json(&users);
    }
    print_users(&users);
    Ok(())
}

async fn by_role(ctx: &Context, role: &str, json: bool) -> ClientResult<()> {
    let role: UserRole = role.parse().map_err(ClientError::Validation)?;
    ctx.require_session()?;

    let users = ctx.client.users_by_role(role.as_str()).await?;
    if json {
        return print_json(&users);
    }
    print_users(&users);
    Ok(())
}

async fn import(ctx: &Context, file: PathBuf, json: bool) -> ClientResult<()> {
    ctx.require_session()?;
    let report = import_file(&ctx.client, ctx.society_id(), &file).await?;

    if json {
        return print_json(&report.outcome);
    }

    println!("{}", report.outcome.status());
    for row in report.outcome.failures() {
        println!(
            "  row {} (line {}): {} - {}",
            row.row_number,
            row.line,
            row.email.as_deref().unwrap_or("<no email>"),
            row.error.as_deref().unwrap_or_default()
        );
    }
    match &report.residents {
        Ok(users) => println!("Society now has {} residents.", users.len()),
        Err(e) => println!("Could not reload residents: {}", e),
    }
    Ok(())
}

async fn dry_run(ctx: &Context, file: PathBuf, json: bool) -> ClientResult<()> {
    let preview = preview_file(&ctx.client, ctx.society_id(), &file).await?;

    if json {
        let requests: Vec<_> = preview.tasks.iter().map(|t| &t.request).collect();
        return print_json(&requests);
    }

    for field in &preview.missing_fields {
        println!("No '{}' column, default value will be used", field.title());
    }
    println!("{} residents would be registered:", preview.tasks.len());
    for task in &preview.tasks {
        let request = &task.request;
        println!(
            "  {:>3}. {:<24} {:<28} {:<9} flat {}",
            task.row_number,
            request.full_name,
            request.email.as_deref().unwrap_or("<no email>"),
            request.role,
            if request.flat_no.is_empty() { "-" } else { request.flat_no.as_str() }
        );
    }
    Ok(())
}

fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No residents found.");
        return;
    }
    println!(
        "{:<6} {:<24} {:<28} {:<9} {:<8} {}",
        "ID", "NAME", "EMAIL", "ROLE", "FLAT", "PHONE"
    );
    for user in users {
        println!(
            "{:<6} {:<24} {:<28} {:<9} {:<8} {}",
            user.id.0,
            user.full_name,
            user.email,
            user.role,
            user.flat_label(),
            user.phone_label()
        );
    }
}
