use clap::{Args, Subcommand};
use contracts::domain::a002_user::{UserId, UserRole};
use contracts::domain::a003_complaint::{Complaint, ComplaintFilter, ComplaintId, ComplaintStatus};

use super::{print_json, Context};
use crate::error::{ClientError, ClientResult};

#[derive(Args, Debug)]
pub struct ComplaintsArgs {
    #[command(subcommand)]
    pub command: ComplaintsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ComplaintsCommands {
    /// Show the complaints board
    List {
        /// OPEN, PENDING_VERIFICATION, RESOLVED or ALL
        #[arg(long, short = 's', default_value = "ALL")]
        status: String,

        /// Case-insensitive text in title, description or reporter name
        #[arg(long, short = 'q', default_value = "")]
        search: String,

        #[arg(long)]
        json: bool,
    },

    /// Mark a complaint as resolved
    Resolve { id: i64 },

    /// Move a complaint to another status
    SetStatus { id: i64, status: String },

    /// Hand a complaint to a vendor
    Assign { id: i64, vendor_id: i64 },

    /// Vendors available for assignment
    Vendors {
        #[arg(long)]
        json: bool,
    },
}

pub async fn execute(ctx: &Context, args: ComplaintsArgs) -> ClientResult<()> {
    ctx.require_session()?;

    match args.command {
        ComplaintsCommands::List {
            status,
            search,
            json,
        } => list(ctx, &status, search, json).await,
        ComplaintsCommands::Resolve { id } => {
            set_status(ctx, ComplaintId(id), ComplaintStatus::Resolved).await
        }
        ComplaintsCommands::SetStatus { id, status } => {
            let status: ComplaintStatus = status.parse().map_err(ClientError::Validation)?;
            set_status(ctx, ComplaintId(id), status).await
        }
        ComplaintsCommands::Assign { id, vendor_id } => {
            ctx.client
                .assign_vendor(ComplaintId(id), UserId(vendor_id))
                .await?;
            println!("Complaint #{} assigned to vendor {}.", id, vendor_id);
            Ok(())
        }
        ComplaintsCommands::Vendors { json } => {
            let vendors = ctx.client.users_by_role(UserRole::Vendor.as_str()).await?;
            if json {
                return print_json(&vendors);
            }
            for vendor in &vendors {
                println!("{:<6} {:<24} {}", vendor.id.0, vendor.full_name, vendor.phone_label());
            }
            Ok(())
        }
    }
}

async fn list(ctx: &Context, status: &str, search: String, json: bool) -> ClientResult<()> {
    let filter = ComplaintFilter::new(Some(status), search);
    let complaints = ctx.client.complaints_by_society(ctx.society_id()).await?;
    let visible = filter.apply(&complaints);
    tracing::debug!("{} of {} complaints match", visible.len(), complaints.len());

    if json {
        return print_json(&visible);
    }
    if visible.is_empty() {
        println!("No complaints found.");
        return Ok(());
    }
    for complaint in &visible {
        print_complaint(complaint);
    }
    Ok(())
}

async fn set_status(ctx: &Context, id: ComplaintId, status: ComplaintStatus) -> ClientResult<()> {
    ctx.client.update_complaint_status(id, status).await?;
    println!("Complaint #{} is now {}.", id, status.label());

    // Доска перечитывается после смены статуса
    let complaints = ctx.client.complaints_by_society(ctx.society_id()).await?;
    let open = complaints.iter().filter(|c| !c.is_resolved()).count();
    println!("{} unresolved complaints remain.", open);
    Ok(())
}

fn print_complaint(complaint: &Complaint) {
    let status = complaint
        .known_status()
        .map(|s| s.label())
        .unwrap_or(complaint.status.as_str());
    let flag = if complaint.is_emergency() { " [EMERGENCY]" } else { "" };

    println!("#{} {}{}", complaint.id, complaint.title, flag);
    println!(
        "    {} | {} | by {} | {} upvotes",
        status,
        complaint.category.as_deref().unwrap_or("General"),
        complaint.reporter_name().unwrap_or("Unknown"),
        complaint.upvotes
    );
    if let Some(vendor) = &complaint.assigned_vendor {
        println!("    assigned to {}", vendor.full_name);
    }
    if !complaint.description.is_empty() {
        println!("    {}", complaint.description);
    }
}
