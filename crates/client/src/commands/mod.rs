//! Subcommands of the `society` tool

pub mod auth;
pub mod complaints;
pub mod residents;
pub mod society;

use clap::Subcommand;
use contracts::domain::a001_society::SocietyId;
use contracts::system::session::Session;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::shared::config::Config;
use crate::shared::paths::ConfigPaths;
use crate::system::auth::{current_session, FileSessionStore};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in as a society admin
    Login(auth::LoginArgs),

    /// Forget the stored session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Residents of the society
    Residents(residents::ResidentsArgs),

    /// Complaints board
    Complaints(complaints::ComplaintsArgs),

    /// Society profile and amenities
    Society(society::SocietyArgs),
}

/// Всё, что нужно командам: конфиг, пути и API-клиент с сессией
pub struct Context {
    pub config: Config,
    pub paths: ConfigPaths,
    pub client: ApiClient,
}

impl Context {
    pub fn new(config: Config, paths: ConfigPaths) -> ClientResult<Self> {
        let store = Arc::new(FileSessionStore::new(paths.session_file.clone()));
        let client = ApiClient::new(&config.api, store)?;
        Ok(Self {
            config,
            paths,
            client,
        })
    }

    pub fn society_id(&self) -> SocietyId {
        self.config.society_id()
    }

    /// Fails with "Not logged in" before any request is made.
    pub fn require_session(&self) -> ClientResult<Session> {
        current_session(self.client.session_store().as_ref())
    }
}

pub async fn dispatch(ctx: &Context, command: Commands) -> ClientResult<()> {
    match command {
        Commands::Login(args) => auth::login(ctx, args).await,
        Commands::Logout => auth::logout(ctx),
        Commands::Whoami => auth::whoami(ctx),
        Commands::Residents(args) => residents::execute(ctx, args).await,
        Commands::Complaints(args) => complaints::execute(ctx, args).await,
        Commands::Society(args) => society::execute(ctx, args).await,
    }
}

/// Печать значения как JSON (флаг `--json`)
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> ClientResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
