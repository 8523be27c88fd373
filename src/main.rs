//! permcheck - inspect TeamHub project permissions
//!
//! Resolves roles against a membership snapshot and prints the
//! role-to-permission table.

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use teamhub_rbac::config::load_env_file;
use teamhub_rbac::utils::logging::init_logging;
use teamhub_rbac::{
    Config, Identity, InMemoryMembershipStore, PermissionSet, ProjectAccessService, ProjectRole,
    Result, SystemRole, can_manage_user,
};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(
    name = "permcheck",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about = "Inspect TeamHub project roles and permissions"
)]
struct Cli {
    /// Configuration file (YAML); TEAMHUB_* environment variables otherwise
    #[arg(long, global = true, env = "TEAMHUB_CONFIG")]
    config: Option<PathBuf>,

    /// Environment file read before TEAMHUB_* variables (default: `.env` lookup)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a user's role and permissions in a project
    Resolve {
        /// Membership snapshot (YAML or JSON)
        #[arg(long)]
        memberships: PathBuf,
        /// User to resolve
        #[arg(long)]
        user: Uuid,
        /// Project to resolve against
        #[arg(long)]
        project: Uuid,
        /// System role of the user
        #[arg(long, default_value = "USER")]
        system_role: SystemRole,
        /// Resolve as an unauthenticated caller
        #[arg(long)]
        anonymous: bool,
    },
    /// Print the role-to-permission table
    Table,
    /// Check whether one role may manage a member holding another
    CanManage {
        /// Role of the acting user
        #[arg(long)]
        acting: ProjectRole,
        /// Role of the member being managed
        #[arg(long)]
        target: ProjectRole,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.env_file {
        load_env_file(path)?;
    }

    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    init_logging(config.logging())?;
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Command::Resolve {
            memberships,
            user,
            project,
            system_role,
            anonymous,
        } => {
            let store = InMemoryMembershipStore::from_snapshot_file(&memberships).await?;
            info!("Resolving user {} in project {}", user, project);

            let identity = if anonymous {
                Identity::unauthenticated(user)
            } else {
                Identity::authenticated(user, system_role)
            };

            let service = ProjectAccessService::new(config.access.clone(), Arc::new(store));
            let access = service.permissions_for(Some(&identity), Some(project)).await?;

            let output = json!({
                "access": access,
                "granted": access.permissions.permission_names(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Table => {
            let table: Vec<_> = ProjectRole::ALL
                .iter()
                .map(|role| {
                    json!({
                        "role": role,
                        "level": role.hierarchy_level(),
                        "permissions": PermissionSet::for_role(*role),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Command::CanManage { acting, target } => {
            let output = json!({
                "acting": acting,
                "target": target,
                "allowed": can_manage_user(acting, target),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
