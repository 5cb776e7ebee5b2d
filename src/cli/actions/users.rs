use crate::{
    cli::globals::GlobalArgs,
    features::{
        auth::{GuardOutcome, RouteGuard},
        users::{view, UserListController},
    },
    routes::Route,
};
use anyhow::{anyhow, bail, Context, Result};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersCommand {
    List {
        page: u32,
    },
    Edit {
        id: u64,
        page: u32,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    },
    Delete {
        id: u64,
        page: u32,
    },
}

impl UsersCommand {
    const fn page(&self) -> u32 {
        match self {
            Self::List { page } | Self::Edit { page, .. } | Self::Delete { page, .. } => *page,
        }
    }
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: UsersCommand,
}

/// # Errors
/// Returns an error if there is no session, the page cannot be loaded, or the
/// edit/delete fails.
pub async fn execute(args: Args) -> Result<()> {
    let output = run(args).await?;
    println!("{output}");
    Ok(())
}

/// Runs the user-management view for one command and returns the rendered page.
async fn run(args: Args) -> Result<String> {
    let session = args.globals.session();
    if let GuardOutcome::Redirect(route) =
        RouteGuard::check(&session, Route::UserManagement).context("failed to read session")?
    {
        bail!("not signed in, run `userdesk login` first ({route})");
    }

    let mut controller =
        UserListController::new(args.globals.api()?, session, args.globals.notifier());
    controller.load(args.command.page()).await;
    if let Some(error) = controller.error() {
        bail!("{error}");
    }

    match args.command {
        UsersCommand::List { .. } => {}
        UsersCommand::Edit {
            id,
            page,
            first_name,
            last_name,
            email,
        } => {
            let draft = controller
                .open_edit(id)
                .ok_or_else(|| anyhow!("user {id} is not on page {page}"))?;
            if let Some(first_name) = first_name {
                draft.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                draft.last_name = last_name;
            }
            if let Some(email) = email {
                draft.email = email;
            }
            debug!(id, "saving user");
            controller
                .confirm_edit()
                .await
                .with_context(|| format!("failed to update user {id}"))?;
        }
        UsersCommand::Delete { id, .. } => {
            controller
                .delete(id)
                .await
                .with_context(|| format!("failed to delete user {id}"))?;
        }
    }

    Ok(view::render_page(&controller))
}
