use beacon_app::domain::apps::records::AppRecord;
use clap::{Args, Subcommand};

mod create;
mod deactivate;
mod list;

#[derive(Debug, Args)]
pub(crate) struct AppsCommand {
    #[command(subcommand)]
    command: AppsSubcommand,
}

#[derive(Debug, Subcommand)]
enum AppsSubcommand {
    Create(create::CreateAppArgs),
    List(list::ListAppsArgs),
    Deactivate(deactivate::DeactivateAppArgs),
}

pub(crate) async fn run(command: AppsCommand) -> Result<(), String> {
    match command.command {
        AppsSubcommand::Create(args) => create::run(args).await,
        AppsSubcommand::List(args) => list::run(args).await,
        AppsSubcommand::Deactivate(args) => deactivate::run(args).await,
    }
}

fn print_app(app: &AppRecord) {
    println!("app_id: {}", app.uuid);
    println!("app_name: {}", app.name);
    println!("is_active: {}", app.is_active);
    println!("created_at: {}", app.created_at);
}

fn app_line(app: &AppRecord) -> String {
    let status = if app.is_active { "active" } else { "inactive" };

    format!("{}\t{status}\t{}\t{}", app.uuid, app.created_at, app.name)
}
