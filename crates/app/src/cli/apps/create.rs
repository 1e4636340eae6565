use beacon_app::domain::apps::data::{AppInput, NewApp};
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateAppArgs {
    /// App display name
    #[arg(long)]
    name: String,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateAppArgs) -> Result<(), String> {
    let new_app = NewApp::try_from(AppInput {
        app_name: Some(args.name),
    })
    .map_err(|error| error.to_string())?;

    let context = args.database.context().await?;

    let app = context
        .apps
        .create_app(new_app)
        .await
        .map_err(|error| format!("failed to create app: {error}"))?;

    super::print_app(&app);

    Ok(())
}
