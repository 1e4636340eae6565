use beacon_app::domain::apps::{data::AppUpdate, records::AppUuid};
use clap::Args;
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DeactivateAppArgs {
    /// App to stop accepting events for
    #[arg(long)]
    app_id: Uuid,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: DeactivateAppArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    let app = context
        .apps
        .update_app(AppUuid::from_uuid(args.app_id), AppUpdate::deactivate())
        .await
        .map_err(|error| format!("failed to deactivate app {}: {error}", args.app_id))?;

    super::print_app(&app);

    Ok(())
}
