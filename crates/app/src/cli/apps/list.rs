use beacon_app::domain::apps::{AppsServiceError, data::AppFilter};
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListAppsArgs {
    /// Only list apps whose name contains this text
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListAppsArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    let filter = AppFilter {
        app: None,
        name: args.name.filter(|name| !name.is_empty()),
    };

    let apps = match context.apps.list_apps(filter).await {
        Ok(apps) => apps,
        Err(AppsServiceError::NotFound) => Vec::new(),
        Err(error) => return Err(format!("failed to list apps: {error}")),
    };

    if apps.is_empty() {
        println!("no apps found");
        return Ok(());
    }

    for app in &apps {
        println!("{}", super::app_line(app));
    }

    Ok(())
}
