use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct PingArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

/// Same check the API's readiness probe runs.
pub(crate) async fn run(args: PingArgs) -> Result<(), String> {
    let db = args.database.connect().await?;

    db.ping()
        .await
        .map_err(|error| format!("database did not answer: {error}"))?;

    println!("database is ready");

    Ok(())
}
