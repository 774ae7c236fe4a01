use std::process::ExitCode;

use database::PgDatabase;
use depot::{database::Result, report};
use log::{error, warn};

use config::AppConfig;

mod config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(why) => {
            error!("{}", why);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every step succeeded.
async fn run() -> Result<bool> {
    let config = AppConfig::from_env()?;

    // database
    let mut database = PgDatabase::connect(config.database).await?;

    // reports
    let result = report::run(&mut database, &config.run).await;

    if let Err(why) = database.close().await {
        warn!("could not close database connection: {}", why);
    }

    Ok(result?.is_success())
}
