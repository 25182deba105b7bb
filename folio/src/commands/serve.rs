use anyhow::Context;
use folio_config::Config;
use folio_email_contracts::EmailService;
use tracing::info;

use crate::{email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;
    email
        .ping()
        .await
        .context("Failed to connect to smtp server")?;

    let server = environment::rest_server(&config, email)?;
    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
