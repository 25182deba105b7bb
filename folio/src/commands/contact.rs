use anyhow::bail;
use clap::Args;
use folio_config::Config;
use folio_models::contact::{ContactSubmission, SubmissionStatus};

use crate::environment;

#[derive(Debug, Args)]
pub struct ContactCommand {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    message: String,
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut form = environment::contact_form(&config)?;

        let status = form
            .submit(ContactSubmission {
                name: self.name,
                email: self.email,
                message: self.message,
            })
            .await;

        match status {
            SubmissionStatus::Success(message) => {
                println!("{message}");
                Ok(())
            }
            SubmissionStatus::Error(message) => bail!(message),
            status => bail!("Submission did not finish: {status:?}"),
        }
    }
}
