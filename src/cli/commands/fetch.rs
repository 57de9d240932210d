//! One-shot idea fetch

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{print_formatted, OutputFormat};
use crate::client::IdeaClient;
use crate::config::{self, Config};
use crate::state::RequestState;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Backend origin to use instead of the configured one
    #[arg(long)]
    pub origin: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
enum FetchResult {
    Done { idea: String },
    Error { error: String },
}

impl FetchResult {
    fn from_state(state: RequestState) -> Option<Self> {
        match state {
            RequestState::Done(idea) => Some(Self::Done { idea }),
            RequestState::Error(error) => Some(Self::Error { error }),
            RequestState::Idle | RequestState::Loading => None,
        }
    }
}

pub async fn run(args: FetchArgs, format: OutputFormat) -> Result<()> {
    // The CLI has no identity collaborator, so it always fetches ungated
    let origin = match args.origin {
        Some(origin) => origin,
        None => load_config().backend_origin(),
    };
    config::validate_origin(&origin)?;

    let client = IdeaClient::new(&origin)?;
    let state = RequestState::from_outcome(client.get_idea().await);

    let Some(result) = FetchResult::from_state(state) else {
        anyhow::bail!("Request did not settle");
    };

    match result {
        FetchResult::Done { .. } => {
            print_formatted(&result, format, |r| match r {
                FetchResult::Done { idea } => idea.clone(),
                FetchResult::Error { error } => error.clone(),
            });
            Ok(())
        }
        FetchResult::Error { ref error } => {
            if format == OutputFormat::Json {
                print_formatted(&result, format, |_| String::new());
            }
            let detail = error.strip_prefix("Error: ").unwrap_or(error);
            Err(anyhow::anyhow!("{}", detail))
        }
    }
}

fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}
