use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use tag_form::form::{CANCEL_LABEL, SLUG_LABEL, SUBMIT_LABEL, TITLE_LABEL};
use tag_form::{ApiConfig, CreateTagForm, SubmitOutcome, TagSink, TagsApiClient};

#[derive(Parser)]
#[command(name = "tag-form")]
#[command(about = "Create a tag whose slug is derived from its title")]
struct Cli {
    /// Base URL of the tags API (overrides TAGS_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
    /// Submit this title without prompting
    #[arg(long)]
    title: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = match cli.base_url {
        Some(base_url) => ApiConfig::new(base_url),
        None => ApiConfig::from_env(),
    };
    let client = TagsApiClient::new(Client::new(), &config);
    let mut form = CreateTagForm::new();

    let outcome = match cli.title {
        Some(title) => {
            form.set_title(title);
            println!("{SLUG_LABEL}: {}", form.slug());
            match form.submit(&client).await {
                Ok(outcome) => Some(outcome),
                Err(err) => {
                    println!("{err}");
                    return Ok(ExitCode::from(2));
                }
            }
        }
        None => run_dialog(&mut form, &client).await?,
    };

    let code = match outcome {
        None => ExitCode::SUCCESS,
        Some(SubmitOutcome::Created(draft)) => {
            println!("Created tag \"{}\" ({})", draft.title(), draft.slug());
            ExitCode::SUCCESS
        }
        Some(SubmitOutcome::Failed { draft, reason }) => {
            println!("Could not create tag \"{}\": {reason}", draft.title());
            ExitCode::FAILURE
        }
    };

    Ok(code)
}

/// Prompts until a valid title is submitted. An empty line or end of input
/// cancels the dialog.
async fn run_dialog(
    form: &mut CreateTagForm,
    client: &TagsApiClient,
) -> Result<Option<SubmitOutcome>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{TITLE_LABEL}: ");
        io::stdout().flush().context("failed to write prompt")?;

        let line = lines
            .next_line()
            .await
            .context("failed to read title")?
            .unwrap_or_default();
        let title = line.trim_end_matches('\r');

        if title.is_empty() {
            form.cancel();
            println!("{CANCEL_LABEL}");
            return Ok(None);
        }

        form.set_title(title);
        println!("{SLUG_LABEL}: {}", form.slug());

        let draft = match form.begin_submit() {
            Ok(draft) => draft,
            Err(err) => {
                println!("  {err}");
                continue;
            }
        };

        println!("{SUBMIT_LABEL}...");
        let result = client.create_tag(&draft).await;
        return Ok(Some(form.finish_submit(draft, result)));
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}
