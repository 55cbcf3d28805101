mod transport;


use std::process::ExitCode;

use authform::config::DEFAULT_API_BASE_URL;
use authform::state::form::SubmitRejected;
use authform::util::auth_flow::{AuthAction, AuthSession};
use clap::{Args, Parser, Subcommand};

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("not submitted: {0}")]
    Rejected(#[from] SubmitRejected),
    #[error("{title}: {description}")]
    Failed { title: String, description: String },
}

#[derive(Parser, Debug)]
#[command(name = "authform-cli", about = "Log in or sign up against the auth API")]
struct Cli {
    #[arg(long, env = "AUTHFORM_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// POST credentials to `/login`.
    Login(CredentialArgs),
    /// POST credentials to `/signup`.
    Signup(CredentialArgs),
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, env = "AUTHFORM_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Submit the requested action and return the success notice as `title: description`.
async fn run(cli: Cli) -> Result<String, CliError> {
    let (action, args) = match cli.command {
        Command::Login(args) => (AuthAction::Login, args),
        Command::Signup(args) => (AuthAction::Signup, args),
    };

    let mut session = AuthSession::new(ReqwestTransport::new(cli.base_url)?);
    tracing::debug!(base_url = session.transport().base_url(), action = action.label(), "submitting");
    session.form.email = args.email;
    session.form.password = args.password;

    let outcome = session.submit(action).await?;
    tracing::debug!(action = outcome.action().label(), success = outcome.is_success(), "auth finished");
    let Some(toast) = session.toasts.latest() else {
        return Err(CliError::Failed { title: action.label().to_owned(), description: "no response".to_owned() });
    };
    if outcome.is_success() {
        Ok(format!("{}: {}", toast.title, toast.description))
    } else {
        Err(CliError::Failed { title: toast.title.clone(), description: toast.description.clone() })
    }
}
