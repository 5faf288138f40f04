use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use storefront::backend::{Backend, DEFAULT_BACKEND_URL};
use storefront::form::user::{LoginFormData, RegisterFormData};
use storefront::handler::{submit_login, submit_register};
use storefront::page::{ConsoleNavigator, ConsoleNotifier, FileStorage, Page};

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Log in to or register with the grocery store backend")]
struct Cli {
    #[arg(long, env = "STOREFRONT_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Where the session (`user` key) is written after logging in.
    #[arg(long, env = "STOREFRONT_STORAGE", default_value = "storefront-storage.json")]
    storage: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login(LoginArgs),
    Register(RegisterArgs),
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    username: String,

    /// Prefer the environment variable: flags show up in process listings.
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,

    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, env = "STOREFRONT_CONFIRM_PASSWORD", hide_env_values = true)]
    confirm_password: String,

    #[arg(long, default_value = "customer")]
    role: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();

    let backend = match Backend::new(cli.backend_url) {
        Ok(backend) => backend,
        Err(e) => {
            log::error!("could not build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut page = Page::new(FileStorage::new(cli.storage), ConsoleNotifier, ConsoleNavigator);

    let outcome = match cli.command {
        Command::Login(args) => {
            let form = LoginFormData {
                username: args.username,
                password: args.password,
            };
            submit_login(&backend, &mut page, &form).await
        }
        Command::Register(args) => {
            let form = RegisterFormData {
                username: args.username,
                password: args.password,
                confirm_password: args.confirm_password,
                role: args.role,
            };
            submit_register(&backend, &mut page, &form).await
        }
    };

    log::debug!("submission ended with {outcome:?}");

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
