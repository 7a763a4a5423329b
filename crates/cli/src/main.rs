//! Scrutin CLI - Terminal frontend for the survey service.
//!
//! # Usage
//!
//! ```bash
//! # Authenticate
//! scrutin login -u bob -p s3cret
//! scrutin register -u bob -e bob@example.com -p s3cret
//! scrutin logout
//!
//! # Surveys
//! scrutin surveys list
//! scrutin surveys show 5
//! scrutin surveys respond 5 2
//! scrutin surveys results 5
//! scrutin surveys create -t "Lunch" -q "Pizza?" --public -o Yes -o No
//!
//! # Forum
//! scrutin comments list 5
//! scrutin comments post 5 "I voted pizza"
//!
//! # Profile
//! scrutin whoami
//! scrutin search bo
//!
//! # Administration
//! scrutin admin set-role 3 --admin true
//! ```
//!
//! # Environment Variables
//!
//! - `SCRUTIN_API_BASE` - Base URL of the survey service
//! - `SCRUTIN_SESSION_FILE` - Path of the persisted session file

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use secrecy::SecretString;

use scrutin_client::{ApiClient, ApiConfig, SessionStore};
use scrutin_core::{OptionId, SurveyId, UserId};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "scrutin")]
#[command(author, version, about = "Scrutin survey service client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        /// Username (the service treats this as the login email)
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Create a new account
    Register {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Discard the stored session
    Logout,
    /// Show the logged-in profile
    Whoami,
    /// Search users by name fragment
    Search {
        /// Name fragment to search for
        query: String,
    },
    /// Browse and answer surveys
    Surveys {
        #[command(subcommand)]
        action: SurveyAction,
    },
    /// Read and write survey comments
    Comments {
        #[command(subcommand)]
        action: CommentAction,
    },
    /// Admin-only operations
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum SurveyAction {
    /// List all visible surveys
    List,
    /// Show one survey with its options
    Show {
        /// Survey ID
        id: SurveyId,
    },
    /// Submit a response
    Respond {
        /// Survey ID
        id: SurveyId,
        /// Option ID to vote for
        option: OptionId,
    },
    /// Show aggregated results as a table and bar chart
    Results {
        /// Survey ID
        id: SurveyId,
    },
    /// Create a survey (admin only)
    Create {
        /// Survey title
        #[arg(short, long)]
        title: String,

        /// The question being asked
        #[arg(short, long)]
        question: String,

        /// Make the survey publicly visible
        #[arg(long)]
        public: bool,

        /// Answer option text (repeat for each option, at least two)
        #[arg(short, long = "option")]
        options: Vec<String>,
    },
}

#[derive(Subcommand)]
enum CommentAction {
    /// List comments on a survey
    List {
        /// Survey ID
        id: SurveyId,
    },
    /// Post a comment (requires login)
    Post {
        /// Survey ID
        id: SurveyId,
        /// Comment body
        content: String,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Grant or revoke admin rights on an account
    SetRole {
        /// User ID
        id: UserId,

        /// New admin flag
        #[arg(long)]
        admin: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;
    let store = SessionStore::new(config.session_file.clone());
    let api = ApiClient::new(&config, store)?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&api, &username, SecretString::from(password)).await?;
        }
        Commands::Register {
            username,
            email,
            password,
        } => {
            commands::auth::register(&api, &username, &email, SecretString::from(password))
                .await?;
        }
        Commands::Logout => commands::auth::logout(&api)?,
        Commands::Whoami => commands::users::whoami(&api).await?,
        Commands::Search { query } => commands::users::search(&api, &query).await?,
        Commands::Surveys { action } => match action {
            SurveyAction::List => commands::surveys::list(&api).await?,
            SurveyAction::Show { id } => commands::surveys::show(&api, id).await?,
            SurveyAction::Respond { id, option } => {
                commands::surveys::respond(&api, id, option).await?;
            }
            SurveyAction::Results { id } => commands::surveys::results(&api, id).await?,
            SurveyAction::Create {
                title,
                question,
                public,
                options,
            } => commands::surveys::create(&api, title, question, public, options).await?,
        },
        Commands::Comments { action } => match action {
            CommentAction::List { id } => commands::forum::list(&api, id).await?,
            CommentAction::Post { id, content } => {
                commands::forum::post(&api, id, &content).await?;
            }
        },
        Commands::Admin { action } => match action {
            AdminAction::SetRole { id, admin } => {
                commands::admin::set_role(&api, id, admin).await?;
            }
        },
    }
    Ok(())
}
