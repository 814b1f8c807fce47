//! Campus CLI - administrative console for the education platform.
//!
//! # Configuration
//!
//! Settings are resolved with this priority:
//!
//! 1. CLI flags (`--api-url`)
//! 2. Environment variables (`CAMPUS_API_URL`, `CAMPUS_TOKEN_FILE`, `CAMPUS_TIMEOUT_SECS`)
//! 3. Config file (`<config dir>/campus/config.toml`)
//! 4. Defaults
//!
//! The session token survives between runs in `<config dir>/campus/session.json`
//! unless `--ephemeral` is given.

mod commands;
mod output;

use anyhow::Result;
use campus_application::{CampusApp, RestoreOutcome, TokenPersistence, token_store_for};
use campus_core::auth::AuthFailureHook;
use campus_core::user::Role;
use campus_infrastructure::ConfigService;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use commands::Context;
use commands::assignments::AssignmentAction;
use commands::courses::CourseAction;
use commands::enrollments::EnrollmentAction;
use commands::students::StudentAction;
use commands::submissions::SubmissionAction;
use commands::teachers::TeacherAction;
use commands::users::UserAction;
use output::Output;

#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(version, about = "Campus - administrative console for an education platform", long_about = None)]
struct Cli {
    /// API base URL (overrides CAMPUS_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Keep the session token in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CAMPUS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Create an account (does not log in)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CAMPUS_PASSWORD", hide_env_values = true)]
        password: String,
        /// ADMIN, TEACHER or STUDENT
        #[arg(long, default_value = "STUDENT")]
        role: Role,
    },
    /// Show the logged-in user
    Whoami,
    /// Platform overview
    Dashboard,
    /// Manage courses
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },
    /// Manage enrollments
    Enrollments {
        #[command(subcommand)]
        action: EnrollmentAction,
    },
    /// Manage students
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },
    /// Manage teachers
    Teachers {
        #[command(subcommand)]
        action: TeacherAction,
    },
    /// Manage accounts of any role
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage assignments
    Assignments {
        #[command(subcommand)]
        action: AssignmentAction,
    },
    /// Manage submissions
    Submissions {
        #[command(subcommand)]
        action: SubmissionAction,
    },
}

impl Commands {
    /// Commands that start from a fresh session instead of resuming one.
    fn skips_restore(&self) -> bool {
        matches!(self, Commands::Login { .. } | Commands::Logout | Commands::Register { .. })
    }
}

/// Tells the user to log in again when the API rejects the session.
struct LoginPrompt;

impl AuthFailureHook for LoginPrompt {
    fn on_auth_failure(&self) {
        eprintln!("Session expired or not logged in. Run `campus login` to sign in again.");
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug,hyper=warn,hyper_util=warn,h2=warn,reqwest=warn,rustls=warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ConfigService::new().get_config()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let persistence = if cli.ephemeral {
        TokenPersistence::Ephemeral
    } else {
        TokenPersistence::File
    };
    let token_store = token_store_for(&config, persistence)?;
    let app = CampusApp::bootstrap(&config, token_store, Arc::new(LoginPrompt))?;

    if !cli.command.skips_restore() {
        match app.init().await {
            RestoreOutcome::Restored(user) => {
                tracing::debug!(user_id = %user.id, "Resumed session");
            }
            RestoreOutcome::Deferred(e) => {
                tracing::warn!(error = %e, "Continuing without a validated session");
            }
            RestoreOutcome::NoStoredToken | RestoreOutcome::InvalidTokenPurged => {}
        }
    }

    let ctx = Context {
        app,
        output: Output::new(cli.json),
    };

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&ctx, &email, &password).await,
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Register {
            name,
            email,
            password,
            role,
        } => commands::auth::register(&ctx, &name, &email, &password, role).await,
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Dashboard => commands::dashboard::show(&ctx).await,
        Commands::Courses { action } => commands::courses::run(&ctx, action).await,
        Commands::Enrollments { action } => commands::enrollments::run(&ctx, action).await,
        Commands::Students { action } => commands::students::run(&ctx, action).await,
        Commands::Teachers { action } => commands::teachers::run(&ctx, action).await,
        Commands::Users { action } => commands::users::run(&ctx, action).await,
        Commands::Assignments { action } => commands::assignments::run(&ctx, action).await,
        Commands::Submissions { action } => commands::submissions::run(&ctx, action).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_course_filters() {
        let cli = Cli::try_parse_from([
            "campus",
            "--json",
            "courses",
            "list",
            "--title",
            "Alg",
            "--student-id",
            "3",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Courses {
                action: CourseAction::List { title, student_id, assignment_title },
            } => {
                assert_eq!(title.as_deref(), Some("Alg"));
                assert_eq!(student_id.as_deref(), Some("3"));
                assert_eq!(assignment_title, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_register_role() {
        let cli = Cli::try_parse_from([
            "campus", "register", "--name", "Lin", "--email", "lin@example.com", "--password",
            "pw", "--role", "teacher",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Register { role: Role::Teacher, .. }));
    }

    #[test]
    fn test_parse_enroll_many() {
        let cli = Cli::try_parse_from([
            "campus", "courses", "enroll-many", "42", "--student-id", "3", "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Courses {
                action: CourseAction::EnrollMany { id, student_ids },
            } => {
                assert_eq!(id, 42);
                assert_eq!(student_ids, vec!["3", "4"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_login_and_logout_skip_restore() {
        let login = Cli::try_parse_from(["campus", "login", "--email", "a@b.c", "--password", "x"]).unwrap();
        assert!(login.command.skips_restore());
        let dashboard = Cli::try_parse_from(["campus", "dashboard"]).unwrap();
        assert!(!dashboard.command.skips_restore());
    }

    #[test]
    fn test_assignment_status_commands() {
        let cli = Cli::try_parse_from(["campus", "assignments", "reopen", "5"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Assignments {
                action: AssignmentAction::Reopen { id: 5 }
            }
        ));
    }
}
