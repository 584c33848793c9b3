//! Terminal front-end for the Yoga studio booking API.
//!
//! Each invocation is one screen visit: the command maps onto a [`Route`],
//! the guards run against a fresh in-memory session (logging in first when
//! the route needs it), and the matching view controller performs the
//! action. Nothing is persisted between invocations.


use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use yoga::config::{ConfigError, DEFAULT_API_BASE_URL};
use yoga::form::FormState;
use yoga::route::{self, Route};
use yoga::types::{iso_date, parse_iso_date};
use yoga::views::{
    AccountView, DetailView, FormMode, ListView, LoginView, Navigation, Outcome, RegisterView, SessionFormView,
};
use yoga::{ApiClient, ClientConfig, SessionStore};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("this command needs a login; pass --email/--password or set YOGA_EMAIL/YOGA_PASSWORD")]
    MissingCredentials,
    #[error("login rejected for {0}")]
    LoginRejected(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid {field}: {message}")]
    Invalid { field: &'static str, message: String },
    #[error("{from} is not available; redirected to {to}")]
    Redirected { from: Route, to: Route },
    #[error("{0} is restricted to admins")]
    AdminOnly(&'static str),
    #[error("{0} failed; see log output for the server response")]
    Failed(&'static str),
    #[error("output encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "yoga", about = "Yoga studio booking CLI")]
struct Cli {
    #[arg(long, env = "YOGA_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "YOGA_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "YOGA_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check credentials and print the session information.
    Login,
    Register(RegisterArgs),
    Sessions(SessionsCommand),
    Teachers(TeachersCommand),
    Account(AccountCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    password: String,
}

#[derive(Args, Debug)]
struct SessionsCommand {
    #[command(subcommand)]
    command: SessionsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SessionsSubcommand {
    List,
    Detail { id: u64 },
    Create(SessionFields),
    Update {
        id: u64,
        #[command(flatten)]
        fields: SessionPatch,
    },
    Delete { id: u64 },
    Participate { id: u64 },
    Unparticipate { id: u64 },
}

#[derive(Args, Debug)]
struct SessionFields {
    #[arg(long)]
    name: String,
    /// `YYYY-MM-DD`.
    #[arg(long)]
    date: String,
    #[arg(long)]
    teacher: u64,
    #[arg(long)]
    description: String,
}

#[derive(Args, Debug, Default)]
struct SessionPatch {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    teacher: Option<u64>,
    #[arg(long)]
    description: Option<String>,
}

#[derive(Args, Debug)]
struct TeachersCommand {
    #[command(subcommand)]
    command: TeachersSubcommand,
}

#[derive(Subcommand, Debug)]
enum TeachersSubcommand {
    List,
    Detail { id: u64 },
}

#[derive(Args, Debug)]
struct AccountCommand {
    #[command(subcommand)]
    command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
enum AccountSubcommand {
    Show,
    Delete,
}

#[derive(Debug, Clone)]
struct Credentials {
    email: Option<String>,
    password: Option<String>,
}

impl Command {
    /// Screen this command stands in for.
    fn route(&self) -> Route {
        match self {
            Self::Login => Route::Login,
            Self::Register(_) => Route::Register,
            Self::Sessions(cmd) => match &cmd.command {
                SessionsSubcommand::List => Route::Sessions,
                SessionsSubcommand::Create(_) => Route::SessionCreate,
                SessionsSubcommand::Update { id, .. } => Route::SessionUpdate(*id),
                SessionsSubcommand::Detail { id }
                | SessionsSubcommand::Delete { id }
                | SessionsSubcommand::Participate { id }
                | SessionsSubcommand::Unparticipate { id } => Route::SessionDetail(*id),
            },
            // Teacher data is only reachable from the session screens.
            Self::Teachers(_) => Route::Sessions,
            Self::Account(_) => Route::Account,
        }
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::with_base_url(&cli.base_url)?;
    let api = ApiClient::native(config, SessionStore::new());
    let credentials = Credentials { email: cli.email, password: cli.password };

    let route = cli.command.route();
    if route.requires_auth() {
        log_in(&api, &credentials).await?;
    }
    let landed = route::resolve(route, api.store());
    if landed != route {
        return Err(CliError::Redirected { from: route, to: landed });
    }

    match cli.command {
        Command::Login => run_login(&api, &credentials).await,
        Command::Register(args) => run_register(&api, args).await,
        Command::Sessions(cmd) => run_sessions(&api, cmd.command).await,
        Command::Teachers(cmd) => run_teachers(&api, cmd.command).await,
        Command::Account(cmd) => run_account(&api, cmd.command).await,
    }
}

async fn log_in(api: &ApiClient, credentials: &Credentials) -> Result<(), CliError> {
    let (Some(email), Some(password)) = (&credentials.email, &credentials.password) else {
        return Err(CliError::MissingCredentials);
    };
    let mut view = LoginView::new();
    view.form.set("email", email.as_str());
    view.form.set("password", password.as_str());
    ensure_valid(&view.form, &["email", "password"])?;

    let outcome = view.submit(api).await;
    if view.on_error || outcome.route() != Some(Route::Sessions) {
        return Err(CliError::LoginRejected(email.clone()));
    }
    tracing::info!(%email, "logged in");
    Ok(())
}

async fn run_login(api: &ApiClient, credentials: &Credentials) -> Result<(), CliError> {
    log_in(api, credentials).await?;
    print_json(&api.store().information())
}

async fn run_register(api: &ApiClient, args: RegisterArgs) -> Result<(), CliError> {
    let mut view = RegisterView::new();
    view.form.set("email", args.email);
    view.form.set("firstName", args.first_name);
    view.form.set("lastName", args.last_name);
    view.form.set("password", args.password);
    ensure_valid(&view.form, &["email", "firstName", "lastName", "password"])?;

    let outcome = view.submit(api).await;
    if view.on_error {
        return Err(CliError::Failed("registration"));
    }
    report(&outcome, "registered");
    Ok(())
}

async fn run_sessions(api: &ApiClient, command: SessionsSubcommand) -> Result<(), CliError> {
    match command {
        SessionsSubcommand::List => {
            let mut view = ListView::new();
            view.load(api).await;
            if view.on_error {
                return Err(CliError::Failed("session list"));
            }
            print_json(&view.sessions)
        }
        SessionsSubcommand::Detail { id } => {
            let view = fetch_detail(api, id).await?;
            print_json(&serde_json::json!({
                "session": view.session,
                "teacher": view.teacher,
                "participating": view.is_participate,
            }))
        }
        SessionsSubcommand::Create(fields) => {
            let mut view = open_form(api, FormMode::Create).await?;
            apply_fields(&mut view.form, &fields);
            save_form(api, view).await
        }
        SessionsSubcommand::Update { id, fields } => {
            let mut view = open_form(api, FormMode::Update(id)).await?;
            apply_patch(&mut view.form, &fields);
            save_form(api, view).await
        }
        SessionsSubcommand::Delete { id } => {
            let mut view = detail_view(api, id)?;
            let outcome = view.delete(api).await;
            finish_delete(&view, &outcome)
        }
        SessionsSubcommand::Participate { id } => {
            let mut view = detail_view(api, id)?;
            view.participate(api).await;
            finish_toggle(&view)
        }
        SessionsSubcommand::Unparticipate { id } => {
            let mut view = detail_view(api, id)?;
            view.un_participate(api).await;
            finish_toggle(&view)
        }
    }
}

async fn run_teachers(api: &ApiClient, command: TeachersSubcommand) -> Result<(), CliError> {
    let teachers = api.teachers();
    match command {
        TeachersSubcommand::List => match teachers.list().await {
            Ok(list) => print_json(&list),
            Err(e) => {
                tracing::warn!(error = %e, "teacher list unavailable");
                Err(CliError::Failed("teacher list"))
            }
        },
        TeachersSubcommand::Detail { id } => match teachers.detail(id).await {
            Ok(teacher) => print_json(&teacher),
            Err(e) => {
                tracing::warn!(teacher_id = id, error = %e, "teacher unavailable");
                Err(CliError::Failed("teacher detail"))
            }
        },
    }
}

async fn run_account(api: &ApiClient, command: AccountSubcommand) -> Result<(), CliError> {
    let mut view = AccountView::new();
    match command {
        AccountSubcommand::Show => {
            view.load(api).await;
            if view.on_error {
                return Err(CliError::Failed("account lookup"));
            }
            let Some(user) = view.user else {
                return Err(CliError::Failed("account lookup"));
            };
            println!("Name: {}", user.display_name());
            println!("Email: {}", user.email);
            if user.admin {
                println!("You are admin");
            }
            Ok(())
        }
        AccountSubcommand::Delete => {
            let outcome = view.delete(api).await;
            if view.on_error {
                return Err(CliError::Failed("account delete"));
            }
            report(&outcome, "account deleted");
            Ok(())
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn detail_view(api: &ApiClient, id: u64) -> Result<DetailView, CliError> {
    DetailView::new(id, api.store()).ok_or(CliError::MissingCredentials)
}

async fn fetch_detail(api: &ApiClient, id: u64) -> Result<DetailView, CliError> {
    let mut view = detail_view(api, id)?;
    view.fetch(api).await;
    if view.on_error {
        return Err(CliError::Failed("session detail"));
    }
    Ok(view)
}

fn finish_delete(view: &DetailView, outcome: &Outcome) -> Result<(), CliError> {
    if !view.is_admin {
        return Err(CliError::AdminOnly("session delete"));
    }
    if view.on_error {
        return Err(CliError::Failed("session delete"));
    }
    report(outcome, "deleted");
    Ok(())
}

fn finish_toggle(view: &DetailView) -> Result<(), CliError> {
    if view.on_error {
        return Err(CliError::Failed("participation change"));
    }
    let state = if view.is_participate { "participating" } else { "not participating" };
    println!("{state} in session {}", view.session_id);
    Ok(())
}

async fn open_form(api: &ApiClient, mode: FormMode) -> Result<SessionFormView, CliError> {
    let view = SessionFormView::open(mode, api)
        .await
        .map_err(|to| CliError::Redirected { from: mode.route(), to })?;
    if view.on_error {
        return Err(CliError::Failed("session form load"));
    }
    Ok(view)
}

fn apply_fields(form: &mut FormState, fields: &SessionFields) {
    form.set("name", fields.name.as_str());
    form.set("date", fields.date.as_str());
    form.set("teacher_id", fields.teacher.to_string());
    form.set("description", fields.description.as_str());
}

fn apply_patch(form: &mut FormState, patch: &SessionPatch) {
    if let Some(name) = &patch.name {
        form.set("name", name.as_str());
    }
    if let Some(date) = &patch.date {
        form.set("date", date.as_str());
    }
    if let Some(teacher) = patch.teacher {
        form.set("teacher_id", teacher.to_string());
    }
    if let Some(description) = &patch.description {
        form.set("description", description.as_str());
    }
}

async fn save_form(api: &ApiClient, mut view: SessionFormView) -> Result<(), CliError> {
    ensure_valid(&view.form, &["name", "date", "teacher_id", "description"])?;
    let date = view.form.get("date");
    let Some(parsed) = parse_iso_date(date) else {
        return Err(CliError::Invalid { field: "date", message: format!("expected YYYY-MM-DD, got {date}") });
    };
    if view.payload().is_none() {
        return Err(CliError::Invalid { field: "teacher_id", message: "expected a numeric teacher id".to_owned() });
    }
    let outcome = view.submit(api).await;
    if view.on_error {
        return Err(CliError::Failed("session save"));
    }
    report(&outcome, &format!("saved session on {}", iso_date(parsed)));
    Ok(())
}

/// First failing field among `fields`, as a CLI error.
fn ensure_valid(form: &FormState, fields: &[&'static str]) -> Result<(), CliError> {
    for &field in fields {
        if let Some(err) = form.errors(field).first() {
            return Err(CliError::Invalid { field, message: err.to_string() });
        }
    }
    Ok(())
}

/// Print the outcome's notice, or `fallback` when it has none.
fn report(outcome: &Outcome, fallback: &str) {
    let message = outcome
        .notice
        .as_ref()
        .map_or(fallback, |notice| notice.message.as_str());
    println!("{message}");
    match outcome.navigation {
        Some(Navigation::To(route)) => tracing::debug!(%route, "next screen"),
        Some(Navigation::Back) | None => {}
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
