//! `school-cli`: admin command line for the school backend.
//!
//! Talks to the same REST API as the browser app. Results go to stdout so
//! they can be piped; failures surface as a non-zero exit with the error on
//! stderr.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

mod render;

use std::time::Duration;

use clap::{Parser, Subcommand};
use records::ApiError;
use records::bulk::Identified;
use records::endpoints::{self, Resource};
use records::forms::LoginForm;
use records::pivot::{PivotError, build_month_pivot};
use records::search::Searchable;
use records::types::{
    AttendanceRecord, AuthTokens, BulkDeleteResponse, ClassCountRecord, Director, DirectorTiming, EarningRecord,
    Employee, EmployeeClassCount, ExpenseRecord, Student,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::render::{Summary, render_pivot, summary_lines};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}; run `school-cli login` and set SCHOOL_ACCESS_TOKEN")]
    SessionRejected(ApiError),
    #[error("unknown resource `{0}`")]
    UnknownResource(String),
    #[error("`{0}` has no bulk-delete endpoint")]
    NoBulkDelete(&'static str),
    #[error("month must be 1-12, got {0}")]
    InvalidMonth(u32),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Pivot(#[from] PivotError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "school-cli", about = "School administration backend CLI")]
struct Cli {
    #[arg(long, env = "SCHOOL_API_BASE_URL", default_value = "http://localhost:5000/api")]
    base_url: String,

    #[arg(long, env = "SCHOOL_ACCESS_TOKEN")]
    token: Option<String>,

    /// Front-end server, used by `ping`.
    #[arg(long, env = "SCHOOL_SITE_URL", default_value = "http://127.0.0.1:3000")]
    site_url: String,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    site_url: String,
    token: Option<String>,
    timeout: Duration,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the front-end server's health endpoint.
    Ping,
    /// Exchange credentials for an access token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SCHOOL_PASSWORD")]
        password: String,
    },
    /// List a collection, one line per record.
    List {
        resource: String,
        #[arg(long)]
        search: Option<String>,
        /// Print the raw JSON body instead of summaries.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    Get {
        resource: String,
        id: String,
    },
    Delete {
        resource: String,
        id: String,
    },
    BulkDelete {
        resource: String,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Render the running-month class-count table.
    Pivot {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        #[arg(long)]
        year: i32,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        site_url: cli.site_url,
        token: cli.token.filter(|t| !t.trim().is_empty()),
        timeout: Duration::from_secs(cli.timeout_secs.max(1)),
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Login { email, password } => run_login(&ctx, email, password).await,
        Command::List { resource, search, json } => run_list(&ctx, &resource, search.as_deref(), json).await,
        Command::Get { resource, id } => {
            let path = parse_resource(&resource)?.item(&id);
            print_json(&api_request(&ctx, reqwest::Method::GET, &path, None).await?)
        }
        Command::Delete { resource, id } => {
            let path = parse_resource(&resource)?.item(&id);
            api_request(&ctx, reqwest::Method::DELETE, &path, None).await?;
            println!("deleted {id}");
            Ok(())
        }
        Command::BulkDelete { resource, ids } => run_bulk_delete(&ctx, &resource, ids).await,
        Command::Pivot { month, year } => run_pivot(&ctx, month, year).await,
    }
}

fn parse_resource(raw: &str) -> Result<Resource, CliError> {
    Resource::from_slug(raw).ok_or_else(|| CliError::UnknownResource(raw.to_owned()))
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = http_client(cli)?;
    let url = endpoints::join(&cli.site_url, "/healthz");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(response_error(status.as_u16(), &body));
    }
    println!("ok");
    Ok(())
}

async fn run_login(cli: &CliContext, email: String, password: String) -> Result<(), CliError> {
    let payload = LoginForm { email, password }.validate().map_err(|errors| CliError::Invalid(errors.to_string()))?;
    let body = serde_json::to_value(&payload)?;
    let value = send(cli, reqwest::Method::POST, endpoints::LOGIN, Some(body), None).await?;
    let tokens = serde_json::from_value::<AuthTokens>(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(user) = &tokens.user {
        eprintln!("signed in as {}", user.name);
    }
    println!("{}", tokens.access_token);
    Ok(())
}

async fn run_list(cli: &CliContext, raw: &str, search: Option<&str>, json: bool) -> Result<(), CliError> {
    let resource = parse_resource(raw)?;
    let value = api_request(cli, reqwest::Method::GET, resource.path(), None).await?;
    if json {
        return print_json(&value);
    }

    let term = search.unwrap_or("");
    let lines = match resource {
        Resource::Students => summarize::<Student>(value, term)?,
        Resource::Employees | Resource::Teachers => summarize::<Employee>(value, term)?,
        Resource::Directors => summarize::<Director>(value, term)?,
        Resource::Attendance => summarize::<AttendanceRecord>(value, term)?,
        Resource::Expenses => summarize::<ExpenseRecord>(value, term)?,
        Resource::Earnings => summarize::<EarningRecord>(value, term)?,
        Resource::ClassCount => summarize::<ClassCountRecord>(value, term)?,
        Resource::ManagementTiming => summarize::<DirectorTiming>(value, term)?,
        // Aggregates have no one-line form; `pivot` renders them.
        Resource::MonthlyClassCount => return print_json(&value),
    };
    eprintln!("{} record(s)", lines.len());
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn summarize<T>(value: Value, term: &str) -> Result<Vec<String>, CliError>
where
    T: DeserializeOwned + Searchable + Summary + Identified + Clone,
{
    let items = serde_json::from_value::<Vec<T>>(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(summary_lines(&items, term))
}

async fn run_bulk_delete(cli: &CliContext, raw: &str, ids: Vec<String>) -> Result<(), CliError> {
    let resource = parse_resource(raw)?;
    let path = resource.bulk_delete().ok_or(CliError::NoBulkDelete(resource.slug()))?;
    let body = serde_json::json!({ "ids": ids });
    let value = api_request(cli, reqwest::Method::DELETE, &path, Some(body)).await?;
    let response = serde_json::from_value::<BulkDeleteResponse>(value).map_err(|e| ApiError::Decode(e.to_string()))?;

    println!("deleted {}", response.succeeded.len());
    for failure in &response.failed {
        println!("failed {}: {}", failure.id, failure.message);
    }
    let unreported = ids
        .iter()
        .filter(|id| !response.succeeded.contains(id) && !response.failed.iter().any(|f| &f.id == *id))
        .collect::<Vec<_>>();
    for id in unreported {
        println!("unconfirmed {id}");
    }
    Ok(())
}

async fn run_pivot(cli: &CliContext, month: u32, year: i32) -> Result<(), CliError> {
    let month0 = month.checked_sub(1).filter(|m| *m < 12).ok_or(CliError::InvalidMonth(month))?;
    let path = endpoints::monthly_class_count(month0, year);
    let value = api_request(cli, reqwest::Method::GET, &path, None).await?;
    let data = serde_json::from_value::<Vec<EmployeeClassCount>>(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    let pivot = build_month_pivot(month0, year, &data)?;
    println!("{}", render_pivot(&pivot));
    Ok(())
}

fn http_client(cli: &CliContext) -> Result<reqwest::Client, CliError> {
    Ok(reqwest::Client::builder().timeout(cli.timeout).build()?)
}

/// Authenticated request; fails before any I/O when no token is configured.
async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let token = cli.token.as_deref().ok_or(CliError::SessionRejected(ApiError::Unauthenticated))?;
    send(cli, method, path, body, Some(token)).await
}

async fn send(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Result<Value, CliError> {
    let client = http_client(cli)?;
    let url = endpoints::join(&cli.base_url, path);

    let mut request = client.request(method, &url);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    if let Some(json) = body {
        request = request.json(&json);
    }

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(response_error(status.as_u16(), &text));
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

/// Non-2xx response as a CLI error; 401/403 point the user at `login`.
fn response_error(status: u16, body: &str) -> CliError {
    let err = ApiError::from_response(status, body);
    if err.is_auth_failure() { CliError::SessionRejected(err) } else { CliError::Api(err) }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
