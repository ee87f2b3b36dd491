//! Example: sending an upload notification with in-memory collaborators
//!
//! Runs the pipeline three times: a clean upload, a request without files
//! and a deployment with no email service configured.
//!
//! Run with: `RUST_LOG=notify_rail=debug cargo run --example notify_demo`

use std::time::Duration;

use notify_rail::async_ext::{with_deadline, Callback, Deadline};
use notify_rail::attachments::{FileDescriptor, Request};
use notify_rail::collaborators::{EmailService, MailOptions, MapConfig, RecipientLookup, TemplateData, TransportConfig};
use notify_rail::{send_notification, BoxError, Next, NotificationPipeline, Outcome, PipelineConfig, PipelineError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// Collaborators
// =============================================================================

#[derive(Debug, Clone)]
struct User {
    first_name: String,
    email: String,
}

/// Answers every session with the same user after a short delay.
struct StaticUsers;

impl RecipientLookup<User> for StaticUsers {
    async fn lookup(&self, session_id: &str) -> Outcome<User, BoxError> {
        tracing::info!(session_id, "looking up user");
        tokio::time::sleep(Duration::from_millis(50)).await;
        Outcome::Success(User { first_name: "Jesse".to_owned(), email: "jesse@example.com".to_owned() })
    }
}

fn read_template(path: &str, encoding: &str, done: Callback<String, BoxError>) {
    tracing::info!(path, encoding, "reading template");
    done.succeed("<h1>Hi {{first_name}}</h1><p>{{count}} file(s) from {{email}}</p>".to_owned());
}

fn render(template: &str, data: &TemplateData<User>) -> Result<String, BoxError> {
    Ok(template
        .replace("{{first_name}}", &data.recipient.first_name)
        .replace("{{email}}", &data.recipient.email)
        .replace("{{count}}", &data.attachments.len().to_string()))
}

fn log_transport(config: TransportConfig) -> impl Fn(MailOptions, Callback<String, BoxError>) {
    move |options, done| {
        tracing::info!(
            host = %config.host,
            port = config.port,
            to = %options.to,
            attachments = options.attachments.len(),
            "sending mail"
        );
        done.succeed(format!("250 queued as <{}@{}>", options.attachments.len(), config.host));
    }
}

fn email_service() -> EmailService {
    EmailService {
        host: "localhost".to_owned(),
        port: 2525,
        from: "uploads@example.com".to_owned(),
        to: "security@example.com".to_owned(),
        subject: "New files uploaded".to_owned(),
    }
}

fn report(label: &str, next: Next<String, PipelineError>) {
    match next {
        Next::Handled(info) => println!("{label}: handled ({info})"),
        Next::Untouched => println!("{label}: nothing to do"),
        Next::Error(err) => println!("{label}: error {:?}\n{err:#}", err.error_code()),
    }
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let upload = Request::new().with_session("abc123").with_files(vec![
        FileDescriptor::new("report.pdf", "/tmp/uploads/report.pdf").with_scan("clean"),
        FileDescriptor::new("invoice.exe", "/tmp/uploads/invoice.exe").with_scan("infected"),
    ]);

    let pipeline = NotificationPipeline::new(
        PipelineConfig::default(),
        StaticUsers,
        read_template,
        render,
        MapConfig::new().with("emailService", email_service()),
        log_transport,
    );

    let timed = with_deadline(Duration::from_secs(5), async {
        pipeline
            .run::<User, _, String>(&upload)
            .await
            .into_outcome()
            .get_or_else_with(|| Outcome::Success("nothing to send".to_owned()))
    });
    match timed.await {
        Deadline::Completed(outcome) => {
            println!("with deadline: {}", outcome.fold(|err| err.error_chain(), |info| info))
        },
        Deadline::Elapsed(after) => println!("with deadline: gave up after {after:?}"),
    }

    report("clean upload", send_notification(&pipeline, &upload, |next| next).await);
    report("no files", send_notification(&pipeline, &Request::new().with_session("abc123"), |next| next).await);

    let unconfigured = NotificationPipeline::new(
        PipelineConfig::default(),
        StaticUsers,
        read_template,
        render,
        MapConfig::<EmailService>::new(),
        log_transport,
    );
    report("unconfigured", send_notification(&unconfigured, &upload, |next| next).await);
}
