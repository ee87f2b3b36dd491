//! Spy collaborators shared by the pipeline and boundary tests.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use notify_rail::async_ext::Callback;
use notify_rail::attachments::{FileDescriptor, Request};
use notify_rail::collaborators::{
    EmailService, MailOptions, MapConfig, RecipientLookup, Renderer, TemplateData, TemplateSource, Transport,
    TransportConfig, TransportFactory,
};
use notify_rail::{BoxError, NotificationPipeline, Outcome, PipelineConfig, PipelineError, Terminal};

pub const SESSION: &str = "session-42";
pub const TEMPLATE: &str = "<p>Hello {{email}}, {{count}} file(s) attached</p>";

#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub email: String,
}

/// How a callback-style spy completes its callback.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Succeed(&'static str),
    Fail(&'static str),
    Drop,
}

impl Reply {
    fn complete(self, done: Callback<String, BoxError>) {
        match self {
            Reply::Succeed(value) => done.succeed(value.to_owned()),
            Reply::Fail(message) => done.fail(message.into()),
            Reply::Drop => drop(done),
        }
    }
}

pub struct Lookup {
    result: Result<&'static str, &'static str>,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl RecipientLookup<Recipient> for Lookup {
    fn lookup(&self, session_id: &str) -> impl Future<Output = Outcome<Recipient, BoxError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(session_id.to_owned());

        let outcome = match self.result {
            Ok(email) => Outcome::Success(Recipient { email: email.to_owned() }),
            Err(message) => Outcome::Failure(message.into()),
        };
        async move {
            tokio::task::yield_now().await;
            outcome
        }
    }
}

pub struct Templates {
    reply: Reply,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(String, String)>>>,
}

impl TemplateSource for Templates {
    fn read_file(&self, path: &str, encoding: &str, done: Callback<String, BoxError>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((path.to_owned(), encoding.to_owned()));
        self.reply.complete(done);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Render {
    Substitute,
    Fail(&'static str),
    Panic,
}

impl Renderer<Recipient> for Render {
    fn render(&self, template: &str, data: &TemplateData<Recipient>) -> Result<String, BoxError> {
        match self {
            Render::Substitute => Ok(template
                .replace("{{email}}", &data.recipient.email)
                .replace("{{count}}", &data.attachments.len().to_string())),
            Render::Fail(message) => Err((*message).into()),
            Render::Panic => panic!("template engine crashed"),
        }
    }
}

/// Everything the transport side saw.
#[derive(Default)]
pub struct Mailbox {
    configs: Mutex<Vec<TransportConfig>>,
    sent: Mutex<Vec<MailOptions>>,
    sends: AtomicUsize,
}

impl Mailbox {
    pub fn sends(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<MailOptions> {
        self.sent.lock().unwrap().clone()
    }

    pub fn configs(&self) -> Vec<TransportConfig> {
        self.configs.lock().unwrap().clone()
    }
}

pub struct SpyFactory {
    reply: Reply,
    mailbox: Arc<Mailbox>,
}

impl TransportFactory<SpyTransport> for SpyFactory {
    fn create_transport(&self, config: TransportConfig) -> SpyTransport {
        self.mailbox.configs.lock().unwrap().push(config);
        SpyTransport { reply: self.reply, mailbox: Arc::clone(&self.mailbox) }
    }
}

pub struct SpyTransport {
    reply: Reply,
    mailbox: Arc<Mailbox>,
}

impl Transport<String> for SpyTransport {
    fn send_mail(&self, options: MailOptions, done: Callback<String, BoxError>) {
        self.mailbox.sends.fetch_add(1, Ordering::SeqCst);
        self.mailbox.sent.lock().unwrap().push(options);
        self.reply.complete(done);
    }
}

pub type TestPipeline = NotificationPipeline<Lookup, Templates, Render, MapConfig<EmailService>, SpyFactory>;

/// Handles onto the spies after they were moved into a pipeline.
pub struct Spies {
    pub lookups: Arc<AtomicUsize>,
    pub sessions: Arc<Mutex<Vec<String>>>,
    pub template_reads: Arc<AtomicUsize>,
    pub template_args: Arc<Mutex<Vec<(String, String)>>>,
    pub mailbox: Arc<Mailbox>,
}

impl Spies {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn template_reads(&self) -> usize {
        self.template_reads.load(Ordering::SeqCst)
    }
}

/// Collaborator behaviour for one test. `Setup::default()` is the happy path.
pub struct Setup {
    pub config: PipelineConfig,
    pub lookup: Result<&'static str, &'static str>,
    pub template: Reply,
    pub render: Render,
    pub service: Option<EmailService>,
    pub send: Reply,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            config: PipelineConfig::default(),
            lookup: Ok("jesse@example.com"),
            template: Reply::Succeed(TEMPLATE),
            render: Render::Substitute,
            service: Some(email_service()),
            send: Reply::Succeed("info"),
        }
    }
}

impl Setup {
    pub fn build(self) -> (TestPipeline, Spies) {
        let spies = Spies {
            lookups: Arc::default(),
            sessions: Arc::default(),
            template_reads: Arc::default(),
            template_args: Arc::default(),
            mailbox: Arc::default(),
        };

        let settings = match self.service {
            Some(service) => MapConfig::new().with(self.config.service_key.clone(), service),
            None => MapConfig::new(),
        };

        let pipeline = NotificationPipeline::new(
            self.config,
            Lookup { result: self.lookup, calls: Arc::clone(&spies.lookups), seen: Arc::clone(&spies.sessions) },
            Templates {
                reply: self.template,
                calls: Arc::clone(&spies.template_reads),
                seen: Arc::clone(&spies.template_args),
            },
            self.render,
            settings,
            SpyFactory { reply: self.send, mailbox: Arc::clone(&spies.mailbox) },
        );
        (pipeline, spies)
    }
}

pub fn email_service() -> EmailService {
    EmailService {
        host: "smtp.example.com".to_owned(),
        port: 2525,
        from: "noreply@example.com".to_owned(),
        to: "ops@example.com".to_owned(),
        subject: "New upload".to_owned(),
    }
}

pub fn clean_request() -> Request {
    Request::new()
        .with_session(SESSION)
        .with_files(vec![FileDescriptor::new("report.pdf", "/uploads/report.pdf").with_scan("clean")])
}

pub async fn run(pipeline: &TestPipeline, request: &Request) -> Terminal<String, PipelineError> {
    pipeline.run::<Recipient, SpyTransport, String>(request).await
}

/// The failure of a terminal that is expected to have failed.
pub fn failure(terminal: Terminal<String, PipelineError>) -> PipelineError {
    match terminal {
        Terminal::Failure(err) => err,
        other => panic!("expected a failure, got {:?}", other),
    }
}
