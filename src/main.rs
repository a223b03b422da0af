use feelmitra_notifier::{configuration::MailBackend, *};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("feelmitra_notifier".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");
    if configuration.email.backend == MailBackend::Smtp
        && configuration.email.smtp.username.is_empty()
    {
        tracing::warn!("MAILGUN_SMTP_USERNAME is not set, the relay will be used without AUTH");
    }

    let application = Application::build(configuration)?;
    tracing::info!(port = application.port(), "Listening for subscriptions");
    application.run_until_stopped().await
}
