use newsletter_signup::configuration::get_configuration;
use newsletter_signup::startup::Application;
use newsletter_signup::telemetry::init_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration()?;
    init_subscriber(
        "newsletter_signup".into(),
        "info".into(),
        std::io::stdout,
        &configuration.telemetry,
    )?;

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
