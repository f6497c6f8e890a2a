use axiwatt::configuration::Environment;
use axiwatt::get_configuration;
use axiwatt::startup::Application;
use axiwatt::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("axiwatt".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let environment = Environment::current().map_err(anyhow::Error::msg)?;
    let application = Application::build(configuration).await?;

    tracing::info!(
        port = application.port(),
        environment = environment.as_str(),
        "Server running"
    );
    application.run_until_stopped().await?;
    Ok(())
}
