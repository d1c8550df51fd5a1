//! Run the storefront fixture standalone, e.g. to poke at it with a browser
//! or to point the suite at it via `BASE_URL`.

use storefront_e2e::configuration::get_configuration;
use storefront_e2e::storefront::Application;
use storefront_e2e::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("storefront".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let application = Application::build(&configuration.fixture).await?;
    tracing::info!(
        "storefront fixture listening on http://{}:{}",
        configuration.fixture.host,
        application.port()
    );
    application.run_until_stopped().await?;
    Ok(())
}
