use overhead::config::AppConfig;
use overhead::logging;
use overhead::module::renderer;
use overhead::module::FlyoverPipeline;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load_or_default("config.toml");

    let _logging_guard = logging::init_logging("logs", "overhead", &config.log_level);

    tracing::info!("Overhead starting...");
    tracing::debug!(
        "Endpoints: ip={} geo={} pass={}",
        config.endpoints.ip_api,
        config.endpoints.geo_api,
        config.endpoints.pass_api
    );

    let pipeline = FlyoverPipeline::new(&config)?;

    match pipeline.next_passes().await {
        Ok(passes) => {
            if passes.is_empty() {
                tracing::info!("No upcoming passes returned for this location");
            }
            for line in renderer::render_passes(&passes) {
                println!("{}", line);
            }
        }
        Err(e) => {
            tracing::error!("Flyover lookup failed: {}", e);
            println!("It didn't work! {}", e);
        }
    }

    Ok(())
}
