use anyhow::Result;

use leavedesk::{config::Settings, App};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;

    // Logging is initialized in App::run() with buffer support
    App::new(settings).run().await?;

    Ok(())
}
