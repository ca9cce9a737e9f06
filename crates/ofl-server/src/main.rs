use ofl_server::{OflServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = ServerConfig::from_env()?;
    OflServer::new(config).serve().await?;
    Ok(())
}
