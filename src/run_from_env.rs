use std::net::{Ipv4Addr, SocketAddrV4};

use crate::config::get_config;
use crate::orthanc_client::OrthancClient;
use crate::server::router;
use crate::settings::WorklistSettings;

/// Calls [run_server] using configuration from environment variables.
pub async fn run_server_from_env() -> anyhow::Result<()> {
    let settings = get_config().extract()?;
    run_server(settings).await
}

/// Serve the worklist on all interfaces until the process is stopped.
pub async fn run_server(settings: WorklistSettings) -> anyhow::Result<()> {
    let address = SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, settings.listener_port);
    let client = OrthancClient::new(settings.orthanc.clone())?;
    tracing::info!(
        orthanc = %settings.orthanc.url,
        archive_timeout = ?settings.archive_timeout,
        study_limit = settings.study_limit,
        "starting worklist"
    );
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on: http://{}", address);
    axum::serve(listener, router(client, settings)).await?;
    Ok(())
}
