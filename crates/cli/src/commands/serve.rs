use std::sync::Arc;

use anyhow::Result;
use roster_http::{AppState, create_router};

use crate::open_service;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let list_service = Arc::new(open_service()?);
    for policy in list_service.policies().iter() {
        let limits = policy.limits();
        tracing::info!(
            resource = %policy.resource(),
            default_page_size = limits.default_page_size(),
            max_page_size = limits.max_page_size(),
            "page limits"
        );
    }

    let router = create_router(Arc::new(AppState::new(list_service)));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
