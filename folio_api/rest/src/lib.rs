use std::net::SocketAddr;

use axum::Router;
use folio_core_contact_contracts::ContactService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact, config: RestServerConfig) -> Self {
        Self { contact, config }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.config.addr).await?;
        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .await
            .map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new().merge(routes::contact::router(self.contact.into()));

        // Layers added last run first, so every span sees the request id.
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
