//! HTTP server startup.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{Result, SidecarError};

/// A bound listener, ready to serve a router.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Server {
    /// Bind the listener. Fails if the address is in use or not permitted.
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| SidecarError::Bind { addr, source })?;
        let addr = listener
            .local_addr()
            .map_err(|source| SidecarError::Bind { addr, source })?;

        Ok(Self { listener, addr })
    }

    /// Address the listener is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve `router` until `shutdown` resolves.
    ///
    /// The startup line is logged before the serve loop is entered.
    pub async fn run<F>(self, router: Router, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(addr = %self.addr, "sidecar listening");

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(SidecarError::Serve)?;

        info!("sidecar stopped");
        Ok(())
    }
}
