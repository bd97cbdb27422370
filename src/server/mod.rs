//! JSON-over-HTTP front end.
//!
//! A fixed pool of worker threads pulls requests off one shared
//! `tiny_http::Server`. Each request is routed, validated and rendered
//! independently; workers share nothing but the read-only configuration.

pub mod response;
pub mod routes;

use crate::{Error, IdenticonConfig, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tiny_http::Server;

/// Configuration for the HTTP server
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change.
///
/// # Examples
///
/// ```
/// let cfg = bishopicon::server::ServerConfig::default();
/// assert_eq!(cfg.defaults.board_size, 7);
/// assert!(cfg.workers > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: String,
    /// Number of request worker threads
    pub workers: usize,
    /// Parameters used by the short routes
    pub defaults: IdenticonConfig,
    /// Largest board size accepted from a URL
    pub max_board_size: u32,
    /// Largest iteration count accepted from a URL
    pub max_iterations: u32,
    /// Largest canvas size accepted from a URL
    pub max_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            workers: num_cpus::get().max(1),
            defaults: IdenticonConfig::default(),
            max_board_size: 64,
            max_iterations: 1024,
            max_size: 4096,
        }
    }
}

impl ServerConfig {
    /// Load a JSON config file; missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            Error::ConfigError(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::ConfigError("workers must be at least 1".into()));
        }
        if self.max_board_size == 0 || self.max_iterations == 0 || self.max_size == 0 {
            return Err(Error::ConfigError("limits must be positive".into()));
        }
        self.defaults
            .validate()
            .map_err(|e| Error::ConfigError(format!("defaults: {}", e)))?;
        if self.defaults.board_size > self.max_board_size
            || self.defaults.iterations > self.max_iterations
            || self.defaults.size > self.max_size
        {
            return Err(Error::ConfigError("defaults exceed the configured limits".into()));
        }
        Ok(())
    }
}

/// A bound server, ready to start its workers.
pub struct IdenticonServer {
    server: Arc<Server>,
    addr: SocketAddr,
    config: Arc<ServerConfig>,
    shutdown: Arc<AtomicBool>,
}

/// Stops a running server from another thread.
#[derive(Clone)]
pub struct ShutdownHandle {
    server: Arc<Server>,
    shutdown: Arc<AtomicBool>,
    workers: usize,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        // One unblock per worker blocked in recv()
        for _ in 0..self.workers {
            self.server.unblock();
        }
    }
}

impl IdenticonServer {
    /// Validate `config` and bind its listen address.
    pub fn bind(config: ServerConfig) -> Result<Self> {
        config.validate()?;
        let server = Server::http(config.bind.as_str())
            .map_err(|e| Error::ServerError(format!("failed to bind {}: {}", config.bind, e)))?;
        let addr = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| Error::ServerError("listener has no IP address".into()))?;
        info!("listening on http://{}", addr);
        Ok(Self {
            server: Arc::new(server),
            addr,
            config: Arc::new(config),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            server: Arc::clone(&self.server),
            shutdown: Arc::clone(&self.shutdown),
            workers: self.config.workers,
        }
    }

    /// Start the worker pool and return immediately.
    pub fn spawn(self) -> Result<Vec<JoinHandle<()>>> {
        let mut handles = Vec::with_capacity(self.config.workers);
        for id in 0..self.config.workers {
            let server = Arc::clone(&self.server);
            let config = Arc::clone(&self.config);
            let shutdown = Arc::clone(&self.shutdown);
            let handle = thread::Builder::new()
                .name(format!("bishopicon-worker-{}", id))
                .spawn(move || worker_loop(id, &server, &config, &shutdown))
                .map_err(|e| Error::ServerError(format!("failed to spawn worker: {}", e)))?;
            handles.push(handle);
        }
        debug!("started {} workers", handles.len());
        Ok(handles)
    }

    /// Serve until shut down (blocking).
    pub fn run(self) -> Result<()> {
        for handle in self.spawn()? {
            if handle.join().is_err() {
                warn!("worker thread panicked");
            }
        }
        info!("server stopped");
        Ok(())
    }
}

fn worker_loop(id: usize, server: &Server, config: &ServerConfig, shutdown: &AtomicBool) {
    loop {
        match server.recv() {
            Ok(request) => {
                let host = response::host_header(&request);
                let reply =
                    routes::dispatch(request.method(), request.url(), host.as_deref(), config);
                debug!(
                    "worker {}: {} {} -> {}",
                    id,
                    request.method(),
                    request.url(),
                    reply.status
                );
                if let Err(e) = response::send_json(request, reply) {
                    warn!("worker {}: {}", id, e);
                }
            }
            Err(e) => {
                if shutdown.load(Ordering::SeqCst) {
                    break;
                }
                warn!("worker {}: recv failed: {}", id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let cfg = ServerConfig {
            workers: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn defaults_must_fit_limits() {
        let cfg = ServerConfig {
            max_board_size: 5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_file_overrides_some_keys() {
        let dir = std::env::temp_dir().join(format!("bishopicon-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("server.json");
        std::fs::write(
            &path,
            r#"{"bind": "0.0.0.0:9999", "defaults": {"board_size": 9}}"#,
        )
        .unwrap();

        let cfg = ServerConfig::from_file(&path).unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:9999");
        assert_eq!(cfg.defaults.board_size, 9);
        assert_eq!(cfg.defaults.size, 300);
        assert_eq!(cfg.max_size, 4096);

        std::fs::write(&path, r#"{"port": 1}"#).unwrap();
        assert!(matches!(
            ServerConfig::from_file(&path),
            Err(Error::ConfigError(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
