//! Serve Command
//!
//! Run the HTTP service.
//!
//! Usage:
//!   repolens serve [--host 127.0.0.1] [--port 8080]

use crate::cli::{CommandContext, runtime};
use crate::server;
use crate::types::Result;

pub fn run(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = ctx.config;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    runtime()?.block_on(server::serve(&config))
}
