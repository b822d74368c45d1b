//! Server startup utilities
//!
//! Tracing goes to stderr because stdout carries the MCP protocol.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for an MCP server.
///
/// Logs to stderr without ANSI colors, filtered via `RUST_LOG` with a
/// default of `info` for the given crate. Set `LOG_FORMAT=json` for
/// structured output suitable for log aggregation.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

/// Standardized MCP server startup over stdio.
///
/// Expands to a complete `#[tokio::main] async fn main()` that initializes
/// tracing, evaluates the server constructor expression (which may use `?`
/// for fatal startup errors such as an invalid workspace), serves the MCP
/// protocol over stdio, and waits for shutdown.
///
/// ```rust,ignore
/// use server::MyMcpServer;
///
/// mcp_common::serve_stdio!(MyMcpServer::from_env()?, "my_mcp");
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($server:expr, $crate_name:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = $server;
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}
