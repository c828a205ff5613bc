use anyhow::Context;
use clap::Parser;
use componentdoc_mcp::cli::{Cli, Commands};
use componentdoc_mcp::error::Result;
use componentdoc_mcp::tools::{
    InspectComponentRequest, ListComponentsRequest, SearchRequest, handle_inspect_component,
    handle_list_components, handle_search,
};
use componentdoc_mcp::tracing::LogFormat;
use componentdoc_mcp::{Catalog, CatalogState, ComponentServer, Config};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    componentdoc_mcp::tracing::init(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    });

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load config")?;
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path),
        None => config.load_catalog(),
    }
    .context("Failed to load component catalog")?;
    let state = CatalogState::new(catalog, config.default_limit);

    let output = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => return serve(state).await,
        Commands::Search {
            query,
            category,
            limit,
        } => handle_search(
            &state,
            SearchRequest {
                query,
                category,
                limit,
            },
        ),
        Commands::List { category } => {
            handle_list_components(&state, ListComponentsRequest { category })
        }
        Commands::Inspect { key } => {
            handle_inspect_component(&state, InspectComponentRequest { key })
        }
    };

    let output = output.map_err(anyhow::Error::msg)?;
    print!("{}", output);
    Ok(())
}

async fn serve(state: CatalogState) -> Result<()> {
    tracing::info!(
        "Starting componentdoc-mcp MCP server with {} components",
        state.catalog().len()
    );

    let server = ComponentServer::new(state);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}
