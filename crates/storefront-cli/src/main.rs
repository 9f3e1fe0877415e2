//! CLI entry point - the composition root.
//!
//! This is the ONLY place where configuration is read from the environment.
//! Command dispatch routes to handlers which delegate to the admin facade.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use storefront_cli::{Cli, CliConfig, CliError, Commands, NavbarCommand, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads STOREFRONT_API_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::with_base_url(cli.base_url))?;

    match command {
        Commands::List { search } => {
            handlers::list::execute(&ctx, search.as_deref()).await?;
        }
        Commands::Show { id } => {
            handlers::show::execute(&ctx, &id).await?;
        }
        Commands::Create {
            name,
            subcategories,
            images,
        } => {
            handlers::create::execute(&ctx, &name, &subcategories, &images).await?;
        }
        Commands::Update {
            id,
            name,
            subcategories,
            image,
        } => {
            handlers::update::execute(
                &ctx,
                &id,
                name.as_deref(),
                &subcategories,
                image.as_ref(),
            )
            .await?;
        }
        Commands::Delete { id } => {
            handlers::delete::execute(&ctx, &id).await?;
        }
        Commands::Navbar { command } => match command {
            NavbarCommand::Add { category } => {
                handlers::navbar::add(&ctx, &category).await?;
            }
        },
    }

    Ok(())
}
