//! Kore CLI entry point

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kore")]
#[command(about = "Kore - chat with configurable LLM agents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or update the Kore configuration
    Onboard,

    /// List the available agents and their inputs
    Agents,

    /// Chat with an agent
    Chat {
        /// Agent to talk to (prompted for when omitted)
        #[arg(short, long)]
        agent: Option<String>,

        /// Agent input as KEY=VALUE; list inputs take comma separated values
        #[arg(short, long = "input")]
        inputs: Vec<String>,

        /// Send a single message and print the reply
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Show Kore status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Ctrl+C twice within 3 seconds exits
    let exit_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let r = exit_flag.clone();

    ctrlc::set_handler(move || {
        if r.load(std::sync::atomic::Ordering::SeqCst) {
            println!("\n👋 Bye!");
            std::process::exit(0);
        } else {
            println!("\n⚠️  Press Ctrl+C again to exit");
            r.store(true, std::sync::atomic::Ordering::SeqCst);

            let r2 = r.clone();
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_secs(3));
                r2.store(false, std::sync::atomic::Ordering::SeqCst);
            });
        }
    })
    .ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Onboard => {
            kore::config::onboard()?;
        }

        Commands::Agents => {
            let agents = kore::agent::bundled::registry();
            for signature in agents.signatures() {
                println!("{}", signature);
            }
        }

        Commands::Chat {
            agent,
            inputs,
            message,
        } => {
            run_chat(agent, inputs, message).await?;
        }

        Commands::Status => {
            let config = kore::config::load_or_default()?;
            println!("Kore Status\n");
            println!("Config: {:?}", kore::config::config_path());
            println!("Provider: {}", config.provider);
            println!("Model: {}", config.model);
            println!("API base: {}", config.api_base);
            println!(
                "API key: {}",
                if config.resolved_api_key().is_empty() { "not set" } else { "✓" }
            );
            println!("File root: {:?}", config.file_root);
        }
    }

    Ok(())
}

async fn run_chat(agent: Option<String>, inputs: Vec<String>, message: Option<String>) -> Result<()> {
    use kore::adapters::cli::CliChannel;
    use kore::agent::{bundled, AgentContext, AgentInputs, ProviderRegistry};

    let config = kore::config::load_or_default()?;
    if config.resolved_api_key().is_empty() {
        kore::ui::print_warning("No API key configured. Run `kore onboard` or set OPENAI_API_KEY.");
    }
    let client = ProviderRegistry::create(&config)?;
    let agents = Arc::new(bundled::registry());
    let ctx = AgentContext::new(&config, client, agents.clone());
    let mut channel = CliChannel::new(ctx);

    let Some(name) = agent else {
        if message.is_some() {
            bail!("--message needs --agent");
        }
        kore::ui::print_kore_header(&config.model, &config.provider);
        channel.run_interactive().await?;
        return Ok(());
    };

    let needed = agents
        .needed_inputs(&name)
        .ok_or_else(|| kore::Error::UnknownAgent(name.clone()))?;
    let inputs = AgentInputs::from_pairs(needed, &inputs)?;
    channel.start_conversation(&name, &inputs)?;

    if let Some(msg) = message {
        if !channel.accepts_chat() {
            bail!("{} does not take messages; run `kore chat --agent \"{}\"` without --message", name, name);
        }
        let reply = channel.run_once(&msg).await?;
        println!("{}", reply);
        return Ok(());
    }

    kore::ui::print_kore_header(&config.model, &config.provider);
    let reply = channel.run_initial().await?;
    if !reply.is_empty() {
        println!("\n{}\n{}", name, reply);
    }
    if !channel.accepts_chat() {
        channel.warn_no_chat();
    }
    channel.run_interactive().await?;

    Ok(())
}
