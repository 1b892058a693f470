use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use fortune_bot::application::errors::BotError;
use fortune_bot::application::messaging::{CommandDispatcher, Outcome};
use fortune_bot::application::services::CommandService;
use fortune_bot::domain::entities::CommandRegistry;
use fortune_bot::domain::traits::HostApi;
use fortune_bot::infrastructure::adapters::{ConsoleHost, MemoryHost};
use fortune_bot::infrastructure::config::Config;
use fortune_bot::plugins::PluginManager;

#[derive(Parser)]
#[command(name = "fortune-bot")]
#[command(about = "Chat command host with a /fortune plugin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Random seed (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive console session
    Run,
    /// Dispatch a single command line, e.g. `exec "/fortune 2"`
    Exec {
        line: String,
        /// Print the host calls as JSON instead of writing to the console
        #[arg(long)]
        dry_run: bool,
    },
    /// List registered commands
    Commands {
        #[arg(long)]
        json: bool,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_console(&cli.config, cli.seed),
        Commands::Exec { line, dry_run } => exec_line(&cli.config, cli.seed, &line, dry_run),
        Commands::Commands { json } => list_commands(&cli.config, json),
        Commands::Version => {
            println!("fortune-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(&cli.config),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Config {
    if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

fn build_dispatcher(config: &Config, seed: Option<u64>) -> Result<CommandDispatcher, BotError> {
    let plugin_manager = PluginManager::from_config(config, seed)?;
    let mut registry = CommandRegistry::new();
    let loaded = plugin_manager.install(&mut registry)?;
    tracing::info!(
        "Plugin system initialized with {} plugins, {} commands",
        loaded,
        registry.len()
    );

    Ok(CommandDispatcher::new(&config.bot.prefix, registry))
}

fn run_console(config_path: &str, seed: Option<u64>) -> Result<(), BotError> {
    let config = load_config(config_path);
    tracing::info!("Starting {}", config.bot.name);

    let dispatcher = build_dispatcher(&config, seed)?;
    let mut host = ConsoleHost::new(&config.host.nickname, &config.host.contact);
    host.display(&format!(
        "Chatting with {} as {}. /help lists commands, /quit exits.",
        config.host.contact, config.host.nickname
    ));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            match line.trim() {
                "/quit" | "/exit" => break,
                "/help" => {
                    for help in CommandService::new(dispatcher.registry()).help_lines() {
                        host.display(&help);
                    }
                }
                input => {
                    if let Outcome::Text(text) = dispatcher.dispatch(&mut host, input) {
                        host.send(&text);
                    }
                }
            }
        }

        tracing::info!("Console session closed");
        Ok::<(), BotError>(())
    })
}

fn exec_line(config_path: &str, seed: Option<u64>, line: &str, dry_run: bool) -> Result<(), BotError> {
    let config = load_config(config_path);
    let dispatcher = build_dispatcher(&config, seed)?;

    if dry_run {
        let mut host = MemoryHost::new(&config.host.nickname);
        let outcome = dispatcher.dispatch(&mut host, line);
        tracing::debug!("Outcome: {:?}", outcome);
        let json = serde_json::to_string_pretty(host.events())
            .map_err(|e| BotError::Plugin(format!("Failed to encode events: {}", e)))?;
        println!("{}", json);
    } else {
        let mut host = ConsoleHost::new(&config.host.nickname, &config.host.contact);
        if let Outcome::Text(text) = dispatcher.dispatch(&mut host, line) {
            host.send(&text);
        }
    }

    Ok(())
}

fn list_commands(config_path: &str, json: bool) -> Result<(), BotError> {
    let config = load_config(config_path);
    let dispatcher = build_dispatcher(&config, None)?;
    let service = CommandService::new(dispatcher.registry());

    if json {
        let out = serde_json::to_string_pretty(&service.infos())
            .map_err(|e| BotError::Plugin(format!("Failed to encode commands: {}", e)))?;
        println!("{}", out);
    } else {
        println!("Plugin commands:");
        for line in service.help_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

fn init_config(config_path: &str) -> Result<(), BotError> {
    let yaml = Config::default().to_yaml()?;
    std::fs::write(config_path, yaml)?;
    println!("Created {}", config_path);
    Ok(())
}
