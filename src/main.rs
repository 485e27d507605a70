use clap::{Parser, Subcommand};
use std::io::Read;
use std::sync::Arc;

mod config;
mod feed;
mod function;
mod handler;
mod http;
mod logger;
mod server;

/// HTTP-triggered city news function
#[derive(Parser)]
#[command(name = "city-news-fn", about = "City news feed function and its HTTP host", version)]
struct Cli {
    /// Defaults to `serve` with the default config file
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Serve the function over HTTP
    Serve {
        /// Config file path without extension
        #[arg(value_name = "CONFIG")]
        config: Option<String>,
    },
    /// Read one invocation event (JSON) from stdin and print the response
    Invoke,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        None | Some(Command::Serve { config: None }) => serve(config::DEFAULT_CONFIG_PATH),
        Some(Command::Serve {
            config: Some(path),
        }) => serve(&path),
        Some(Command::Invoke) => invoke_from_stdin(),
    }
}

/// Read one invocation event from stdin, print the function response
fn invoke_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let event: function::InvocationEvent = if input.trim().is_empty() {
        function::InvocationEvent::default()
    } else {
        serde_json::from_str(&input).map_err(|e| format!("invalid invocation event: {e}"))?
    };
    let context = function::InvocationContext {
        request_id: None,
        function_name: config::Config::load_from(config::DEFAULT_CONFIG_PATH)?
            .server
            .function_name,
    };

    let response = function::invoke(&event, &context);
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn serve(config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load_from(config_path)?;
    logger::init(&cfg)?;

    // 创建 Tokio 运行时，根据 workers 配置设置线程数
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    let state = Arc::new(config::AppState::new(&cfg));

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(&addr, &cfg);

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state, signals))
        .await
}
