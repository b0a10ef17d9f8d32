//! mcpchat - chat with an LLM that can use an MCP server's tools
//!
//! Reads `OPENAI_API_KEY`, `MODEL` and `LD_API_KEY` from the environment or
//! a `.env` file, launches the tool server and starts the prompt loop.
//! Set `MCPCHAT_DEBUG=1` to log to `<tmp>/mcpchat-debug.log`.

use std::process::ExitCode;
use std::sync::Arc;

use mcpchat_core::logging::{self, ConsoleLogger, FileLogger, Logger};
use mcpchat_core::config::API_KEY_VAR;
use mcpchat_core::{ChainSecretStore, ChatConfig, ChatError, ChatSession, ConfigFile, SecretStore};
use tokio::io::{self as tio, BufReader};

async fn run(logger: Arc<dyn Logger>) -> Result<(), ChatError> {
    let secrets = ChainSecretStore::standard().map_err(mcpchat_core::ConfigError::from)?;
    let file = ConfigFile::load_default()?;
    let config = ChatConfig::resolve(&file, &secrets)?;

    logger.info(&format!(
        "[mcpchat] provider={}, model={}, key from {}",
        config.provider,
        config.model.model,
        secrets.source(API_KEY_VAR).unwrap_or("config")
    ));

    let session = ChatSession::connect(&config, logger.clone()).await?;

    let listed = session.tool_names().await;
    let names = match listed {
        Ok(names) => names,
        Err(e) => {
            let _ = session.close().await;
            return Err(e);
        }
    };
    println!("\nTools: [{}]", names.join(", "));

    session
        .run_until_quit(BufReader::new(tio::stdin()), tio::stdout())
        .await
}

#[tokio::main]
async fn main() -> ExitCode {
    let logger: Arc<dyn Logger> = if logging::is_enabled() {
        Arc::new(FileLogger::new("mcpchat"))
    } else {
        Arc::new(ConsoleLogger::new())
    };

    match run(logger.clone()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger.error(&format!("[mcpchat] {}", e));
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
