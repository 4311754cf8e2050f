use std::process::ExitCode;
use std::sync::Arc;

use serve_wasm::config::{AppState, ServerConfig};
use serve_wasm::launcher::{self, SystemBrowser};
use serve_wasm::logger;
use serve_wasm::server::Server;
use serve_wasm::ServeError;

fn main() -> ExitCode {
    // Optional path to open in the browser; anything after it is ignored
    let target = std::env::args_os()
        .nth(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    match run(target.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(target: Option<&str>) -> Result<(), ServeError> {
    // One thread is plenty for a local dev server
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(target))
}

async fn async_main(target: Option<&str>) -> Result<(), ServeError> {
    let state = Arc::new(AppState::new(ServerConfig::default()));

    // Starting: bind before anything else so a busy port fails fast
    let server = Server::bind(state)?;
    if let Ok(addr) = server.local_addr() {
        logger::log_server_start(&addr, &server.state().config);
    }

    launcher::launch(target, &server.state().config, &SystemBrowser);

    // Serving: never returns
    let local = tokio::task::LocalSet::new();
    local.run_until(server.run()).await;
    Ok(())
}
