// Entrypoint for the CLI application.
// - Keeps `main` small: build the gateway client from the environment and
//   hand it to the interactive loop.
// - Returns `anyhow::Result` so failures print with their full context.

use booker_cli::{api::GatewayClient, config::Config, console::Terminal, ui};

fn main() -> anyhow::Result<()> {
    // Configuration comes from `BOOKER_API_URL` / `BOOKER_USERNAME` /
    // `BOOKER_PASSWORD`, with the public restful-booker instance as default.
    let config = Config::from_env();
    let gateway = GatewayClient::new(config)?;
    let mut console = Terminal::new();

    // Runs until the operator enters `exit`.
    ui::main_loop(&mut console, &gateway)
}
