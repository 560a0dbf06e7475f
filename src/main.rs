// SPDX-License-Identifier: MPL-2.0
use faqboard::error::Result;
use faqboard::{config, server};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    server::init_tracing();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap();
    let listen: Option<String> = args.opt_value_from_str("--listen").unwrap();

    let mut config = config::load(config_path.as_deref())?;
    if let Some(listen) = listen {
        config.listen_addr = Some(listen);
    }

    server::run(config).await
}
