use anyhow::Result;
use bikeshare::{config::Config, prompt::Prompter, session};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // logs go to stderr; stdout belongs to the prompts
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    info!(data_dir = %config.data_dir.display(), "startup");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    session::run(&config, &mut prompter)?;

    info!("all done");
    Ok(())
}
