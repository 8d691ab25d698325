mod app;
mod audio;
mod catalog;
mod config;
mod error;
mod layout;
mod runtime;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::init_logging();
    runtime::run().inspect_err(|e| tracing::error!("{e:#}"))
}
