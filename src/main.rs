mod cli;
mod clipboard;
mod commands;
mod config;
mod exec;
mod theme;

fn main() -> anyhow::Result<()> {
    crate::cli::run()
}
