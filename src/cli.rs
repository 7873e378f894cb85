// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "passforge",
    about = "Password generation and strength analysis API server",
    version
)]
pub struct Args {
    /// Port for the HTTP API (overrides PASSFORGE_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind (overrides PASSFORGE_HOST)
    #[arg(long)]
    pub host: Option<String>,
}
