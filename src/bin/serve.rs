//! Serve a document root over HTTP for the browser build of the
//! visualizer.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use pulsecage::server;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "serve")]
#[command(about = "Static file server for the visualizer assets", long_about = None)]
pub(crate) struct Args {
    /// Document root to serve files from
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub(crate) root: PathBuf,

    /// Port to listen on
    #[arg(long, value_name = "PORT", default_value = "3000")]
    pub(crate) port: u16,
}

fn main() {
    let args = Args::parse();
    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    server::serve(addr, args.root);
}
