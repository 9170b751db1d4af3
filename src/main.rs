//! Sandbox VFS demo - Entry Point
//!
//! Walks the configured sandbox root at increasing depths and prints the
//! virtual paths found at each level.

use std::path::Path;

use log::info;

use sandbox_vfs::error::handlers::handle_error;
use sandbox_vfs::{FileSystem, FileType, LocalFileSystem, VfsConfig};

fn main() {
    // env_logger picks up the RUST_LOG environment variable
    env_logger::init();

    let config = match VfsConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let fs = match LocalFileSystem::from_config(&config) {
        Ok(fs) => fs,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    info!("Sandbox root: {}", fs.base().display());

    for level in 0..=2 {
        println!("============= {}", level);
        match fs.search(Path::new("/"), "", FileType::All, level) {
            Ok(paths) => {
                for path in paths {
                    println!("{}", path.display());
                }
            }
            Err(e) => handle_error(&e),
        }
    }
}
