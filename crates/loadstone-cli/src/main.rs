//! Command-line driver: load a shared library, probe its symbols, and
//! optionally call one.
//!
//! The called symbol must be a zero-argument `extern "C"` function compiled
//! for this system; the call is made with no safety net beyond that.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use loadstone::{LoaderFlags, SharedLibrary, UnixFlag};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "loadstone",
    about = "Load a shared library at run time and probe its symbols"
)]
struct Args {
    /// Path to the shared library.
    path: PathBuf,

    /// Symbol names to probe for presence.
    #[arg(long, value_name = "NAME")]
    probe: Vec<String>,

    /// Call a zero-argument extern "C" function after loading.
    #[arg(long, value_name = "NAME")]
    call: Option<String>,

    /// Resolve all symbols at load time instead of lazily (Unix only).
    #[arg(long)]
    now: bool,

    /// Make the library's symbols available to later loads (Unix only).
    #[arg(long)]
    global: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut flags = LoaderFlags::default();
    if args.now {
        flags.add_unix(UnixFlag::Now);
    }
    if args.global {
        flags.add_unix(UnixFlag::Global);
    }

    let lib = SharedLibrary::new();
    lib.load_with(&args.path, flags)
        .with_context(|| format!("loading {}", args.path.display()))?;

    println!(
        "loaded {} (native handle {:p})",
        lib.path().display(),
        lib.native_handle()
    );

    for name in &args.probe {
        let present = if lib.has_symbol(name) { "present" } else { "absent" };
        println!("{name}: {present}");
    }

    if let Some(name) = &args.call {
        let sym = lib
            .get_symbol(name)
            .with_context(|| format!("resolving {name}"))?;
        let func: extern "C" fn() = unsafe { std::mem::transmute(sym) };
        func();
    }

    Ok(())
}
