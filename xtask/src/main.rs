//! Build tasks for the viso-tilt workspace.
//!
//! ```text
//! cargo run -p viso-tilt-xtask -- web --release
//! cargo run -p viso-tilt-xtask -- schema --out pkg/tilt-options.schema.json
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use viso_tilt::TiltOptions;

const WASM_TARGET: &str = "wasm32-unknown-unknown";
const CRATE_ARTIFACT: &str = "viso_tilt.wasm";

#[derive(Parser)]
#[command(name = "xtask", about = "viso-tilt build tasks")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build the `web` feature for wasm32 and generate JS bindings.
    Web {
        /// Build with the release profile.
        #[arg(long)]
        release: bool,
        /// Directory for the wasm-bindgen output, relative to the
        /// workspace root.
        #[arg(long, default_value = "pkg")]
        out_dir: PathBuf,
    },
    /// Write the JSON schema of the tilt options.
    Schema {
        /// Output file, relative to the workspace root.
        #[arg(long, default_value = "pkg/tilt-options.schema.json")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = workspace_root()?;
    match cli.task {
        Task::Web { release, out_dir } => build_web(&root, release, &out_dir),
        Task::Schema { out } => write_schema(&root.join(out)),
    }
}

fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

fn build_web(root: &Path, release: bool, out_dir: &Path) -> Result<()> {
    let cargo_bin =
        std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_owned());
    let mut cargo = Command::new(cargo_bin);
    let _ = cargo
        .current_dir(root)
        .args(["rustc", "-p", "viso-tilt", "--lib", "--features", "web"])
        .args(["--target", WASM_TARGET]);
    if release {
        let _ = cargo.arg("--release");
    }
    let _ = cargo.args(["--", "--crate-type=cdylib"]);
    run(&mut cargo)?;

    let profile = if release { "release" } else { "debug" };
    let wasm = root
        .join("target")
        .join(WASM_TARGET)
        .join(profile)
        .join(CRATE_ARTIFACT);
    if !wasm.exists() {
        bail!("expected wasm artifact at {}", wasm.display());
    }

    let mut bindgen = Command::new("wasm-bindgen");
    let _ = bindgen
        .current_dir(root)
        .args(["--target", "web", "--out-dir"])
        .arg(out_dir)
        .arg(&wasm);
    run(&mut bindgen).context("is wasm-bindgen-cli installed?")
}

fn write_schema(out: &Path) -> Result<()> {
    let schema = serde_json::to_string_pretty(&TiltOptions::json_schema())?;
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, schema)
        .with_context(|| format!("writing {}", out.display()))
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {cmd:?}"))?;
    if !status.success() {
        bail!("{cmd:?} exited with {status}");
    }
    Ok(())
}
