//! Get the version string using `git describe --dirty` or, if it fails, using the
//! `CARGO_PKG_VERSION`.
//!
//! The `GIT` environment variable can be used to set an alternative path to the git executable.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR environment variable not set");
    let dest_path = Path::new(&out_dir).join("version.rs");
    let mut f = File::create(&dest_path).expect("Failed to create version.rs file");

    let git = env::var("GIT").unwrap_or_else(|_| "git".into());

    let cargo_version = env!("CARGO_PKG_VERSION").to_owned();

    let mut version = match Command::new(git).args(["describe", "--dirty"]).output() {
        Ok(output) if output.status.success() => match String::from_utf8(output.stdout) {
            Ok(s) => format!("git-{}", s),
            Err(_) => cargo_version,
        },
        _ => cargo_version,
    };

    // Single line only
    if let Some(l) = version.find('\n') {
        version.truncate(l);
    }

    writeln!(f, "/// Crate version, from `git describe` when available.")
        .expect("Failed to write to version.rs");
    writeln!(f, "pub const VERSION: &str = \"{}\";", version)
        .expect("Failed to write VERSION to version.rs");

    println!("cargo:rerun-if-env-changed=GIT");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
