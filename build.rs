use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_owned());
    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        // `rustc 1.85.0 (4d91de4e4 2025-02-17)`
        .and_then(|stdout| stdout.split_whitespace().nth(1).map(str::to_owned));

    let version = version.unwrap_or_else(|| {
        println!("cargo:warning=could not read the version of {rustc}; reporting `unknown`");
        "unknown".to_owned()
    });
    println!("cargo:rustc-env=UNIFONIC_RUSTC_VERSION={version}");
}
