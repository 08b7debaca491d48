use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Re-run when HEAD moves so the footer stamp stays current.
    println!("cargo:rerun-if-changed=../.git/HEAD");

    let commit = git_short_hash().unwrap_or_else(|| String::from("unknown"));
    println!("cargo:rustc-env=GIT_COMMIT_HASH={commit}");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}
