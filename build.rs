use std::env;
use std::fs::copy;
use std::path::PathBuf;

fn main() {
    // cortex-m-rt's link.x pulls in memory.x from the linker search path
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap_or_default());
    let memory_x = PathBuf::from("src/memory.x");
    let _ = copy(&memory_x, out_dir.join("memory.x")).unwrap_or_default();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={}", memory_x.display());
    println!("cargo:rerun-if-changed=build.rs");
}
