use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=ITEM_CATALOG_STORAGE_HINT");

    let hint = env::var("ITEM_CATALOG_STORAGE_HINT").ok();

    if let Some(raw_hint) = hint.filter(|value| !value.is_empty()) {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=ITEM_CATALOG_STORAGE_HINT={}",
            canonical.display()
        );
    }
}
