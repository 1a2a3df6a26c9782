use std::env;
use std::fs;
use std::path::Path;

/// Copy a fixture into OUT_DIR for `include_str!`, writing `fallback` when it
/// is missing so the app still builds from a bare checkout.
fn stage_fixture(out_dir: &Path, name: &str, fallback: &str) {
    let src = Path::new("../fixtures").join(name);
    let dest = out_dir.join(name);
    if src.exists() {
        fs::copy(&src, &dest).unwrap();
    } else {
        fs::write(&dest, fallback).unwrap();
    }
    println!("cargo:rerun-if-changed=../fixtures/{}", name);
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    stage_fixture(
        out_dir,
        "jurisdictions.json",
        r#"{"jurisdictions": [{"id": "1", "name": "Springfield", "qualifier": "City", "slug": "springfield", "enabled": true, "addresses": ["123 Main St"]}]}"#,
    );
    stage_fixture(out_dir, "site.json", "{}");

    println!("cargo:rerun-if-changed=build.rs");
}
