use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
#[path = "src/catalog/schema.rs"]
mod schema;

use schema::{ComponentStories, ShowcaseConfig, StoryCatalog, CATALOG_SCHEMA_VERSION};

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let config: ShowcaseConfig = read_toml(&crate_root.join("showcase.toml"));
    if config.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "showcase.toml schema mismatch: expected {CATALOG_SCHEMA_VERSION} found {}",
            config.schema_version
        );
    }

    let components = config
        .stories
        .iter()
        .map(|relative| {
            let path = crate_root.join(relative);
            let stories: ComponentStories = read_toml(&path);
            if stories.schema_version != CATALOG_SCHEMA_VERSION {
                panic!(
                    "story schema mismatch in {}: expected {CATALOG_SCHEMA_VERSION} found {}",
                    path.display(),
                    stories.schema_version
                );
            }
            stories
        })
        .collect::<Vec<_>>();

    let catalog = StoryCatalog::assemble(config, components)
        .unwrap_or_else(|err| panic!("invalid story catalog: {err}"));
    let json = catalog
        .to_json()
        .unwrap_or_else(|err| panic!("failed to serialize story catalog: {err}"));
    let generated = format!(
        "/// Build-time generated story catalog JSON.\n\
pub const STORY_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("story_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
