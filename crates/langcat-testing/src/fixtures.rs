//! Sample catalogs.

use anyhow::Result;
use langcat_types::{Catalog, Item};
use std::path::Path;

/// Four languages in catalog order, with a popularity tie between Java and Go
pub const SAMPLE_CATALOG_JSON: &str = r#"[
  {
    "name": "Python",
    "description": "General-purpose scripting language",
    "releaseYear": 1991,
    "imageUrl": "img/python.png",
    "link": "https://www.python.org",
    "popularity": 28.1
  },
  {
    "name": "Java",
    "description": "Class-based, object-oriented language for the JVM",
    "releaseYear": 1995,
    "imageUrl": "img/java.png",
    "link": "https://dev.java",
    "popularity": 15.5
  },
  {
    "name": "Go",
    "description": "Compiled language for systems and network services",
    "releaseYear": 2009,
    "imageUrl": "img/go.png",
    "link": "https://go.dev",
    "popularity": 15.5
  },
  {
    "name": "JavaScript",
    "description": "Scripting language of the web",
    "releaseYear": 1995,
    "imageUrl": "img/js.png",
    "link": "https://developer.mozilla.org/docs/Web/JavaScript",
    "popularity": 30.2
  }
]"#;

/// Older catalog files use Portuguese keys
pub const LEGACY_CATALOG_JSON: &str = r#"[
  {
    "nome": "Rust",
    "descrição": "Linguagem de sistemas segura",
    "ano": 2015,
    "imagem": "img/rust.png",
    "link": "https://www.rust-lang.org",
    "popularidade": 12.0
  },
  {
    "nome": "Lua"
  }
]"#;

/// Valid JSON whose records carry values of the wrong type
pub const BAD_FIELDS_CATALOG_JSON: &str = r#"[
  {"name": "Go", "releaseYear": "2009", "popularity": 10},
  {"name": "Rust", "description": null, "popularity": null},
  {"name": "Zig", "releaseYear": [2016], "popularity": "4.5"}
]"#;

/// Truncated document: not JSON at all
pub const INVALID_CATALOG_JSON: &str = r#"[{"name": "Broken", "popularity": 1}"#;

pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new("Go", "systems", 10.0).with_release_year(2009),
        Item::new("Rust", "safe systems", 20.0).with_release_year(2015),
        Item::new("Python", "scripting", 30.0).with_release_year(1991),
    ])
}

pub fn write_catalog(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}
