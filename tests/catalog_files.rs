//! Loading external catalog files and querying them through the public API.

use appletdex::catalog::{CatalogError, load_from_path};
use appletdex::query::{QueryState, recompute};

#[test]
/// What: A TOML catalog behaves exactly like injected data
///
/// - Input: Three applets across two categories, declared selector labels
/// - Output: Query narrows by category and text, counts reflect the file
fn toml_catalog_is_queryable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("applets.toml");
    std::fs::write(
        &path,
        r#"
categories = ["Networking", "Shell"]

[[applet]]
name = "wget"
description = "Download files"
category = "Networking"

[[applet]]
name = "sh"
description = "POSIX shell"
category = "Shell"

[[applet]]
name = "nc"
description = "Netcat"
category = "Networking"
"#,
    )
    .expect("write");
    let catalog = load_from_path(&path).expect("load");
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.declared_categories(), ["Networking", "Shell"]);

    let r = recompute(&catalog, &QueryState::from_parts(None, Some("Networking")));
    assert_eq!(r.len(), 2);
    assert_eq!(r.group("Networking").map(<[_]>::len), Some(2));

    let r = recompute(&catalog, &QueryState::from_parts(Some("SHELL"), None));
    assert_eq!(r.entries[0].name, "sh");
}

#[test]
/// What: Errors surface with a readable message
fn unsupported_extension_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("applets.csv");
    std::fs::write(&path, "name,description,category\n").expect("write");
    let err = load_from_path(&path).expect_err("csv unsupported");
    assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    assert!(err.to_string().contains("applets.csv"));
}
