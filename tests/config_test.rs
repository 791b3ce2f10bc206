use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use code_format::config::{Config, load_config, read_or_default};

#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("format.yaml");
    fs::write(
        &path,
        "roots: [engine, plugins]\ntool: clang-format-18\nextensions: [h, cpp]\n",
    )
    .unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(
        config.roots,
        vec![PathBuf::from("engine"), PathBuf::from("plugins")]
    );
    assert_eq!(config.tool, "clang-format-18");
    assert_eq!(config.extensions, vec!["h", "cpp"]);
    // Unspecified fields keep their defaults
    assert_eq!(config.args, vec!["-i".to_string()]);
    assert!(config.prune_hidden_dirs);
}

#[test]
fn test_load_config_rejects_malformed_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "roots: [unclosed\n").unwrap();

    assert!(load_config(&path).is_err());
}

#[test]
fn test_load_config_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("invalid.yaml");
    fs::write(&path, "extensions: []\n").unwrap();

    assert!(load_config(&path).is_err());
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.yaml");

    let result = read_or_default(path.to_str().unwrap());

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Configuration file not found")
    );
}

#[test]
fn test_explicit_config_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.yaml");
    fs::write(&path, "tool: uncrustify\n").unwrap();

    let config = read_or_default(path.to_str().unwrap()).unwrap();

    assert_eq!(config.tool, "uncrustify");
    assert_eq!(config.roots, Config::default().roots);
}

#[test]
fn test_tilde_in_roots_is_expanded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("home.yaml");
    fs::write(&path, "roots: ['~/project/src']\n").unwrap();

    let config = load_config(&path).unwrap();

    assert!(
        !config.roots[0].to_string_lossy().starts_with('~'),
        "Roots should have tildes expanded after loading"
    );
}
