use layout_inspector::cli::commands::{format_path, parse_path};
use layout_inspector::cli::config::{AppConfig, build_projector_config, build_tree_config, load_config};

// =========================================================================
// Path argument parsing
// =========================================================================

#[test]
fn parse_path_handles_root_and_nested_forms() {
    assert_eq!(parse_path("").unwrap(), Vec::<usize>::new(), "empty path is the root");
    assert_eq!(parse_path("0").unwrap(), vec![0]);
    assert_eq!(parse_path("0.2.1").unwrap(), vec![0, 2, 1]);
}

#[test]
fn parse_path_rejects_non_numeric_segments() {
    assert!(parse_path("a").is_err());
    assert!(parse_path("0..1").is_err(), "empty segment between dots");
    assert!(parse_path("0.-1").is_err());
}

#[test]
fn format_path_round_trips() {
    for path in ["0", "0.2.1", "3.0.0.7"] {
        assert_eq!(format_path(&parse_path(path).unwrap()), path);
    }
}

// =========================================================================
// Config defaults and merging
// =========================================================================

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let config = load_config(Some("/nonexistent/layout-inspector.yaml"));
    assert_eq!(config.snapshots.root, "snapshots");
    assert!(config.tree.prune_empty_structural);
    assert!(!config.properties.include_children);
    assert!(config.trace.file.is_none());
}

#[test]
fn tree_and_projector_configs_mirror_the_app_config() {
    let mut config = AppConfig::default();
    config.tree.prune_empty_structural = false;
    config.properties.include_children = true;

    assert!(!build_tree_config(&config).prune_empty_structural);
    assert!(build_projector_config(&config, false).include_children);

    config.properties.include_children = false;
    assert!(
        build_projector_config(&config, true).include_children,
        "CLI flag can force children on"
    );
}
