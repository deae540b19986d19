//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::GitPullsConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Helper to compose a [`GitPullsConfig`] from a sequence of `(layer_type, value)` pairs.
///
/// The built-in defaults are always pushed first, as `load` does.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> GitPullsConfig {
    let mut composer = MergeComposer::new();
    composer.push_defaults(
        serde_json::to_value(GitPullsConfig::default()).expect("defaults should serialise"),
    );

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    GitPullsConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}
