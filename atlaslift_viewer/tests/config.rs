// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading `ViewerConfig` from TOML.

use std::time::Duration;

use atlaslift_geo::ProjectionKind;
use atlaslift_motion::Easing;
use atlaslift_viewer::{ConfigError, DEFAULT_DATASET_URL, ViewerConfig};

#[test]
fn empty_document_is_the_default_config() {
    let config = ViewerConfig::from_toml_str("").unwrap();
    assert_eq!(config, ViewerConfig::default());
    assert_eq!(config.dataset, DEFAULT_DATASET_URL);
    assert_eq!(config.excluded_ids, ["ATA"]);
    assert_eq!(config.lift_distance, -15.0);
    assert_eq!(config.animation_duration(), Duration::from_millis(600));
    assert_eq!(config.easing, Easing::OutCubic);
    assert_eq!(config.projection, ProjectionKind::Mercator);
}

#[test]
fn partial_document_overrides_only_what_it_names() {
    let config = ViewerConfig::from_toml_str(
        r##"
        dataset = "maps/world.geojson"
        excluded_ids = []
        projection = "equirectangular"
        animation_ms = 250
        easing = "easeInOutQuad"

        [viewport]
        width_fraction = 1.0

        [style]
        active_fill = "#ff8800"
        "##,
    )
    .unwrap();

    assert_eq!(config.dataset, "maps/world.geojson");
    assert!(config.excluded_ids.is_empty());
    assert_eq!(config.projection, ProjectionKind::Equirectangular);
    assert_eq!(config.animation_duration(), Duration::from_millis(250));
    assert_eq!(config.easing, Easing::InOutQuad);
    assert_eq!(config.viewport.width_fraction, 1.0);
    assert_eq!(config.viewport.height_fraction, 0.9);
    assert_eq!(config.style.border, "#333");

    let style = config.style.resolve().unwrap();
    let c = style.active_fill.to_rgba8();
    assert_eq!((c.r, c.g, c.b, c.a), (0xff, 0x88, 0x00, 0xff));
}

#[test]
fn unknown_easing_is_rejected() {
    assert!(ViewerConfig::from_toml_str("easing = \"wobble\"").is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = ViewerConfig::default();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(ViewerConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn lift_must_be_a_finite_upward_offset() {
    for text in [
        "lift_distance = nan",
        "lift_distance = inf",
        "lift_distance = 15.0",
        "lift_distance = 0.0",
    ] {
        let err = ViewerConfig::from_toml_str(text).expect_err(text);
        assert!(
            matches!(err, ConfigError::OutOfRange { field: "lift_distance", .. }),
            "{text}: {err}"
        );
    }
    let config = ViewerConfig::from_toml_str("lift_distance = -4.0").unwrap();
    assert_eq!(config.lift_distance, -4.0);
}

#[test]
fn style_numbers_must_be_finite_and_not_negative() {
    for (text, field) in [
        ("[style]\nborder_width = -1.0", "style.border_width"),
        ("[style]\nactive_border_width = nan", "style.active_border_width"),
        ("[style]\nshadow_factor = -inf", "style.shadow_factor"),
        ("[style]\nshadow_base_blur = inf", "style.shadow_base_blur"),
    ] {
        let err = ViewerConfig::from_toml_str(text).expect_err(text);
        let ConfigError::OutOfRange { field: got, .. } = err else {
            panic!("{text}: unexpected error: {err}");
        };
        assert_eq!(got, field);
    }
    // Zero widths and an unblurred shadow are allowed.
    let config = ViewerConfig::from_toml_str("[style]\nborder_width = 0.0\nshadow_base_blur = 0.0")
        .unwrap();
    assert_eq!(config.style.resolve().unwrap().border_width, 0.0);
}
