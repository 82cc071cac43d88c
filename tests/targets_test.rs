use std::collections::HashMap;

use playlist_stats::targets::{TargetAttributes, parse_target_attributes};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_no_params_leaves_everything_unset() {
    let targets = parse_target_attributes(&HashMap::new());

    assert_eq!(targets, TargetAttributes::default());
    assert!(targets.is_empty());
    assert!(targets.to_query().is_empty());
}

#[test]
fn test_valid_value_is_set_exactly() {
    let targets = parse_target_attributes(&params(&[("energy", "0.5")]));

    assert_eq!(targets.energy, Some(0.5));
    assert_eq!(targets.valence, None);
    assert!(!targets.is_empty());
}

#[test]
fn test_all_recognised_keys() {
    let targets = parse_target_attributes(&params(&[
        ("acousticness", "0.1"),
        ("danceability", "0.2"),
        ("energy", "0.3"),
        ("instrumentalness", "0.4"),
        ("liveness", "0.5"),
        ("speechiness", "0.6"),
        ("valence", "0.7"),
    ]));

    assert_eq!(
        targets,
        TargetAttributes {
            acousticness: Some(0.1),
            danceability: Some(0.2),
            energy: Some(0.3),
            instrumentalness: Some(0.4),
            liveness: Some(0.5),
            speechiness: Some(0.6),
            valence: Some(0.7),
        }
    );
}

#[test]
fn test_bad_value_does_not_block_other_keys() {
    let targets = parse_target_attributes(&params(&[
        ("danceability", "very"),
        ("energy", "0.8"),
        ("liveness", ""),
        ("valence", "1"),
    ]));

    assert_eq!(targets.danceability, None);
    assert_eq!(targets.liveness, None);
    assert_eq!(targets.energy, Some(0.8));
    assert_eq!(targets.valence, Some(1.0));
}

#[test]
fn test_non_finite_values_are_ignored() {
    let targets = parse_target_attributes(&params(&[
        ("acousticness", "NaN"),
        ("energy", "inf"),
        ("valence", "-infinity"),
        ("speechiness", "0.25"),
    ]));

    assert_eq!(targets.acousticness, None);
    assert_eq!(targets.energy, None);
    assert_eq!(targets.valence, None);
    assert_eq!(targets.speechiness, Some(0.25));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let targets = parse_target_attributes(&params(&[
        ("id", "abc"),
        ("seeds", "a,b"),
        ("loudness", "-5"),
        ("tempo", "120"),
    ]));

    assert!(targets.is_empty());
}

#[test]
fn test_query_only_contains_set_targets() {
    let targets = parse_target_attributes(&params(&[("energy", "0.8"), ("valence", "0.25")]));

    assert_eq!(
        targets.to_query(),
        vec![
            ("target_energy".to_string(), "0.8".to_string()),
            ("target_valence".to_string(), "0.25".to_string()),
        ]
    );
}
