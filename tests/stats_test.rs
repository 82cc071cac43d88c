use approx::assert_relative_eq;
use playlist_stats::{
    stats::{FeatureVector, centroid, dispersion},
    types::AudioFeatures,
};

fn vector(values: [f64; 7]) -> FeatureVector {
    FeatureVector::from_array(values)
}

fn acoustic(acousticness: f64) -> FeatureVector {
    FeatureVector {
        acousticness,
        ..FeatureVector::default()
    }
}

#[test]
fn test_centroid_is_per_dimension_mean() {
    let vectors = vec![
        vector([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7]),
        vector([0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]),
        vector([0.2, 0.0, 0.1, 0.2, 0.0, 0.1, 0.2]),
    ];

    let c = centroid(&vectors).to_array();
    let expected = [0.2, 0.2, 0.3, 0.4, 0.4, 0.5, 0.6];

    for (got, want) in c.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }
}

#[test]
fn test_two_track_scenario() {
    let vectors = vec![acoustic(0.2), acoustic(0.8)];

    let c = centroid(&vectors);
    assert_relative_eq!(c.acousticness, 0.5, epsilon = 1e-12);
    assert_eq!(c.energy, 0.0);
    assert_eq!(c.valence, 0.0);

    // ((0.5-0.2)^2 + (0.5-0.8)^2) / 2
    assert_relative_eq!(dispersion(&vectors, &c), 0.09, epsilon = 1e-12);
}

#[test]
fn test_identical_vectors_have_zero_dispersion() {
    let v = vector([0.11, 0.42, 0.93, 0.0, 0.35, 0.05, 0.67]);
    let vectors = vec![v; 6];

    let c = centroid(&vectors);
    assert_relative_eq!(dispersion(&vectors, &c), 0.0, epsilon = 1e-12);
}

#[test]
fn test_single_vector() {
    let v = vector([0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3]);

    let c = centroid(&[v]);
    assert_eq!(c, v);
    assert_eq!(dispersion(&[v], &c), 0.0);
}

#[test]
fn test_dispersion_is_permutation_invariant() {
    let vectors = vec![
        vector([0.1, 0.9, 0.3, 0.0, 0.2, 0.05, 0.4]),
        vector([0.7, 0.1, 0.8, 0.5, 0.1, 0.3, 0.9]),
        vector([0.4, 0.4, 0.2, 0.9, 0.6, 0.1, 0.0]),
        vector([0.0, 0.6, 0.6, 0.1, 0.3, 0.7, 0.5]),
    ];
    let mut reversed = vectors.clone();
    reversed.reverse();
    let mut rotated = vectors.clone();
    rotated.rotate_left(1);

    let c = centroid(&vectors);
    let base = dispersion(&vectors, &c);

    assert_relative_eq!(dispersion(&reversed, &c), base, epsilon = 1e-12);
    assert_relative_eq!(dispersion(&rotated, &c), base, epsilon = 1e-12);
    assert_relative_eq!(
        dispersion(&rotated, &centroid(&rotated)),
        base,
        epsilon = 1e-12
    );
}

#[test]
fn test_dispersion_is_non_negative() {
    let vectors = vec![acoustic(0.0), acoustic(1.0), acoustic(0.25)];
    let c = centroid(&vectors);

    assert!(dispersion(&vectors, &c) > 0.0);
    // any other reference point is farther away than the mean
    assert!(dispersion(&vectors, &acoustic(0.9)) > dispersion(&vectors, &c));
}

#[test]
fn test_empty_input_is_zero() {
    let c = centroid(&[]);

    assert_eq!(c, FeatureVector::default());
    assert_eq!(dispersion(&[], &c), 0.0);
}

#[test]
fn test_loudness_is_not_aggregated() {
    let quiet = AudioFeatures {
        acousticness: 0.4,
        energy: 0.6,
        loudness: -60.0,
        ..AudioFeatures::default()
    };
    let loud = AudioFeatures {
        loudness: 0.0,
        ..quiet.clone()
    };

    let vectors: Vec<FeatureVector> = [quiet, loud].iter().map(FeatureVector::from).collect();
    let c = centroid(&vectors);

    assert_eq!(vectors[0], vectors[1]);
    assert_eq!(dispersion(&vectors, &c), 0.0);
    assert_relative_eq!(c.energy, 0.6, epsilon = 1e-12);
}

#[test]
fn test_centroid_serializes_seven_named_fields() {
    let json = serde_json::to_value(acoustic(0.5)).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 7);
    for key in [
        "acousticness",
        "danceability",
        "energy",
        "instrumentalness",
        "liveness",
        "speechiness",
        "valence",
    ] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert!(!obj.contains_key("loudness"));
}
