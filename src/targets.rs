//! Best-effort parsing of recommendation target attributes.
//!
//! Every recognised query parameter is looked up on its own. A missing key,
//! a value that is not a number, or a non-finite number leaves that target
//! unset and never affects the other keys. Nothing is reported back to the
//! caller.

use std::collections::HashMap;

/// Sparse set of target values for the recommendation request.
///
/// Unset fields are not sent to the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TargetAttributes {
    pub acousticness: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub liveness: Option<f64>,
    pub speechiness: Option<f64>,
    pub valence: Option<f64>,
}

type Setter = fn(&mut TargetAttributes, f64);

const TARGET_PARAMS: [(&str, Setter); 7] = [
    ("acousticness", |t, v| t.acousticness = Some(v)),
    ("danceability", |t, v| t.danceability = Some(v)),
    ("energy", |t, v| t.energy = Some(v)),
    ("instrumentalness", |t, v| t.instrumentalness = Some(v)),
    ("liveness", |t, v| t.liveness = Some(v)),
    ("speechiness", |t, v| t.speechiness = Some(v)),
    ("valence", |t, v| t.valence = Some(v)),
];

impl TargetAttributes {
    /// Parameter names and values, in the same order as the parser table.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("acousticness", self.acousticness),
            ("danceability", self.danceability),
            ("energy", self.energy),
            ("instrumentalness", self.instrumentalness),
            ("liveness", self.liveness),
            ("speechiness", self.speechiness),
            ("valence", self.valence),
        ]
    }

    /// Query pairs for the recommendations endpoint, e.g. `target_energy`.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.entries()
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (format!("target_{name}"), v.to_string())))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_none())
    }
}

pub fn parse_target_attributes(params: &HashMap<String, String>) -> TargetAttributes {
    let mut targets = TargetAttributes::default();

    for (name, set) in TARGET_PARAMS {
        let parsed = params
            .get(name)
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|value| value.is_finite());

        if let Some(value) = parsed {
            set(&mut targets, value);
        }
    }

    targets
}
