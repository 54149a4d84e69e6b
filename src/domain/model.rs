use serde::{Deserialize, Serialize};
use std::fmt;

/// Matrix-multiplication algorithm, numbered as in the libcusmm enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "largeDB1")]
    LargeDb1,
    #[serde(rename = "largeDB2")]
    LargeDb2,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "small")]
    Small,
    #[serde(rename = "tiny")]
    Tiny,
}

impl Algorithm {
    pub fn code(self) -> i64 {
        match self {
            Algorithm::LargeDb1 => 1,
            Algorithm::LargeDb2 => 2,
            Algorithm::Medium => 3,
            Algorithm::Small => 4,
            Algorithm::Tiny => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::LargeDb1 => "largeDB1",
            Algorithm::LargeDb2 => "largeDB2",
            Algorithm::Medium => "medium",
            Algorithm::Small => "small",
            Algorithm::Tiny => "tiny",
        }
    }

    fn uses_tiles(self) -> bool {
        !matches!(self, Algorithm::Tiny)
    }

    fn uses_double_buffering(self) -> bool {
        matches!(self, Algorithm::LargeDb1 | Algorithm::LargeDb2)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of `parameters_<GPU>.json`.
///
/// Parameters that the record's algorithm does not use may be present or absent;
/// either way they are emitted as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelRecord {
    pub m: i64,
    pub n: i64,
    pub k: i64,
    pub algorithm: Algorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_m: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_n: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minblocks: Option<i64>,
    /// Measured performance in Gflop/s. Not part of the generated table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perf: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Lookup key of the generated table. Sorts like an `(m, n, k)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triplet {
    pub m: i64,
    pub n: i64,
    pub k: i64,
}

impl Triplet {
    pub fn new(m: i64, n: i64, k: i64) -> Self {
        Self { m, n, k }
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.m, self.n, self.k)
    }
}

/// Value of the generated table:
/// `[algorithm, tile_m, tile_n, w, v, threads, grouping, minblocks]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelParameters(pub [i64; 8]);

impl KernelParameters {
    pub fn values(&self) -> &[i64; 8] {
        &self.0
    }

    pub fn algorithm_code(&self) -> i64 {
        self.0[0]
    }
}

impl KernelRecord {
    /// Projects the record onto its table key and the 8-slot parameter array.
    ///
    /// Fails with a human-readable reason when a parameter the algorithm needs is
    /// missing or when a dimension or parameter is out of range. The record's
    /// position is unknown here; `ParameterTable::from_records` attaches it.
    pub fn as_key_value(&self) -> std::result::Result<(Triplet, KernelParameters), String> {
        for (name, value) in [("m", self.m), ("n", self.n), ("k", self.k)] {
            if value <= 0 {
                return Err(format!("dimension '{}' must be positive, got {}", name, value));
            }
        }

        let algo = self.algorithm;
        let required = |name: &str, value: Option<i64>| -> std::result::Result<i64, String> {
            match value {
                Some(v) if v < 0 => Err(format!("parameter '{}' must not be negative, got {}", name, v)),
                Some(v) => Ok(v),
                None => Err(format!("missing parameter '{}' required by algorithm '{}'", name, algo)),
            }
        };

        let (tile_m, tile_n) = if algo.uses_tiles() {
            (required("tile_m", self.tile_m)?, required("tile_n", self.tile_n)?)
        } else {
            (0, 0)
        };
        let (w, v) = if algo.uses_double_buffering() {
            (required("w", self.w)?, required("v", self.v)?)
        } else {
            (0, 0)
        };
        let threads = required("threads", self.threads)?;
        let grouping = required("grouping", self.grouping)?;
        let minblocks = required("minblocks", self.minblocks)?;

        Ok((
            Triplet::new(self.m, self.n, self.k),
            KernelParameters([algo.code(), tile_m, tile_n, w, v, threads, grouping, minblocks]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> KernelRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_tiny_kernel_zeroes_tile_parameters() {
        let record = parse(serde_json::json!({
            "m": 4, "n": 5, "k": 6, "algorithm": "tiny",
            "threads": 64, "grouping": 16, "minblocks": 12, "perf": 31.5
        }));

        let (key, pars) = record.as_key_value().unwrap();
        assert_eq!(key, Triplet::new(4, 5, 6));
        assert_eq!(pars.values(), &[5, 0, 0, 0, 0, 64, 16, 12]);
    }

    #[test]
    fn test_superfluous_parameters_are_dropped() {
        let record = parse(serde_json::json!({
            "m": 8, "n": 8, "k": 8, "algorithm": "small",
            "tile_m": 2, "tile_n": 2, "w": 4, "v": 8,
            "threads": 128, "grouping": 16, "minblocks": 1
        }));

        let (_, pars) = record.as_key_value().unwrap();
        assert_eq!(pars.values(), &[4, 2, 2, 0, 0, 128, 16, 1]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let record = parse(serde_json::json!({
            "m": 4, "n": 4, "k": 4, "algorithm": "tiny",
            "threads": 64, "grouping": 16, "minblocks": 1,
            "foo": [1, 2], "tuned_on": "2018-03-01"
        }));

        let (_, pars) = record.as_key_value().unwrap();
        assert_eq!(pars.values(), &[5, 0, 0, 0, 0, 64, 16, 1]);
    }

    #[test]
    fn test_negative_parameter_is_rejected() {
        let record = parse(serde_json::json!({
            "m": 4, "n": 4, "k": 4, "algorithm": "tiny",
            "threads": -1, "grouping": 16, "minblocks": 1
        }));

        let err = record.as_key_value().unwrap_err();
        assert!(err.contains("'threads'"));
        assert!(err.contains("-1"));
    }

    #[test]
    fn test_large_kernel_keeps_all_parameters() {
        let record = parse(serde_json::json!({
            "m": 32, "n": 32, "k": 32, "algorithm": "largeDB2",
            "tile_m": 4, "tile_n": 4, "w": 8, "v": 16,
            "threads": 128, "grouping": 16, "minblocks": 2,
            "source": "autotuned"
        }));

        let (_, pars) = record.as_key_value().unwrap();
        assert_eq!(pars.values(), &[2, 4, 4, 8, 16, 128, 16, 2]);
        assert_eq!(pars.algorithm_code(), 2);
    }

    #[test]
    fn test_missing_required_parameter_is_reported() {
        let record = parse(serde_json::json!({
            "m": 8, "n": 8, "k": 8, "algorithm": "medium",
            "tile_m": 2, "threads": 128, "grouping": 16, "minblocks": 1
        }));

        let err = record.as_key_value().unwrap_err();
        assert!(err.contains("tile_n"));
        assert!(err.contains("medium"));
    }

    #[test]
    fn test_non_positive_dimension_is_rejected() {
        let record = parse(serde_json::json!({
            "m": 0, "n": 8, "k": 8, "algorithm": "tiny",
            "threads": 64, "grouping": 16, "minblocks": 1
        }));

        assert!(record.as_key_value().unwrap_err().contains("'m'"));
    }

    #[test]
    fn test_unknown_algorithm_fails_to_parse() {
        let result: std::result::Result<KernelRecord, _> = serde_json::from_value(serde_json::json!({
            "m": 8, "n": 8, "k": 8, "algorithm": "huge",
            "threads": 64, "grouping": 16, "minblocks": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_triplet_orders_like_tuple() {
        let mut keys = vec![
            Triplet::new(5, 1, 1),
            Triplet::new(4, 9, 9),
            Triplet::new(4, 9, 2),
            Triplet::new(4, 10, 1),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                Triplet::new(4, 9, 2),
                Triplet::new(4, 9, 9),
                Triplet::new(4, 10, 1),
                Triplet::new(5, 1, 1),
            ]
        );
    }
}
