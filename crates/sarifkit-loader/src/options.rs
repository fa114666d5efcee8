use serde::{Deserialize, Serialize};

/// Default upper bound on input size: 256 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 256 * 1024 * 1024;

/// Loader knobs. Deserializable so hosts can embed it in their own config files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Inputs larger than this are rejected before parsing.
    pub max_input_bytes: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl LoadOptions {
    pub fn with_max_input_bytes(mut self, limit: u64) -> Self {
        self.max_input_bytes = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_keys() {
        let opts: LoadOptions = serde_json::from_str("{}").expect("options");
        assert_eq!(opts, LoadOptions::default());
        assert_eq!(opts.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn builder_overrides_limit() {
        let opts = LoadOptions::default().with_max_input_bytes(10);
        assert_eq!(opts.max_input_bytes, 10);
    }
}
