use std::path::Path;

use anyhow::{Context, Result};
use handpan_core::gesture::Observation;
use serde::{Deserialize, Serialize};

/// A recorded sequence of classifier results, one per video frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GestureTrace {
    #[serde(default)]
    pub observations: Vec<Observation>,
}

impl GestureTrace {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid gesture trace {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handpan_core::gesture::Gesture;
    use std::io::Write;

    #[test]
    fn loads_trace_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            r#"
[[observations]]
gesture = {{ kind = "zoom", distance = 0.1 }}

[[observations]]
hand_present = false
gesture = {{ kind = "none" }}
"#
        )
        .unwrap();

        let trace = GestureTrace::load(f.path()).unwrap();
        assert_eq!(trace.observations.len(), 2);
        assert_eq!(trace.observations[0].gesture, Gesture::Zoom { distance: 0.1 });
        assert!(!trace.observations[1].hand_present);
    }

    #[test]
    fn rejects_unknown_gesture_kind() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[[observations]]\ngesture = {{ kind = \"pinch\" }}").unwrap();
        assert!(GestureTrace::load(f.path()).is_err());
    }
}
