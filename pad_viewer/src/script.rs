//! Scripted pad input for headless runs.
//!
//! ```json
//! { "frames": [
//!     { "held": ["A"], "repeat": 2 },
//!     { "held": ["B"], "left_stick": [0, 32767] },
//!     { "back": true }
//! ] }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use pad_overlay::{AnalogStick, InputFrame, button_from_name};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct InputScript {
    #[serde(default)]
    pub frames: Vec<ScriptFrame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptFrame {
    #[serde(default)]
    pub held: Vec<String>,
    #[serde(default)]
    pub left_stick: [i32; 2],
    #[serde(default)]
    pub right_stick: [i32; 2],
    /// Host back gesture delivered before the pad input of this frame.
    #[serde(default)]
    pub back: bool,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_repeat() -> u32 {
    1
}

/// One host tick: an optional back gesture followed by a pad frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub back: bool,
    pub input: InputFrame,
}

pub fn load_script(path: &Path) -> Result<InputScript> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading input script {}", path.display()))?;
    let script: InputScript = serde_json::from_str(&data)
        .with_context(|| format!("parsing input script {}", path.display()))?;
    Ok(script)
}

impl InputScript {
    /// Expand repeats and derive `keys_down` from the previous tick's held
    /// mask, the way a pad driver would.
    pub fn steps(&self) -> Result<Vec<ScriptStep>> {
        let mut steps = Vec::new();
        let mut previous = 0u64;
        for (index, frame) in self.frames.iter().enumerate() {
            let mut held = 0u64;
            for name in &frame.held {
                held |= button_from_name(name)
                    .ok_or_else(|| anyhow!("frame {index}: unknown button {name:?}"))?;
            }
            for repeat in 0..frame.repeat {
                steps.push(ScriptStep {
                    back: frame.back && repeat == 0,
                    input: InputFrame {
                        keys_down: held & !previous,
                        keys_held: held,
                        left_stick: AnalogStick::new(frame.left_stick[0], frame.left_stick[1]),
                        right_stick: AnalogStick::new(frame.right_stick[0], frame.right_stick[1]),
                        ..Default::default()
                    },
                });
                previous = held;
            }
        }
        Ok(steps)
    }
}
