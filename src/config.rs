//! Sweep configuration document: JSON shape + line rendering.
//!
//! JSON shape:
//! {
//!   "executable": "sim",           // nominally a string
//!   "num_threads": [1, 2, 4],      // each list field is an array of scalars
//!   "length": [100],
//!   "nset": [],
//!   "vaccel": [0.1, 0.2]
//! }
//!
//! Every field is independently optional; unknown keys are ignored. A list
//! field that is present but not an array is a decode error, as is a
//! top-level value that is not an object.

use serde::Deserialize;
use serde_json::Value;

/// Parsed configuration document. Field order here is the output order.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub executable: Option<Value>,

    #[serde(default)]
    pub num_threads: Vec<Value>,

    #[serde(default)]
    pub length: Vec<Value>,

    #[serde(default)]
    pub nset: Vec<Value>,

    #[serde(default)]
    pub vaccel: Vec<Value>,
}

impl SweepConfig {
    /// Render the shell-consumable line: five segments in fixed order, each
    /// terminated by ';' (including the last), no trailing newline.
    pub fn render_line(&self) -> String {
        let executable = self
            .executable
            .as_ref()
            .map(scalar_text)
            .unwrap_or_default();

        format!(
            "{};{};{};{};{};",
            executable,
            csv(&self.num_threads),
            csv(&self.length),
            csv(&self.nset),
            csv(&self.vaccel),
        )
    }
}

/// Join list elements with ',' using the uniform scalar form.
fn csv(values: &[Value]) -> String {
    values.iter().map(scalar_text).collect::<Vec<_>>().join(",")
}

/// Uniform string form for a JSON value.
///
/// Strings are unquoted; numbers, booleans and null use serde_json's Display
/// form. Nested arrays/objects are tolerated and render as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
