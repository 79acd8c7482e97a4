//! Bridge request descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Operation tag carried in the `mode` field of every bridge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    List,
    Copy,
    Move,
    Delete,
    EditFile,
    SaveFile,
    Rename,
    Download,
    Compress,
    Extract,
    ChangePermissions,
    AddFolder,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::List => "list",
            Mode::Copy => "copy",
            Mode::Move => "move",
            Mode::Delete => "delete",
            Mode::EditFile => "editfile",
            Mode::SaveFile => "savefile",
            Mode::Rename => "rename",
            Mode::Download => "download",
            Mode::Compress => "compress",
            Mode::Extract => "extract",
            Mode::ChangePermissions => "changepermissions",
            Mode::AddFolder => "addfolder",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mode tag plus its flat parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    mode: Mode,
    params: Map<String, Value>,
}

impl RequestDescriptor {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            params: Map::new(),
        }
    }

    /// Add a parameter. A later value for the same key replaces the earlier one.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Wire body: `{"params": {"mode": "<tag>", ...}}`.
    pub fn to_body(&self) -> Value {
        let mut params = self.params.clone();
        params.insert("mode".to_string(), json!(self.mode));
        json!({ "params": params })
    }
}
