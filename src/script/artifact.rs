use super::runtime::RuntimeScript;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::io::{Read, Write};

// Persistence for compiled scripts. The JSON form is the wire contract with
// the chat client; the bincode form is a compact cache for callers that
// compile once and serve many sessions.
impl RuntimeScript {
    /// Serializes the script to its JSON wire form.
    pub fn to_json(&self) -> Result<String, ArtifactError> {
        serde_json::to_string(self).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Deserializes a script from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        serde_json::from_str(json).map_err(|e| ArtifactError::Decode(e.to_string()))
    }

    /// Saves the compiled script to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes =
            encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a compiled script from a bincode file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a compiled script from a bincode byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(script, _)| script) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
