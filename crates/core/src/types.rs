use serde::{Deserialize, Serialize};

use crate::error::{Result, ViralscriptError};

/// Validated pair of user inputs for one generation call.
///
/// Construction is the only validation point: a request that exists is safe to
/// send. Values are kept as entered; only the emptiness check trims.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    reference_script: String,
    new_topic: String,
}

impl GenerationRequest {
    pub fn new(reference_script: impl Into<String>, new_topic: impl Into<String>) -> Result<Self> {
        let reference_script = reference_script.into();
        let new_topic = new_topic.into();

        if reference_script.trim().is_empty() {
            return Err(ViralscriptError::EmptyInput {
                field: "reference script",
            });
        }
        if new_topic.trim().is_empty() {
            return Err(ViralscriptError::EmptyInput { field: "new topic" });
        }

        Ok(Self {
            reference_script,
            new_topic,
        })
    }

    pub fn reference_script(&self) -> &str {
        &self.reference_script
    }

    pub fn new_topic(&self) -> &str {
        &self.new_topic
    }
}

/// Why the reference script worked, as judged by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptAnalysis {
    pub hook_strategy: String,
    pub pacing_and_tone: String,
    pub retention_tactics: Vec<String>,
}

/// One spoken segment of the generated script plus its editing instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSection {
    pub section_name: String,
    pub spoken_audio: String,
    pub visual_cue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScript {
    pub title: String,
    pub thumbnail_idea: String,
    pub sections: Vec<ScriptSection>,
}

/// Complete structured reply from the model: analysis plus the new script.
/// Replaced wholesale on every generation; never merged or patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScriptResult {
    pub analysis: ScriptAnalysis,
    pub new_script: NewScript,
}
