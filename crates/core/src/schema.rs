use serde_json::{Value, json};

/// JSON schema constraining the model reply to the `GeneratedScriptResult`
/// shape. Every field is required; the descriptions steer the model.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "analysis": {
                "type": "object",
                "properties": {
                    "hookStrategy": {
                        "type": "string",
                        "description": "Analysis of how the original script grabs attention."
                    },
                    "pacingAndTone": {
                        "type": "string",
                        "description": "Description of the rhythm, speed, and emotional tone."
                    },
                    "retentionTactics": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of specific psychological triggers used to keep viewers watching."
                    }
                },
                "required": ["hookStrategy", "pacingAndTone", "retentionTactics"],
                "additionalProperties": false
            },
            "newScript": {
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "A click-baity, viral-style title for the new video."
                    },
                    "thumbnailIdea": {
                        "type": "string",
                        "description": "A concept for the thumbnail text/visual."
                    },
                    "sections": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "sectionName": {
                                    "type": "string",
                                    "description": "E.g., Hook, Body, Climax, CTA"
                                },
                                "spokenAudio": {
                                    "type": "string",
                                    "description": "The actual words the narrator says."
                                },
                                "visualCue": {
                                    "type": "string",
                                    "description": "Instructions for b-roll, graphics, or editing."
                                }
                            },
                            "required": ["sectionName", "spokenAudio", "visualCue"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["title", "thumbnailIdea", "sections"],
                "additionalProperties": false
            }
        },
        "required": ["analysis", "newScript"],
        "additionalProperties": false
    })
}

/// `response_format` body for OpenAI-compatible structured output
pub fn response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "generated_script_result",
            "strict": true,
            "schema": response_schema()
        }
    })
}
