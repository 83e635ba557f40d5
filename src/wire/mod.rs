use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::archetype::Archetype;
use crate::errors::RequestError;

/// ========================================
/// Request/Bundle wire model
/// ========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype_override: Option<Archetype>,
}

impl GenerationRequest {
    /// The one place an empty prompt can be rejected; everything past
    /// construction works with a known-good request.
    pub fn new(prompt: impl Into<String>) -> Result<Self, RequestError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(RequestError::EmptyPrompt);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            prompt,
            archetype_override: None,
        })
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype_override = Some(archetype);
        self
    }
}

/// One file of the generated site, as the preview surface lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub filename: String,
    pub file_type: String,
    pub content: String,
    pub description: String,
}

/// The product of one generation cycle. `html_content` is always a complete
/// renderable document; the other segments may be empty when the page embeds
/// everything inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub html_content: String,
    pub css_content: String,
    pub js_content: String,
    pub python_backend: String,
    pub files: Vec<GeneratedFile>,
}
