use std::fmt;
use std::time::Instant;

use tracing::{info, warn};

use crate::archetype::{Archetype, ArchetypeDetector};
use crate::client::CompletionClient;
use crate::errors::CompletionError;
use crate::extract::{self, ExtractedArtifacts};
use crate::fallback;
use crate::validate;
use crate::wire::{ArtifactBundle, GeneratedFile, GenerationRequest};

/// Responses shorter than this cannot contain a document; they skip
/// extraction entirely and count as empty.
pub const MIN_RAW_LEN: usize = 100;

/// Why a request was answered from the template library instead of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    BudgetExceeded,
    ProviderError,
    ExtractionEmpty,
    ValidationFailed,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::BudgetExceeded => "budget_exceeded",
            FallbackReason::ProviderError => "provider_error",
            FallbackReason::ExtractionEmpty => "extraction_empty",
            FallbackReason::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSource {
    Model,
    Fallback(FallbackReason),
}

/// One finished generation cycle: the bundle plus enough context to explain
/// where it came from.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub bundle: ArtifactBundle,
    pub archetype: Archetype,
    pub source: GenerationSource,
    pub elapsed_ms: u64,
}

/// Sequences detection, completion, extraction and validation, and degrades
/// to an archetype template at every failure branch. Never errors: by the
/// time a request exists, the worst possible outcome is a generic page.
pub struct Generator {
    detector: ArchetypeDetector,
    client: CompletionClient,
}

impl Generator {
    pub fn new(detector: ArchetypeDetector, client: CompletionClient) -> Self {
        Self { detector, client }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let started = Instant::now();
        let archetype = request
            .archetype_override
            .unwrap_or_else(|| self.detector.detect(&request.prompt));
        info!(request = %request.id, %archetype, overridden = request.archetype_override.is_some(), "archetype resolved");

        let raw = match self.client.complete(request, archetype).await {
            Ok(text) => text,
            Err(e) => {
                let reason = match e {
                    CompletionError::Budget(_) => FallbackReason::BudgetExceeded,
                    CompletionError::Provider(_) | CompletionError::Timeout(_) => {
                        FallbackReason::ProviderError
                    }
                };
                warn!(request = %request.id, error = %e, %reason, "completion failed");
                return self.fallback(request, archetype, reason, started);
            }
        };

        if raw.len() < MIN_RAW_LEN {
            warn!(
                request = %request.id,
                bytes = raw.len(),
                reason = %FallbackReason::ExtractionEmpty,
                "response too short to carry a document"
            );
            return self.fallback(request, archetype, FallbackReason::ExtractionEmpty, started);
        }

        let artifacts = extract::extract(&raw);
        if artifacts.html.is_empty() {
            warn!(
                request = %request.id,
                reason = %FallbackReason::ExtractionEmpty,
                "no HTML segment found in response"
            );
            return self.fallback(request, archetype, FallbackReason::ExtractionEmpty, started);
        }

        if !validate::is_structurally_valid(&artifacts.html) {
            warn!(
                request = %request.id,
                bytes = artifacts.html.len(),
                reason = %FallbackReason::ValidationFailed,
                "extracted document is structurally incomplete"
            );
            return self.fallback(request, archetype, FallbackReason::ValidationFailed, started);
        }

        let bundle = assemble(artifacts);
        info!(
            request = %request.id,
            %archetype,
            html_bytes = bundle.html_content.len(),
            source = "model",
            "document accepted"
        );
        GenerationOutcome {
            bundle,
            archetype,
            source: GenerationSource::Model,
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }

    fn fallback(
        &self,
        request: &GenerationRequest,
        archetype: Archetype,
        reason: FallbackReason,
        started: Instant,
    ) -> GenerationOutcome {
        info!(request = %request.id, %archetype, %reason, source = "fallback", "serving archetype template");
        GenerationOutcome {
            bundle: fallback::template_for(archetype),
            archetype,
            source: GenerationSource::Fallback(reason),
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }
}

/// Builds the bundle from extracted segments. The file listing mirrors the
/// non-empty segments so a download of `files` reproduces the site.
fn assemble(artifacts: ExtractedArtifacts) -> ArtifactBundle {
    let mut files = vec![GeneratedFile {
        filename: "index.html".into(),
        file_type: "html".into(),
        content: artifacts.html.clone(),
        description: "Main application page".into(),
    }];

    if !artifacts.css.is_empty() {
        files.push(GeneratedFile {
            filename: "styles.css".into(),
            file_type: "css".into(),
            content: artifacts.css.clone(),
            description: "Stylesheet".into(),
        });
    }
    if !artifacts.js.is_empty() {
        files.push(GeneratedFile {
            filename: "app.js".into(),
            file_type: "javascript".into(),
            content: artifacts.js.clone(),
            description: "Client script".into(),
        });
    }

    let python_backend = if artifacts.python.is_empty() {
        fallback::NO_BACKEND_NOTE.to_string()
    } else {
        files.push(GeneratedFile {
            filename: "backend/server.py".into(),
            file_type: "python".into(),
            content: artifacts.python.clone(),
            description: "Backend service".into(),
        });
        artifacts.python.clone()
    };

    ArtifactBundle {
        html_content: artifacts.html,
        css_content: artifacts.css,
        js_content: artifacts.js,
        python_backend,
        files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractedArtifacts;

    #[test]
    fn test_assemble_lists_only_present_segments() {
        let bundle = assemble(ExtractedArtifacts {
            html: "<!DOCTYPE html><html>...</html>".into(),
            css: String::new(),
            js: "let a = 1;".into(),
            python: String::new(),
        });
        let names: Vec<&str> = bundle.files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["index.html", "app.js"]);
        assert_eq!(bundle.python_backend, fallback::NO_BACKEND_NOTE);
    }

    #[test]
    fn test_assemble_carries_backend_through() {
        let bundle = assemble(ExtractedArtifacts {
            html: "<!DOCTYPE html><html>...</html>".into(),
            css: "body {}".into(),
            js: String::new(),
            python: "from fastapi import FastAPI".into(),
        });
        assert_eq!(bundle.python_backend, "from fastapi import FastAPI");
        assert!(bundle.files.iter().any(|f| f.filename == "backend/server.py"));
        assert!(bundle.files.iter().any(|f| f.filename == "styles.css"));
    }
}
