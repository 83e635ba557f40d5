use anyhow::{anyhow, Result};
use fs_err as fs;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

use crate::wire::ArtifactBundle;

#[derive(Debug, Clone)]
pub struct EmitSummary {
    pub written: Vec<PathBuf>,
    pub bytes_written: u64,
}

/// Materializes a bundle under `out_dir`: the canonical artifacts first,
/// then every listed file that is not one of them already. Writes go through
/// a temp file and a rename, so a failed write never leaves a half-emitted
/// page behind.
pub fn emit_bundle(out_dir: &Path, bundle: &ArtifactBundle) -> Result<EmitSummary> {
    let mut sum = EmitSummary {
        written: Vec::new(),
        bytes_written: 0,
    };

    write_artifact(out_dir, "index.html", &bundle.html_content, &mut sum)?;
    if !bundle.css_content.trim().is_empty() {
        write_artifact(out_dir, "styles.css", &bundle.css_content, &mut sum)?;
    }
    if !bundle.js_content.trim().is_empty() {
        write_artifact(out_dir, "app.js", &bundle.js_content, &mut sum)?;
    }
    if !bundle.python_backend.trim().is_empty() {
        write_artifact(out_dir, "backend/server.py", &bundle.python_backend, &mut sum)?;
    }
    for f in &bundle.files {
        write_artifact(out_dir, &f.filename, &f.content, &mut sum)?;
    }

    Ok(sum)
}

fn write_artifact(root: &Path, rel: &str, data: &str, sum: &mut EmitSummary) -> Result<()> {
    let rel_path = sanitize_rel_path(rel)?;
    let abs = root.join(&rel_path);
    if sum.written.contains(&abs) {
        return Ok(());
    }

    if let Some(parent) = abs.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = NamedTempFile::new_in(abs.parent().unwrap_or(root))?;
    fs::write(tmp.path(), data)?;
    tmp.persist(&abs)?;

    sum.bytes_written += data.len() as u64;
    sum.written.push(abs);
    Ok(())
}

/// Bundle filenames come from model output; anything empty, absolute, or
/// that climbs out of the output directory is rejected outright.
fn sanitize_rel_path(rel: &str) -> Result<PathBuf> {
    if rel.trim().is_empty() {
        return Err(anyhow!("refusing empty artifact filename"));
    }
    let p = Path::new(rel);
    if p.is_absolute() {
        return Err(anyhow!("refusing absolute artifact path: {rel}"));
    }
    for comp in p.components() {
        match comp {
            Component::Normal(_) => {}
            _ => return Err(anyhow!("refusing artifact path with traversal: {rel}")),
        }
    }
    Ok(p.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Archetype;
    use crate::fallback;

    #[test]
    fn test_emit_writes_template_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = fallback::template_for(Archetype::Blog);
        let sum = emit_bundle(dir.path(), &bundle).unwrap();

        let index = dir.path().join("index.html");
        assert!(index.exists());
        assert_eq!(std::fs::read_to_string(&index).unwrap(), bundle.html_content);
        // Backend placeholder still lands on disk.
        assert!(dir.path().join("backend/server.py").exists());
        // index.html appears once even though files[] lists it again.
        let index_writes = sum.written.iter().filter(|p| **p == index).count();
        assert_eq!(index_writes, 1);
        assert!(sum.bytes_written > 0);
    }

    #[test]
    fn test_emit_skips_empty_side_segments() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = fallback::template_for(Archetype::Generic);
        emit_bundle(dir.path(), &bundle).unwrap();
        assert!(!dir.path().join("styles.css").exists());
        assert!(!dir.path().join("app.js").exists());
    }

    #[test]
    fn test_traversal_filenames_rejected() {
        assert!(sanitize_rel_path("../outside.html").is_err());
        assert!(sanitize_rel_path("/etc/passwd").is_err());
        assert!(sanitize_rel_path("a/../../b").is_err());
        assert!(sanitize_rel_path("").is_err());
        assert!(sanitize_rel_path("assets/logo.svg").is_ok());
    }

    #[test]
    fn test_bad_listed_filename_fails_emit() {
        let dir = tempfile::tempdir().unwrap();
        let mut bundle = fallback::template_for(Archetype::Generic);
        bundle.files[0].filename = "../escape.html".into();
        assert!(emit_bundle(dir.path(), &bundle).is_err());
    }
}
