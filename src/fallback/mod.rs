use crate::archetype::Archetype;
use crate::wire::{ArtifactBundle, GeneratedFile};

mod templates;

/// Placeholder dropped into `python_backend` when no backend was generated.
pub const NO_BACKEND_NOTE: &str = "# No backend required: this site is fully static.\n";

/// A ready-to-render bundle for the archetype. Styling is embedded in the
/// document, so the side segments stay empty and the listing carries just
/// the page itself.
pub fn template_for(archetype: Archetype) -> ArtifactBundle {
    let (html, description) = match archetype {
        Archetype::VideoPlatform => (templates::video_platform(), "Video platform starter page"),
        Archetype::Ecommerce => (templates::ecommerce(), "Storefront starter page"),
        Archetype::Dashboard => (templates::dashboard(), "Admin dashboard starter page"),
        Archetype::Portfolio => (templates::portfolio(), "Portfolio starter page"),
        Archetype::Blog => (templates::blog(), "Blog starter page"),
        Archetype::Generic => (templates::generic(), "Landing page starter"),
    };

    ArtifactBundle {
        html_content: html.to_string(),
        css_content: String::new(),
        js_content: String::new(),
        python_backend: NO_BACKEND_NOTE.to_string(),
        files: vec![GeneratedFile {
            filename: "index.html".into(),
            file_type: "html".into(),
            content: html.to_string(),
            description: description.into(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_structurally_valid;

    #[test]
    fn test_every_template_clears_the_validator() {
        for a in Archetype::ALL {
            let bundle = template_for(a);
            assert!(
                is_structurally_valid(&bundle.html_content),
                "template for {a} failed structural validation"
            );
        }
    }

    #[test]
    fn test_templates_are_pairwise_distinct() {
        let bundles: Vec<ArtifactBundle> = Archetype::ALL.iter().map(|a| template_for(*a)).collect();
        for (i, a) in bundles.iter().enumerate() {
            for b in &bundles[i + 1..] {
                assert_ne!(a.html_content, b.html_content);
            }
        }
    }

    #[test]
    fn test_bundles_are_complete() {
        for a in Archetype::ALL {
            let bundle = template_for(a);
            assert!(!bundle.python_backend.is_empty());
            assert_eq!(bundle.files.len(), 1);
            assert_eq!(bundle.files[0].filename, "index.html");
            assert_eq!(bundle.files[0].content, bundle.html_content);
        }
    }

    #[test]
    fn test_same_archetype_same_template() {
        assert_eq!(
            template_for(Archetype::Blog).html_content,
            template_for(Archetype::Blog).html_content
        );
    }
}
