use crate::archetype::Archetype;

/// System message for every generation call. Demands one complete document
/// with everything embedded, so a single fence carries the whole site.
pub fn system_prompt() -> &'static str {
    r#"You are an expert web developer. Generate complete, working single-file websites.

RULES:
1. Output ONE complete HTML document with embedded CSS and JavaScript
2. Full structure is mandatory: <!DOCTYPE html>, <head> with meta and title, <body> with real content
3. Embed CSS in <style> tags inside <head>; embed JavaScript in <script> tags before </body>
4. Use modern CSS (flexbox/grid), responsive breakpoints, hover states and transitions
5. Use vanilla JavaScript only, no external dependencies or CDN links
6. Use semantic HTML5 tags and keep contrast and keyboard access sane
7. Write realistic copy for the requested site, never lorem ipsum
8. Only add a separate ```python fence (FastAPI) when the site truly needs a backend

Format your response with the HTML inside triple backticks:

```html
[COMPLETE HTML CODE]
```

Do NOT add explanations before or after the code."#
}

fn archetype_hint(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::VideoPlatform => {
            "Shape it like a video platform: a prominent player area, a thumbnail grid of related videos, channel info and a search bar."
        }
        Archetype::Ecommerce => {
            "Shape it like a storefront: product cards with prices, an add-to-cart interaction, a cart indicator in the header and a checkout call to action."
        }
        Archetype::Dashboard => {
            "Shape it like an admin dashboard: a sidebar navigation, stat summary cards, at least one chart-like visual and a recent-activity table."
        }
        Archetype::Portfolio => {
            "Shape it like a personal portfolio: a hero introduction, a filterable project gallery, a skills section and a contact block."
        }
        Archetype::Blog => {
            "Shape it like a blog: a featured article, a chronological post list with excerpts and dates, category tags and an about sidebar."
        }
        Archetype::Generic => {
            "Shape it as a clean multi-section landing page: hero, feature highlights, an about section and a footer with contact details."
        }
    }
}

/// User message carrying the raw request plus the archetype's layout hint.
pub fn user_prompt(task: &str, archetype: Archetype) -> String {
    format!(
        r#"Create a complete, functional website for this request:

USER REQUEST: {task}

{hint}

Generate ONE complete HTML file with everything embedded (CSS and JavaScript).
Make it beautiful, modern, responsive and fully functional.
Include all requested features and sections with realistic content."#,
        task = task,
        hint = archetype_hint(archetype),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_carries_task_and_hint() {
        let p = user_prompt("a recipe blog", Archetype::Blog);
        assert!(p.contains("a recipe blog"));
        assert!(p.contains("featured article"));
    }

    #[test]
    fn test_every_archetype_has_a_distinct_hint() {
        let hints: Vec<&str> = Archetype::ALL.iter().map(|a| archetype_hint(*a)).collect();
        for (i, a) in hints.iter().enumerate() {
            for b in &hints[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
