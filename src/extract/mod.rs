use regex::Regex;
use std::sync::OnceLock;

/// Segments pulled from one raw completion. Absent segments stay empty;
/// extraction itself never fails, it only comes back with less.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedArtifacts {
    pub html: String,
    pub css: String,
    pub js: String,
    pub python: String,
}

struct Fence {
    tag: String,
    body: String,
}

/// Layered parse of a model response. Strategies run in order and each
/// segment keeps the first thing that found it:
///
/// 1. language-tagged fences, assigned by tag
/// 2. the largest remaining fence that reads as a document
/// 3. the whole response, when it reads as a document itself
///
/// then inline `<style>`/`<script>` spans are copied into still-empty CSS/JS
/// segments. The page keeps its embedded copies; duplication is acceptable,
/// losing a span is not.
pub fn extract(raw: &str) -> ExtractedArtifacts {
    let fences = parse_fences(raw);

    let mut out = ExtractedArtifacts {
        html: first_tagged(&fences, &["html"]),
        css: first_tagged(&fences, &["css"]),
        js: first_tagged(&fences, &["javascript", "js"]),
        python: first_tagged(&fences, &["python", "py"]),
    };

    // Models routinely mislabel or omit the language line.
    if out.html.is_empty() {
        out.html = fences
            .iter()
            .filter(|f| looks_like_html(&f.body))
            .max_by_key(|f| f.body.len())
            .map(|f| f.body.trim().to_string())
            .unwrap_or_default();
    }

    if out.html.is_empty() && looks_like_html(raw) {
        out.html = raw.trim().to_string();
    }

    if !out.html.is_empty() {
        if out.css.is_empty() {
            out.css = lift_spans(&out.html, style_re());
        }
        if out.js.is_empty() {
            out.js = lift_spans(&out.html, script_re());
        }
        out.html = ensure_doctype(&out.html);
    }

    out
}

/// Fence interiors in order of appearance. The first line of an interior is
/// taken as the language tag when it is a bare word; otherwise the whole
/// interior is the body.
fn parse_fences(raw: &str) -> Vec<Fence> {
    let parts: Vec<&str> = raw.split("```").collect();
    let mut fences = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 0 {
            continue;
        }
        let (tag, body) = match part.split_once('\n') {
            Some((first, rest)) if is_language_tag(first.trim()) => {
                (first.trim().to_lowercase(), rest.to_string())
            }
            _ => (String::new(), (*part).to_string()),
        };
        fences.push(Fence { tag, body });
    }
    fences
}

fn is_language_tag(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 20
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '+' || c == '#')
}

fn first_tagged(fences: &[Fence], tags: &[&str]) -> String {
    fences
        .iter()
        .find(|f| tags.contains(&f.tag.as_str()))
        .map(|f| f.body.trim().to_string())
        .unwrap_or_default()
}

fn looks_like_html(s: &str) -> bool {
    let t = s.to_lowercase();
    t.contains("<html") || t.contains("<!doctype")
}

fn style_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<style[^>]*>(.*?)</style>").unwrap())
}

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<script[^>]*>(.*?)</script>").unwrap())
}

fn lift_spans(html: &str, re: &Regex) -> String {
    let mut spans = Vec::new();
    for cap in re.captures_iter(html) {
        let body = cap[1].trim();
        if !body.is_empty() {
            spans.push(body.to_string());
        }
    }
    spans.join("\n\n")
}

/// Prefixes a doctype onto a document that starts at `<html`; fragments and
/// already-declared documents pass through untouched.
fn ensure_doctype(html: &str) -> String {
    let lowered = html.trim_start().to_lowercase();
    if lowered.starts_with("<html") && !lowered.starts_with("<!doctype") {
        format!("<!DOCTYPE html>\n{html}")
    } else {
        html.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<!DOCTYPE html>\n<html>\n<head><title>t</title></head>\n<body>hi</body>\n</html>";

    #[test]
    fn test_tagged_fences_assign_all_segments() {
        let raw = format!(
            "Here you go:\n```html\n{DOC}\n```\n```css\nbody {{ margin: 0; }}\n```\n```javascript\nconsole.log(1);\n```\n```python\nprint(1)\n```\n"
        );
        let got = extract(&raw);
        assert_eq!(got.html, DOC);
        assert_eq!(got.css, "body { margin: 0; }");
        assert_eq!(got.js, "console.log(1);");
        assert_eq!(got.python, "print(1)");
    }

    #[test]
    fn test_js_tag_alias() {
        let raw = "```js\nalert(1)\n```";
        assert_eq!(extract(raw).js, "alert(1)");
    }

    #[test]
    fn test_untagged_fence_with_document_becomes_html() {
        let raw = format!("Sure!\n```\n{DOC}\n```\nEnjoy.");
        assert_eq!(extract(&raw).html, DOC);
    }

    #[test]
    fn test_largest_document_fence_wins() {
        let small = "<html><body>a</body></html>";
        let raw = format!("```\n{small}\n```\ntext\n```\n{DOC}\n```");
        assert_eq!(extract(&raw).html, DOC);
    }

    #[test]
    fn test_bare_document_without_fences() {
        let got = extract(DOC);
        assert_eq!(got.html, DOC);
    }

    #[test]
    fn test_inline_spans_lift_into_empty_segments() {
        let doc = "<!DOCTYPE html>\n<html><head><style>body { color: red; }</style></head>\n<body><script>let x = 1;</script></body></html>";
        let got = extract(doc);
        assert_eq!(got.css, "body { color: red; }");
        assert_eq!(got.js, "let x = 1;");
        // The page keeps its embedded copies.
        assert!(got.html.contains("<style>"));
        assert!(got.html.contains("<script>"));
    }

    #[test]
    fn test_tagged_css_is_not_overwritten_by_span_lift() {
        let raw = "```html\n<!DOCTYPE html><html><head><style>a{}</style></head><body>x</body></html>\n```\n```css\nb{}\n```";
        assert_eq!(extract(raw).css, "b{}");
    }

    #[test]
    fn test_doctype_prefixed_when_document_starts_at_html() {
        let raw = "<html><head></head><body>page</body></html>";
        let got = extract(raw);
        assert!(got.html.starts_with("<!DOCTYPE html>\n<html>"));
    }

    #[test]
    fn test_fragment_is_not_given_a_doctype() {
        let raw = "```html\n<div>just a widget</div>\n```";
        assert_eq!(extract(raw).html, "<div>just a widget</div>");
    }

    #[test]
    fn test_garbage_yields_empty_segments() {
        let got = extract("Sorry, I cannot help with that.");
        assert_eq!(got, ExtractedArtifacts::default());
    }

    #[test]
    fn test_unclosed_fence_still_yields_partial_body() {
        let raw = "```html\n<!DOCTYPE html><html><body>cut off";
        let got = extract(raw);
        assert!(got.html.contains("cut off"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let raw = format!("intro\n```html\n{DOC}\n```\n```css\np {{}}\n```\ntrailing notes");
        assert_eq!(extract(&raw), extract(&raw));
    }

    #[test]
    fn test_stray_backticks_do_not_panic() {
        let _ = extract("``````");
        let _ = extract("```");
        let _ = extract("a```b```c```d");
    }
}
