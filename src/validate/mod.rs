/// Floor below which text cannot plausibly be a complete page.
pub const MIN_DOCUMENT_LEN: usize = 300;

/// Structural completeness check: a doctype, an opened and closed head, an
/// opened and closed body, and enough bytes to be a real page. Nothing about
/// styling, scripts or content quality belongs here; a stricter gate throws
/// away perfectly renderable documents.
pub fn is_structurally_valid(html: &str) -> bool {
    if html.len() < MIN_DOCUMENT_LEN {
        return false;
    }
    let t = html.to_lowercase();
    t.contains("<!doctype")
        && (t.contains("<head>") || t.contains("<head "))
        && t.contains("</head>")
        && (t.contains("<body>") || t.contains("<body "))
        && t.contains("</body>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_of_len(target: usize) -> String {
        let mut body = String::from("content ");
        while body.len() < target {
            body.push_str("more words here ");
        }
        format!(
            "<!DOCTYPE html>\n<html>\n<head><title>x</title></head>\n<body>{body}</body>\n</html>"
        )
    }

    #[test]
    fn test_complete_document_passes() {
        assert!(is_structurally_valid(&doc_of_len(400)));
    }

    #[test]
    fn test_short_document_fails_the_floor() {
        let tiny = "<!DOCTYPE html><html><head></head><body>x</body></html>";
        assert!(tiny.len() < MIN_DOCUMENT_LEN);
        assert!(!is_structurally_valid(tiny));
    }

    #[test]
    fn test_missing_doctype_fails() {
        let doc = doc_of_len(400).replace("<!DOCTYPE html>\n", "");
        assert!(!is_structurally_valid(&doc));
    }

    #[test]
    fn test_missing_head_fails() {
        let doc = doc_of_len(400).replace("<head><title>x</title></head>", "");
        assert!(!is_structurally_valid(&doc));
    }

    #[test]
    fn test_header_element_is_not_a_head() {
        let mut body = String::from("<header>site</header>");
        while body.len() < 400 {
            body.push_str("filler text ");
        }
        let doc = format!("<!DOCTYPE html>\n<html>\n<body>{body}</body>\n</html>");
        assert!(!is_structurally_valid(&doc));
    }

    #[test]
    fn test_attributes_on_head_and_body_are_fine() {
        let doc = doc_of_len(400)
            .replace("<head>", "<head profile=\"x\">")
            .replace("<body>", "<body class=\"page\">");
        assert!(is_structurally_valid(&doc));
    }

    #[test]
    fn test_no_style_tag_required() {
        let doc = doc_of_len(400);
        assert!(!doc.contains("<style"));
        assert!(is_structurally_valid(&doc));
    }

    #[test]
    fn test_case_insensitive() {
        let doc = doc_of_len(400)
            .replace("<!DOCTYPE html>", "<!doctype HTML>")
            .replace("<head>", "<HEAD>")
            .replace("</head>", "</HEAD>");
        assert!(is_structurally_valid(&doc));
    }
}
