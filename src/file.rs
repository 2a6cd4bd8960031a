//! Transforms over already-loaded file contents.
//!
//! Only Markdown headings are converted: a line of one to six `#` followed by
//! a space (or nothing) becomes an `<hN>` element, and every other line passes
//! through untouched.
//!
//! ```rust
//! use convkit::{file, FileConversion};
//!
//! let html = file::convert("# Title\ntext\n### Sub", FileConversion::MarkdownToHtml).unwrap();
//! assert_eq!(html, "<h1>Title</h1>\ntext\n<h3>Sub</h3>");
//! ```

use crate::{Error, FileConversion, Result};

const MAX_HEADING_LEVEL: usize = 6;

/// Applies `conversion` to `contents`.
///
/// # Errors
///
/// [`Error::UnsupportedOption`] for [`FileConversion::PdfToText`]; PDF text
/// extraction is not available.
pub fn convert(contents: &str, conversion: FileConversion) -> Result<String> {
    match conversion {
        FileConversion::MarkdownToHtml => {
            let html = markdown_headings(contents);
            log::debug!("converted {} bytes of Markdown", contents.len());
            Ok(html)
        }
        FileConversion::PdfToText => Err(Error::unsupported_option(
            "PDF to text conversion requires an external PDF library",
        )),
    }
}

fn markdown_headings(markdown: &str) -> String {
    markdown
        .split('\n')
        .map(|line| match heading(line) {
            Some((level, text)) => format!("<h{level}>{text}</h{level}>"),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() {
        return Some((level, ""));
    }
    rest.strip_prefix(' ')
        .map(|text| (level, text.trim_end_matches(['\r', ' '])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn md(s: &str) -> String {
        convert(s, FileConversion::MarkdownToHtml).unwrap()
    }

    #[test]
    fn test_levels() {
        assert_eq!(md("# a"), "<h1>a</h1>");
        assert_eq!(md("###### f"), "<h6>f</h6>");
        assert_eq!(md("####### g"), "####### g");
    }

    #[test]
    fn test_requires_space() {
        assert_eq!(md("#hashtag"), "#hashtag");
        assert_eq!(md("##"), "<h2></h2>");
    }

    #[test]
    fn test_other_lines_untouched() {
        assert_eq!(md("a # b\n\n  # c"), "a # b\n\n  # c");
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(md("# a\r\nb\r\n"), "<h1>a</h1>\nb\r\n");
    }

    #[test]
    fn test_pdf_unsupported() {
        let err = convert("%PDF-1.7", FileConversion::PdfToText).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOption);
    }
}
