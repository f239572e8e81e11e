//! Reading plain-text article files and appending them to a [`Document`].
//!
//! An article file is a header line followed by the paragraph body:
//!
//! ```text
//! Area Man Reads Entire Article
//! Sources confirm the man read past the headline,
//! a first for the region.
//! ```
//!
//! # Input plan
//!
//! A single article is read from `<base>.<ext>`. When several are requested
//! they are numbered from zero (`<base>0.<ext>`, `<base>1.<ext>`, ...) and
//! appended in that order.

use crate::error::{Error, Result};
use crate::models::{Article, Document};
use crate::utils::truncate_for_log;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Split file contents into an [`Article`].
///
/// Line breaks may be `\n`, `\r\n` or a bare `\r`. The first line, trimmed,
/// is the header. The remaining lines are joined with `\n` and the result is
/// trimmed as a whole, so a header-only file yields an empty body.
///
/// # Errors
///
/// [`Error::EmptyArticle`] when `contents` has no lines at all.
pub fn parse_article(path: &Path, contents: &str) -> Result<Article> {
    let contents = contents.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = contents.split_terminator('\n');
    let header = lines.next().ok_or_else(|| Error::EmptyArticle {
        path: path.to_path_buf(),
    })?;
    let body = lines.collect::<Vec<_>>().join("\n");

    Ok(Article {
        header: header.trim().to_string(),
        body: body.trim().to_string(),
    })
}

/// Read and parse one article file.
///
/// The file is read fully and closed before this returns.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_article(path: &Path) -> Result<Article> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ReadArticle {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = contents.len(), "Read article file");

    let article = parse_article(path, &contents)?;
    info!(header = %article.header, body_bytes = article.body.len(), "Parsed article");
    debug!(preview = %truncate_for_log(&article.body, 80), "Article body");
    Ok(article)
}

/// Read the article at `path` and append it to `document` as a new section.
pub fn append_article<'a>(document: &'a mut Document, path: &Path) -> Result<&'a mut Document> {
    let article = read_article(path)?;
    Ok(document.push_article(article))
}

/// The files to read for `count` articles, in the order they are appended.
///
/// `count <= 1` means a single unnumbered file.
pub fn input_paths(base: &str, count: u32, extension: &str) -> Vec<PathBuf> {
    if count <= 1 {
        vec![PathBuf::from(format!("{base}.{extension}"))]
    } else {
        (0..count)
            .map(|i| PathBuf::from(format!("{base}{i}.{extension}")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_header_and_body() {
        let article = parse_article(
            Path::new("a.txt"),
            "  Breaking News  \nLine one.\nLine two.\n",
        )
        .unwrap();
        assert_eq!(article.header, "Breaking News");
        assert_eq!(article.body, "Line one.\nLine two.");
    }

    #[test]
    fn test_parse_trims_body_as_a_whole() {
        let article = parse_article(Path::new("a.txt"), "Head\n\n   indented\n  kept  \n\n").unwrap();
        assert_eq!(article.body, "indented\n  kept");
    }

    #[test]
    fn test_parse_crlf() {
        let article = parse_article(Path::new("a.txt"), "Head\r\nOne\r\nTwo\r\n").unwrap();
        assert_eq!(article.header, "Head");
        assert_eq!(article.body, "One\nTwo");
    }

    #[test]
    fn test_parse_cr_line_endings() {
        let article = parse_article(Path::new("a.txt"), "Head\rOne\rTwo\r").unwrap();
        assert_eq!(article.header, "Head");
        assert_eq!(article.body, "One\nTwo");
    }

    #[test]
    fn test_parse_header_only() {
        let article = parse_article(Path::new("a.txt"), "Just a headline\n").unwrap();
        assert_eq!(article.header, "Just a headline");
        assert_eq!(article.body, "");
    }

    #[test]
    fn test_parse_empty_file_is_error() {
        let err = parse_article(Path::new("empty.txt"), "").unwrap_err();
        assert!(matches!(err, Error::EmptyArticle { ref path } if path == Path::new("empty.txt")));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_article(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::ReadArticle { .. }));
    }

    #[test]
    fn test_append_article_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.txt");
        fs::write(&path, "Headline\nBody text.\n").unwrap();

        let mut doc = Document::new("t", "");
        append_article(&mut doc, &path).unwrap();

        let section = doc.sections().next().unwrap();
        assert_eq!(section.child("h2").unwrap().text(), "Headline");
        assert_eq!(section.child("p").unwrap().text(), "Body text.");
    }

    #[test]
    fn test_input_paths_single() {
        assert_eq!(input_paths("story", 1, "txt"), vec![PathBuf::from("story.txt")]);
    }

    #[test]
    fn test_input_paths_numbered() {
        assert_eq!(
            input_paths("article", 3, "txt"),
            vec![
                PathBuf::from("article0.txt"),
                PathBuf::from("article1.txt"),
                PathBuf::from("article2.txt"),
            ]
        );
    }
}
