//! HTML rendering and output.
//!
//! The [`Document`] tree is written with `quick-xml` as plain markup: no
//! indentation, `<!DOCTYPE html>` first, and explicit open and close tags for
//! every element so an empty paragraph renders as `<p></p>`.
//!
//! Text content escapes `&`, `<` and `>` only, which keeps quotes in
//! headlines and the stylesheet intact. Attribute values are fully escaped.

use crate::error::{Error, Result};
use crate::models::{Document, Element};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Stylesheet embedded in every page unless the config replaces it.
pub const DEFAULT_STYLESHEET: &str = r#"
    body {
      background: linear-gradient(to bottom right, #CCCCFF, #9999FF);
      font-family: Verdana, Arial;
    }
    section {
      background-color: #fafafa;
      border: 2px solid #6699FF;
      border-radius: 25px;
      margin: 8px;
      padding: 0px 8px 0px 8px;
    }
    .shaded {
      background-color: #CCFFFF;
      border-radius: 25px;
      margin: 8px 0px 8px 0px;
      padding: 4px 8px 4px 8px;
    }
  "#;

/// Serialize a [`Document`] to UTF-8 bytes.
///
/// Rendering the same document twice yields identical bytes.
pub fn render(document: &Document) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::DocType(BytesText::from_escaped("html")))
        .map_err(Error::Serialize)?;
    write_element(&mut writer, document.root()).map_err(Error::Serialize)?;
    Ok(writer.into_inner())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> io::Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    if let Some(text) = element.text.as_deref().filter(|t| !t.is_empty()) {
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))
}

/// Render `document` and write it to `path`, creating or truncating the file.
///
/// # Returns
///
/// The number of bytes written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn write_document(path: &Path, document: &Document) -> Result<usize> {
    let bytes = render(document)?;
    debug!(bytes = bytes.len(), sections = document.sections().count(), "Rendered HTML");

    fs::write(path, &bytes).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    info!(bytes = bytes.len(), "Wrote HTML file");
    Ok(bytes.len())
}
