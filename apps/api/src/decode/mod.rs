//! Document decoding: PDF, DOCX, and plain-text payloads to raw text.
//!
//! The extraction core only ever sees the resulting string; a payload that
//! cannot be decoded is rejected here, before any extractor runs.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unsupported file format '{0}'. Please upload PDF, DOCX, or TXT")]
    UnsupportedFormat(String),

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),

    #[error("File is not valid UTF-8 text")]
    Encoding,
}

/// Declared document format, derived from the uploaded filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    pub fn from_filename(filename: &str) -> Result<Self, DecodeError> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(Self::Docx)
        } else if lower.ends_with(".txt") {
            Ok(Self::Text)
        } else {
            Err(DecodeError::UnsupportedFormat(filename.to_string()))
        }
    }
}

/// Decodes an uploaded payload into raw text.
pub fn decode(format: DocumentFormat, bytes: &[u8]) -> Result<String, DecodeError> {
    match format {
        DocumentFormat::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| DecodeError::Pdf(e.to_string()))
        }
        DocumentFormat::Docx => decode_docx(bytes),
        DocumentFormat::Text => {
            String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::Encoding)
        }
    }
}

/// A DOCX file is a zip archive; the body text lives in
/// `word/document.xml`. Text runs are concatenated and paragraph ends
/// become line breaks, so line-oriented scanners see one paragraph per line.
fn decode_docx(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| DecodeError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| DecodeError::Docx(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| DecodeError::Docx(e.to_string()))?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(t)) => match t.unescape() {
                Ok(s) => text.push_str(&s),
                Err(e) => return Err(DecodeError::Docx(e.to_string())),
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Eof) => break,
            Err(e) => return Err(DecodeError::Docx(e.to_string())),
            Ok(_) => {}
        }
        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(DocumentFormat::from_filename("cv.pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("CV.DOCX").unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_filename("notes.txt").unwrap(), DocumentFormat::Text);
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = DocumentFormat::from_filename("resume.odt").unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedFormat(_)));
        assert!(DocumentFormat::from_filename("resume").is_err());
    }

    #[test]
    fn test_plain_text_decodes() {
        let text = decode(DocumentFormat::Text, b"Jane Doe\njane@mail.com").unwrap();
        assert_eq!(text, "Jane Doe\njane@mail.com");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let err = decode(DocumentFormat::Text, &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, DecodeError::Encoding));
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let document_xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Software </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            writer
                .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }

        let text = decode(DocumentFormat::Docx, buf.get_ref()).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines, vec!["Jane Doe", "Software Engineer"]);
    }

    #[test]
    fn test_docx_garbage_is_rejected() {
        let err = decode(DocumentFormat::Docx, b"not a zip archive").unwrap_err();
        assert!(matches!(err, DecodeError::Docx(_)));
    }
}
