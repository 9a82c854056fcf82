//! Tanzil XML reader.
//!
//! Expected layout:
//!
//! ```text
//! <quran>
//!   <sura index="1" name="...">
//!     <aya index="1" text="..." />
//!   </sura>
//!   <sura index="2" name="...">
//!     <aya index="1" text="..." bismillah="..." />
//!     ...
//! </quran>
//! ```
//!
//! Only `sura@name`, `aya@index`, `aya@text` and the optional `aya@bismillah`
//! are used. Surah numbering comes from document order, never from
//! `sura@index`.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, trace, warn};

use tanzil_model::{AyahIndex, AyahNode, Corpus, SurahNode};

use crate::error::{IngestError, Result};

/// Parse raw source bytes into a [`Corpus`].
pub fn parse_corpus(source: &[u8]) -> Result<Corpus> {
    let content = std::str::from_utf8(strip_bom(source))
        .map_err(|err| IngestError::malformed(format!("source is not valid UTF-8: {err}")))?;
    parse_corpus_str(content)
}

pub fn parse_corpus_str(content: &str) -> Result<Corpus> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut builder = CorpusBuilder::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                match name.as_ref() {
                    b"sura" => builder.open_surah(&e)?,
                    b"aya" => builder.push_ayah(&e)?,
                    _ => {}
                }
            }
            Event::Empty(e) => {
                let name = e.name();
                match name.as_ref() {
                    b"sura" => {
                        builder.open_surah(&e)?;
                        builder.close_surah()?;
                    }
                    b"aya" => builder.push_ayah(&e)?,
                    _ => {}
                }
            }
            Event::End(e) if e.name().as_ref() == b"sura" => builder.close_surah()?,
            Event::Eof => break,
            _ => {}
        }
    }

    builder.finish()
}

#[derive(Debug)]
struct OpenSurah {
    number: usize,
    name: String,
    ayahs: Vec<AyahNode>,
}

#[derive(Debug, Default)]
struct CorpusBuilder {
    surahs: Vec<SurahNode>,
    current: Option<OpenSurah>,
}

impl CorpusBuilder {
    fn open_surah(&mut self, element: &BytesStart<'_>) -> Result<()> {
        let number = self.surahs.len() + 1;
        if let Some(open) = &self.current {
            return Err(IngestError::malformed(format!(
                "surah {number} starts inside surah {}",
                open.number
            )));
        }

        let name = required_attribute(element, b"name", || format!("surah {number}"))?;
        if let Some(declared) = attribute(element, b"index")?
            && declared != number.to_string()
        {
            warn!(
                surah = number,
                declared = %declared,
                "declared surah index differs from its position; using position"
            );
        }

        trace!(surah = number, name = %name, "surah opened");
        self.current = Some(OpenSurah {
            number,
            name,
            ayahs: Vec::new(),
        });
        Ok(())
    }

    fn push_ayah(&mut self, element: &BytesStart<'_>) -> Result<()> {
        let Some(open) = self.current.as_mut() else {
            return Err(IngestError::malformed(format!(
                "ayah found outside of a surah (after surah {})",
                self.surahs.len()
            )));
        };

        let context = || format!("ayah {} of surah {}", open.ayahs.len() + 1, open.number);
        let raw_index = required_attribute(element, b"index", context)?;
        let index: AyahIndex = raw_index
            .parse()
            .map_err(|err| IngestError::malformed(format!("{}: {err}", context())))?;
        let text = required_attribute(element, b"text", context)?;
        let bismillah = attribute(element, b"bismillah")?;

        open.ayahs.push(AyahNode {
            index,
            text,
            bismillah,
        });
        Ok(())
    }

    fn close_surah(&mut self) -> Result<()> {
        let Some(open) = self.current.take() else {
            return Err(IngestError::malformed("unexpected end of surah"));
        };
        if open.ayahs.is_empty() {
            return Err(IngestError::malformed(format!(
                "surah {} ('{}') has no ayahs",
                open.number, open.name
            )));
        }
        trace!(surah = open.number, ayahs = open.ayahs.len(), "surah closed");
        self.surahs.push(SurahNode::new(open.name, open.ayahs));
        Ok(())
    }

    fn finish(self) -> Result<Corpus> {
        if let Some(open) = self.current {
            return Err(IngestError::malformed(format!(
                "surah {} ('{}') is not closed",
                open.number, open.name
            )));
        }
        if self.surahs.is_empty() {
            return Err(IngestError::malformed("no surahs found"));
        }
        let corpus = Corpus::new(self.surahs);
        debug!(
            surahs = corpus.surah_count(),
            ayahs = corpus.ayah_count(),
            "parsed source"
        );
        Ok(corpus)
    }
}

fn attribute(element: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr =
            attr.map_err(|err| IngestError::malformed(format!("invalid attribute: {err}")))?;
        if attr.key.as_ref() == key {
            let invalid = |err: &dyn std::fmt::Display| {
                IngestError::malformed(format!(
                    "invalid value for attribute '{}': {err}",
                    String::from_utf8_lossy(key)
                ))
            };
            let raw = std::str::from_utf8(&attr.value).map_err(|err| invalid(&err))?;
            let value = unescape(&normalize_attribute_whitespace(raw))
                .map_err(|err| invalid(&err))?
                .into_owned();
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Attribute-value normalization: literal tabs and line breaks become spaces,
/// with `\r\n` counted as one break. Runs before unescaping, so character
/// references such as `&#10;` survive.
fn normalize_attribute_whitespace(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\t', '\n', '\r']) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", " ").replace(['\t', '\n', '\r'], " "))
}

fn required_attribute(
    element: &BytesStart<'_>,
    key: &[u8],
    context: impl Fn() -> String,
) -> Result<String> {
    attribute(element, key)?.ok_or_else(|| {
        IngestError::malformed(format!(
            "{} is missing the '{}' attribute",
            context(),
            String::from_utf8_lossy(key)
        ))
    })
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}
