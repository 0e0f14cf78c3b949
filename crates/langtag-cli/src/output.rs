//! Text and JSON rendering of command results.

use std::collections::BTreeMap;
use std::io::Write;

use eyre::{Context, Result};
use langtag::{LanguageTag, SubtagKind};
use serde::Serialize;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    Json,
}

impl Format {
    pub(crate) const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

#[derive(Serialize)]
struct TagReport<'a> {
    tag: &'a LanguageTag,
    language: Option<&'a str>,
    script: Option<&'a str>,
    region: Option<&'a str>,
    variant: Option<&'a str>,
    invalid: bool,
    wild: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    privateuse: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    extensions: BTreeMap<&'a str, String>,
    subtags: Vec<SubtagReport<'a>>,
}

#[derive(Serialize)]
struct SubtagReport<'a> {
    token: &'a str,
    kind: SubtagKind,
}

impl<'a> From<&'a LanguageTag> for TagReport<'a> {
    fn from(tag: &'a LanguageTag) -> Self {
        Self {
            tag,
            language: tag.language(),
            script: tag.script(),
            region: tag.region(),
            variant: tag.variant(),
            invalid: tag.invalid(),
            wild: tag.wild(),
            privateuse: tag.privateuse().map(|subtag| subtag.to_string()),
            extensions: tag
                .extensions()
                .map(|(letter, subtag)| (letter, subtag.to_string()))
                .collect(),
            subtags: tag
                .subtags()
                .iter()
                .map(|subtag| SubtagReport {
                    token: subtag.token(),
                    kind: subtag.kind(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct MatchReport<'a> {
    pub tag: &'a LanguageTag,
    pub range: &'a str,
    pub matches: bool,
}

#[derive(Serialize)]
pub(crate) struct SuitabilityReport<'a> {
    pub tag: &'a LanguageTag,
    pub other: &'a str,
    pub suitable: bool,
}

#[derive(Serialize)]
pub(crate) struct TruncationReport<'a> {
    pub tag: &'a LanguageTag,
    pub truncated: &'a LanguageTag,
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, report: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .wrap_err("failed to serialise report as JSON")?;
    writeln!(writer).wrap_err("failed to terminate JSON report")
}

pub(crate) fn write_inspections(
    writer: &mut dyn Write,
    format: Format,
    tags: &[LanguageTag],
) -> Result<()> {
    let reports: Vec<TagReport<'_>> = tags.iter().map(TagReport::from).collect();
    match format {
        Format::Json => write_json(writer, &reports),
        Format::Text => reports
            .iter()
            .try_for_each(|report| write_tag_report(writer, report)),
    }
}

fn write_tag_report(writer: &mut dyn Write, report: &TagReport<'_>) -> Result<()> {
    let context = || format!("failed to write inspection of '{}'", report.tag);
    writeln!(writer, "{}", report.tag).wrap_err_with(context)?;
    for (name, value) in [
        ("language", report.language),
        ("script", report.script),
        ("region", report.region),
        ("variant", report.variant),
        ("privateuse", report.privateuse.as_deref()),
    ] {
        writeln!(writer, "  {name}: {}", value.unwrap_or("-")).wrap_err_with(context)?;
    }
    for (letter, extension) in &report.extensions {
        writeln!(writer, "  extension {letter}: {extension}").wrap_err_with(context)?;
    }
    writeln!(writer, "  invalid: {}", report.invalid).wrap_err_with(context)?;
    writeln!(writer, "  wild: {}", report.wild).wrap_err_with(context)?;
    writeln!(writer, "  subtags:").wrap_err_with(context)?;
    for subtag in &report.subtags {
        writeln!(writer, "    '{}' {}", subtag.token, subtag.kind).wrap_err_with(context)?;
    }
    Ok(())
}

pub(crate) fn write_match(
    writer: &mut dyn Write,
    format: Format,
    report: &MatchReport<'_>,
) -> Result<()> {
    match format {
        Format::Json => write_json(writer, report),
        Format::Text => writeln!(writer, "{}", report.matches).wrap_err_with(|| {
            format!("failed to write match of '{}' against '{}'", report.tag, report.range)
        }),
    }
}

pub(crate) fn write_suitability(
    writer: &mut dyn Write,
    format: Format,
    report: &SuitabilityReport<'_>,
) -> Result<()> {
    match format {
        Format::Json => write_json(writer, report),
        Format::Text => writeln!(writer, "{}", report.suitable).wrap_err_with(|| {
            format!("failed to write suitability of '{}' for '{}'", report.tag, report.other)
        }),
    }
}

pub(crate) fn write_truncation(
    writer: &mut dyn Write,
    format: Format,
    report: &TruncationReport<'_>,
) -> Result<()> {
    match format {
        Format::Json => write_json(writer, report),
        Format::Text => writeln!(writer, "{}", report.truncated)
            .wrap_err_with(|| format!("failed to write truncation of '{}'", report.tag)),
    }
}
