//! Every input parses; only well-formed tags escape the invalid flag.

use langtag::LanguageTag;
use rstest::rstest;

const VALID: &[&str] = &[
    "de",
    "fr",
    "ja",
    "zh-Hant",
    "zh-Hans",
    "sr-Cyrl",
    "sr-Latn",
    "zh-cmn-Hans-CN",
    "cmn-Hans-CN",
    "zh-yue-HK",
    "zh-Hans-CN",
    "sr-Latn-RS",
    "sl-rozaj",
    "sl-rozaj-biske",
    "sl-nedis",
    "de-CH-1901",
    "sl-IT-nedis",
    "hy-Latn-IT-arevela",
    "de-DE",
    "en-US",
    "es-419",
    "de-CH-x-phonebk",
    "az-Arab-x-AZE-derbend",
    "x-whatever",
    "qaa-Qaaa-QM-x-southern",
    "de-Qaaa",
    "sr-Latn-QM",
    "sr-Qaaa-RS",
    "en-US-u-islamcal",
    "zh-CN-a-myext-x-private",
    "en-a-myext-b-another",
];

const MALFORMED: &[&str] = &["", "a", "ar-a-aaa-b-bbb-a-ccc-", "en--US", "en-toolongvalue"];

const WELL_FORMED_ODDITIES: &[&str] = &[
    "de-DE-u-co-phonebk",
    "de-419-DE",
    "en-*",
    "*",
    "i-klingon",
    "en_gb",
];

fn has_anchor(tag: &LanguageTag) -> bool {
    tag.language().is_some() || tag.privateuse().is_some()
}

#[test]
fn valid_corpus_parses_cleanly() {
    for raw in VALID {
        let tag = LanguageTag::parse(raw);
        assert!(!tag.invalid(), "{raw} should not be invalid: {tag:?}");
        assert!(has_anchor(&tag), "{raw} should carry a language or private use");
    }
}

#[test]
fn malformed_tags_are_flagged() {
    for raw in MALFORMED {
        assert!(LanguageTag::parse(raw).invalid(), "{raw:?} should be invalid");
    }
}

#[rstest]
#[case("i-klingon")]
#[case("de-*-1901")]
fn grandfathered_and_wild_forms_do_not_panic(#[case] raw: &str) {
    let tag = LanguageTag::parse(raw);
    assert_eq!(tag.len(), raw.split('-').count());
}

#[test]
fn every_sample_parses_without_panicking() {
    for raw in VALID.iter().chain(MALFORMED).chain(WELL_FORMED_ODDITIES) {
        let tag = LanguageTag::parse(raw);
        assert!(!tag.is_empty());
        if !tag.invalid() {
            assert!(
                has_anchor(&tag) || tag.wild(),
                "{raw} is neither invalid nor anchored"
            );
        }
    }
}

#[test]
fn casing_is_normalised() {
    let tag = LanguageTag::parse("AZ-arab-x-AZE-DERBEND");
    assert_eq!(tag.to_string(), "az-Arab-x-aze-derbend");
}
