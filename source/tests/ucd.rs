#[macro_use]
extern crate lazy_static;

use std::thread;

use unicode_data_source::properties::*;
use unicode_data_source::record::RawRecord;
use unicode_data_source::*;

const UNICODE_DATA: &str = include_str!("./../data/ucd/sample/UnicodeData.txt");
const BLOCKS: &str = include_str!("./../data/ucd/sample/Blocks.txt");

lazy_static! {
    /// таблицы, собранные из тестовой выборки UCD
    static ref UNICODE: UnicodeDatabase = UnicodeDatabase::compile(UNICODE_DATA, BLOCKS).unwrap();
}

#[test]
fn sample_sizes()
{
    assert_eq!(UNICODE.codepoints().records().len(), 47);
    assert_eq!(UNICODE.codepoints().ranges().len(), 10);
    assert_eq!(UNICODE.blocks().blocks().len(), 30);
}

/// записанные отдельно кодпоинты соответствуют строкам файла
#[test]
fn listed_codepoints_match_source_lines()
{
    let store = UNICODE.codepoints();

    for (i, line) in UNICODE_DATA.lines().enumerate() {
        let fields: Vec<&str> = line.split(';').collect();

        if fields[1].ends_with(", First>") || fields[1].ends_with(", Last>") {
            continue;
        }

        let code = u32::from_str_radix(fields[0], 16).unwrap();
        let record = store.lookup_record(code).unwrap();

        assert_eq!(store.classify(code), Some(Classification::Listed(record_index(code))));
        assert_eq!(record, &RawRecord::parse(i + 1, line).unwrap().to_record().unwrap());
        assert_eq!(record.gc.abbr(), fields[2]);
        assert_eq!(record.ccc.u8().to_string(), fields[3]);
        assert_eq!(record.bidi_mirrored.is_mirrored(), fields[9] == "Y");

        let expected_name = match fields[1] == "<control>" && !fields[10].is_empty() {
            true => fields[10],
            false => fields[1],
        };

        assert_eq!(store.lookup_display_name(code).unwrap(), expected_name);
        assert_eq!(record.name, expected_name);

        let mapping = |field: &str| match field.is_empty() {
            true => 0,
            false => u32::from_str_radix(field, 16).unwrap(),
        };

        assert_eq!(record.simple_uppercase_mapping, mapping(fields[12]));
        assert_eq!(record.simple_lowercase_mapping, mapping(fields[13]));

        let titlecase = match fields[14].is_empty() {
            true => mapping(fields[12]),
            false => mapping(fields[14]),
        };

        assert_eq!(record.simple_titlecase_mapping, titlecase);
    }
}

fn record_index(code: u32) -> usize
{
    UNICODE
        .codepoints()
        .records()
        .iter()
        .position(|record| record.code == code)
        .unwrap()
}

#[test]
fn latin_capital_letter_a()
{
    let record = UNICODE.codepoints().lookup_record(0x41).unwrap();

    assert_eq!(record.name, "LATIN CAPITAL LETTER A");
    assert_eq!(record.gc, GeneralCategory::UppercaseLetter);
    assert_eq!(record.gc.long_name(), "Uppercase_Letter");
    assert_eq!(record.simple_lowercase_mapping, 0x61);
    assert_eq!(record.simple_uppercase_mapping, 0);
}

#[test]
fn control_aliases()
{
    let store = UNICODE.codepoints();

    assert_eq!(store.lookup_display_name(0x00).unwrap(), "NULL");
    assert_eq!(store.lookup_display_name(0x0A).unwrap(), "LINE FEED (LF)");
    assert_eq!(store.lookup_display_name(0x7F).unwrap(), "DELETE");
    assert_eq!(store.lookup_display_name(0x80).unwrap(), "<control>");
}

#[test]
fn cjk_ideographs()
{
    let store = UNICODE.codepoints();
    let range = store.range(0x4E01).unwrap();

    assert_eq!((range.start, range.end), (0x4E00, 0x9FFF));
    assert_eq!(range.name_prefix, "CJK IDEOGRAPH");
    assert_eq!(store.lookup_display_name(0x4E01).unwrap(), "CJK IDEOGRAPH 4E01");
    assert_eq!(store.lookup_display_name(0x9FFF).unwrap(), "CJK IDEOGRAPH 9FFF");
    assert_eq!(
        store.lookup_display_name(0x3400).unwrap(),
        "CJK IDEOGRAPH EXTENSION A 3400"
    );
    assert_eq!(
        store.lookup_display_name(0x2A6DF).unwrap(),
        "CJK IDEOGRAPH EXTENSION B 2A6DF"
    );
    assert_eq!(store.lookup_display_name(0xAC01).unwrap(), "HANGUL SYLLABLE AC01");
    assert_eq!(store.lookup_display_name(0xD800).unwrap(), "NON PRIVATE USE HIGH SURROGATE D800");
    assert_eq!(store.lookup_display_name(0xE000).unwrap(), "PRIVATE USE E000");
    assert_eq!(store.lookup_display_name(0x10FFFD).unwrap(), "PLANE 16 PRIVATE USE 10FFFD");
}

/// свойства кодпоинтов диапазона совпадают со свойствами предшествующей диапазону записи
#[test]
fn ranges_reuse_representative_attributes()
{
    let store = UNICODE.codepoints();

    let expected = [
        (0x3400, 0x33FF),
        (0x4E00, 0x4DC0),
        (0xAC00, 0xA000),
        (0xD800, 0xD7B0),
        (0xDB80, 0xD7B0),
        (0xDC00, 0xD7B0),
        (0xE000, 0xD7B0),
        (0x20000, 0x1F600),
        (0xF0000, 0xE0001),
        (0x100000, 0xE0001),
    ];

    for (range, (start, representative)) in store.ranges().iter().zip(expected) {
        assert_eq!(range.start, start);
        assert_eq!(store.representative(range).code, representative);

        for code in [range.start, range.start + 1, (range.start + range.end) / 2, range.end] {
            let record = store.lookup_record(code).unwrap();

            assert!(record.same_attributes(store.representative(range)));
            assert_eq!(store.classify(code), Some(Classification::Ranged(position(range))));
            assert_eq!(
                store.lookup_display_name(code).unwrap(),
                format!("{} {:04X}", range.name_prefix, code)
            );
        }
    }
}

fn position(range: &AlgorithmicRange) -> usize
{
    UNICODE
        .codepoints()
        .ranges()
        .iter()
        .position(|r| r == range)
        .unwrap()
}

/// обе формы запроса одинаково классифицируют любой кодпоинт
#[test]
fn lookups_agree()
{
    let store = UNICODE.codepoints();

    for code in (0 ..= 0x10FFFF).step_by(7).chain([0x41, 0x4E00, 0x9FFF, 0xA000, 0x110000]) {
        let record = store.lookup_record(code);
        let name = store.lookup_display_name(code);

        match store.classify(code) {
            Some(_) => assert!(record.is_ok() && name.is_ok()),
            None => {
                assert_eq!(record, Err(CodepointNotFound(code)));
                assert_eq!(name, Err(CodepointNotFound(code)));
            }
        }
    }
}

#[test]
fn missing_codepoint_is_reported_once()
{
    let store = UNICODE.codepoints();

    let failures: Vec<CodepointNotFound> = [0x41, 0x4E01, 0x0378, 0xAC00, 0x1F600]
        .into_iter()
        .filter_map(|code| store.lookup_record(code).err())
        .collect();

    assert_eq!(failures, vec![CodepointNotFound(0x0378)]);
    assert_eq!(failures[0].code(), 0x0378);
    assert_eq!(failures[0].to_string(), "invalid code point U+0378 (888)");
}

#[test]
fn blocks()
{
    let blocks = UNICODE.blocks();

    assert_eq!(blocks.lookup_block_name(0x41), Some("Basic Latin"));
    assert_eq!(blocks.lookup_block_name(0x4E01), Some("CJK Unified Ideographs"));
    assert_eq!(blocks.lookup_block_name(0x10FFFF), Some("Supplementary Private Use Area-B"));
    assert_eq!(blocks.lookup_block_name(0x0500), None);
    assert_eq!(blocks.lookup_block_name(0x110000), None);
}

#[test]
fn describe()
{
    let description = UNICODE.describe(0xF6).unwrap();

    assert_eq!(description.to_string(), "U+00F6 (LATIN SMALL LETTER O WITH DIAERESIS)");
    assert_eq!(description.gc, GeneralCategory::LowercaseLetter);
    assert_eq!(description.block, Some("Latin-1 Supplement"));
    assert_eq!(description.plane, Some("0 Basic Multilingual Plane (BMP)"));

    let description = UNICODE.describe(0x20001).unwrap();

    assert_eq!(description.name, "CJK IDEOGRAPH EXTENSION B 20001");
    assert_eq!(description.block, Some("CJK Unified Ideographs Extension B"));
    assert_eq!(description.plane, Some("2 Supplementary Ideographic Plane (SIP)"));

    let description = UNICODE.describe(0x300).unwrap();

    assert_eq!(description.ccc, CanonicalCombiningClass::Above);
    assert!(description.gc.is_combining());

    assert_eq!(UNICODE.describe(0x0378), Err(CodepointNotFound(0x0378)));
}

#[test]
fn compilation_is_deterministic()
{
    let first = UnicodeDatabase::compile(UNICODE_DATA, BLOCKS).unwrap();
    let second = UnicodeDatabase::compile(UNICODE_DATA, BLOCKS).unwrap();

    assert_eq!(first, second);
    assert_eq!(&first, &*UNICODE);
}

#[test]
fn errors_leave_nothing_behind()
{
    let truncated: String = UNICODE_DATA
        .lines()
        .take_while(|line| !line.starts_with("4DBF"))
        .map(|line| format!("{}\n", line))
        .collect();

    assert_eq!(
        UnicodeDatabase::compile(&truncated, BLOCKS),
        Err(UcdError::UnterminatedRange {
            start: 0x3400,
            name: "CJK Ideograph Extension A".to_owned()
        })
    );

    let unknown = UNICODE_DATA.replace(";Sk;", ";Qq;");

    assert!(matches!(
        UnicodeDatabase::compile(&unknown, BLOCKS),
        Err(UcdError::Property {
            line: 11,
            source: PropertiesError::UnknownGeneralCategory(_)
        })
    ));
}

#[test]
fn concurrent_queries()
{
    let database: &UnicodeDatabase = &UNICODE;

    thread::scope(|scope| {
        for offset in 0 .. 4u32 {
            scope.spawn(move || {
                for code in (0x4E00 + offset .. 0x9FFF).step_by(4) {
                    assert_eq!(
                        database.codepoints().lookup_display_name(code).unwrap(),
                        format!("CJK IDEOGRAPH {:04X}", code)
                    );
                }
            });
        }
    });
}
