use unicode_data_prepare::output;
use unicode_data_source::UnicodeDatabase;

const UNICODE_DATA: &str = include_str!("./../../source/data/ucd/sample/UnicodeData.txt");
const BLOCKS: &str = include_str!("./../../source/data/ucd/sample/Blocks.txt");

fn written() -> String
{
    let database = UnicodeDatabase::compile(UNICODE_DATA, BLOCKS).unwrap();
    let mut buffer = vec![];

    output::write(&database, &mut buffer).unwrap();

    String::from_utf8(buffer).unwrap()
}

#[test]
fn tables()
{
    let output = written();

    assert!(output.contains(
        "    CodepointEntry { code: 0x41, name: \"LATIN CAPITAL LETTER A\", gc: GeneralCategory::UppercaseLetter, \
        ccc: 0, bidi_mirrored: false, upper: 0, lower: 0x61, title: 0 },"
    ));
    assert!(output.contains("    CodepointEntry { code: 0, name: \"NULL\", gc: GeneralCategory::Control,"));
    assert!(output.contains(
        "    RangeEntry { start: 0x4E00, end: 0x9FFF, name_prefix: \"CJK IDEOGRAPH\", representative: 40 },"
    ));
    assert!(output.contains("    BlockEntry { start: 0, end: 0x7F, name: \"Basic Latin\" },"));
    assert!(output.contains("pub static CODES: &[u32] = &[\n    0, 0x9, 0xA, 0x20,"));

    assert_eq!(output.matches("CodepointEntry {").count(), 47);
    assert_eq!(output.matches("RangeEntry {").count(), 10);
    assert_eq!(output.matches("BlockEntry {").count(), 30);
}

/// все типы, на которые ссылаются таблицы, объявлены в самом файле до таблиц
#[test]
fn entry_types_are_declared()
{
    let output = written();
    let declared = |item: &str| output.find(item).unwrap();

    assert!(output.contains("use unicode_data_source::GeneralCategory;"));

    for (declaration, table) in [
        ("pub struct CodepointEntry", "pub static CODEPOINTS: &[CodepointEntry]"),
        ("pub struct RangeEntry", "pub static RANGES: &[RangeEntry]"),
        ("pub struct BlockEntry", "pub static BLOCKS: &[BlockEntry]"),
    ] {
        assert!(declared(declaration) < declared(table), "{declaration}");
    }

    assert!(output.contains("    pub gc: GeneralCategory,"));
    assert!(output.contains("    pub representative: usize,"));
}

/// одинаковые входные данные - одинаковый результат
#[test]
fn output_is_deterministic()
{
    assert_eq!(written(), written());
}

#[test]
fn category_stats()
{
    let database = UnicodeDatabase::compile(UNICODE_DATA, BLOCKS).unwrap();
    let stats = output::stats::categories(&database);

    assert_eq!(stats.values().sum::<usize>(), 47);
    assert_eq!(stats["Letter"], 14);
    assert_eq!(stats["Mark"], 5);
    assert_eq!(stats["Separator"], 4);
}
