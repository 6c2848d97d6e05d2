use std::io::{self, Write};

use unicode_data_source::UnicodeDatabase;

use self::format::{format_code, format_num_vec, format_str};

mod format;
pub mod stats;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 120;

/// типы записей таблиц; файл подключается как модуль крейта, зависящего от unicode_data_source
const PRELUDE: &str = "use unicode_data_source::GeneralCategory;

#[derive(Debug, Clone, Copy)]
pub struct CodepointEntry
{
    pub code: u32,
    pub name: &'static str,
    pub gc: GeneralCategory,
    pub ccc: u8,
    pub bidi_mirrored: bool,
    pub upper: u32,
    pub lower: u32,
    pub title: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct RangeEntry
{
    pub start: u32,
    pub end: u32,
    pub name_prefix: &'static str,
    pub representative: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct BlockEntry
{
    pub start: u32,
    pub end: u32,
    pub name: &'static str,
}
";

/// пишем таблицы кодпоинтов, диапазонов и блоков в виде исходного кода Rust
pub fn write(database: &UnicodeDatabase, out: &mut impl Write) -> io::Result<()>
{
    let store = database.codepoints();

    writeln!(out, "// сгенерировано unicode_data_prepare, не редактировать\n")?;
    writeln!(out, "{}", PRELUDE)?;

    let codes: Vec<u32> = store.records().iter().map(|record| record.code).collect();

    writeln!(out, "pub static CODES: &[u32] = &[{}];\n", format_num_vec(codes.as_slice(), FORMAT_STRING_LENGTH))?;

    writeln!(out, "pub static CODEPOINTS: &[CodepointEntry] = &[")?;

    for record in store.records() {
        writeln!(
            out,
            "    CodepointEntry {{ code: {}, name: {}, gc: GeneralCategory::{:?}, ccc: {}, bidi_mirrored: {}, \
            upper: {}, lower: {}, title: {} }},",
            format_code(record.code),
            format_str(&record.name),
            record.gc,
            record.ccc.u8(),
            record.bidi_mirrored.is_mirrored(),
            format_code(record.simple_uppercase_mapping),
            format_code(record.simple_lowercase_mapping),
            format_code(record.simple_titlecase_mapping),
        )?;
    }

    writeln!(out, "];\n")?;
    writeln!(out, "pub static RANGES: &[RangeEntry] = &[")?;

    for range in store.ranges() {
        writeln!(
            out,
            "    RangeEntry {{ start: {}, end: {}, name_prefix: {}, representative: {} }},",
            format_code(range.start),
            format_code(range.end),
            format_str(&range.name_prefix),
            range.representative,
        )?;
    }

    writeln!(out, "];\n")?;
    writeln!(out, "pub static BLOCKS: &[BlockEntry] = &[")?;

    for block in database.blocks().blocks() {
        writeln!(
            out,
            "    BlockEntry {{ start: {}, end: {}, name: {} }},",
            format_code(block.start),
            format_code(block.end),
            format_str(&block.name),
        )?;
    }

    writeln!(out, "];")?;

    out.flush()
}
