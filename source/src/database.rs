use std::borrow::Cow;
use std::fmt;

use crate::blocks::BlockTable;
use crate::error::{CodepointNotFound, UcdError};
use crate::properties::*;
use crate::unicode::CodepointStore;

/// собранные таблицы UCD: кодпоинты (UnicodeData.txt) и блоки (Blocks.txt)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeDatabase
{
    codepoints: CodepointStore,
    blocks: BlockTable,
}

impl UnicodeDatabase
{
    /// собрать обе таблицы; при ошибке в любом из файлов не возвращается ничего
    pub fn compile(unicode_data: &str, blocks: &str) -> Result<Self, UcdError>
    {
        let codepoints = CodepointStore::compile(unicode_data)?;
        let blocks = BlockTable::parse(blocks)?;

        log::info!(
            "compiled {} code points, {} ranges, {} blocks",
            codepoints.records().len(),
            codepoints.ranges().len(),
            blocks.blocks().len()
        );

        Ok(Self { codepoints, blocks })
    }

    #[inline]
    pub fn codepoints(&self) -> &CodepointStore
    {
        &self.codepoints
    }

    #[inline]
    pub fn blocks(&self) -> &BlockTable
    {
        &self.blocks
    }

    /// всё, что известно о кодпоинте
    pub fn describe(&self, code: u32) -> Result<CodepointDescription<'_>, CodepointNotFound>
    {
        let record = self.codepoints.lookup_record(code)?;
        let name = self.codepoints.lookup_display_name(code)?;

        Ok(CodepointDescription {
            code,
            name,
            gc: record.gc,
            ccc: record.ccc,
            bidi_mirrored: record.bidi_mirrored,
            block: self.blocks.lookup_block_name(code),
            plane: plane_name(code),
        })
    }
}

/// описание кодпоинта
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointDescription<'a>
{
    pub code: u32,
    pub name: Cow<'a, str>,
    pub gc: GeneralCategory,
    pub ccc: CanonicalCombiningClass,
    pub bidi_mirrored: BidiMirrored,
    pub block: Option<&'a str>,
    pub plane: Option<&'static str>,
}

/// U+0041 (LATIN CAPITAL LETTER A)
impl fmt::Display for CodepointDescription<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "U+{:04X} ({})", self.code, self.name)
    }
}

/// название плоскости Unicode
pub fn plane_name(code: u32) -> Option<&'static str>
{
    Some(match code >> 16 {
        0 => "0 Basic Multilingual Plane (BMP)",
        1 => "1 Supplementary Multilingual Plane (SMP)",
        2 => "2 Supplementary Ideographic Plane (SIP)",
        3 => "3 Tertiary Ideographic Plane (TIP)",
        4 ..= 13 => "*Unassigned*",
        14 => "14 Supplementary Special-purpose Plane (SSP)",
        15 => "15 Supplemental Private Use Area-A (S PUA A)",
        16 => "16 Supplemental Private Use Area-B (S PUA B)",
        _ => return None,
    })
}
