use crate::error::UcdError;
use crate::hex::parse_codepoint;

/// блок Unicode, строка Blocks.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRange
{
    /// первый кодпоинт (включительно)
    pub start: u32,
    /// последний кодпоинт (включительно)
    pub end: u32,
    /// название блока
    pub name: String,
}

impl BlockRange
{
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.start <= code && code <= self.end
    }
}

/// таблица блоков в порядке Blocks.txt
///
/// блоки покрывают пространство кодпоинтов не полностью, поэтому отсутствие блока - не ошибка
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockTable
{
    blocks: Vec<BlockRange>,
}

impl BlockTable
{
    /// разбор Blocks.txt из UCD
    ///
    /// формат строки: 0000..007F; Basic Latin
    /// строки, начинающиеся с #, и строки без ; пропускаются
    pub fn parse(data: &str) -> Result<Self, UcdError>
    {
        let mut blocks = vec![];

        for (i, line) in data.lines().enumerate() {
            if line.starts_with('#') {
                continue;
            }

            let (range, name) = match line.split_once(';') {
                Some(parts) => parts,
                None => continue,
            };

            let malformed = || UcdError::MalformedBlock {
                line: i + 1,
                value: line.to_owned(),
            };

            let (start, end) = range.trim().split_once("..").ok_or_else(malformed)?;

            let start = parse_codepoint(start).ok_or_else(malformed)?;
            let end = parse_codepoint(end).ok_or_else(malformed)?;

            if start > end {
                return Err(malformed());
            }

            blocks.push(BlockRange {
                start,
                end,
                name: name.trim().to_owned(),
            });
        }

        log::debug!("Blocks.txt: {} blocks", blocks.len());

        Ok(Self { blocks })
    }

    /// первый в порядке Blocks.txt блок, содержащий кодпоинт
    pub fn lookup_block(&self, code: u32) -> Option<&BlockRange>
    {
        self.blocks.iter().find(|block| block.contains(code))
    }

    /// название блока, содержащего кодпоинт
    #[inline]
    pub fn lookup_block_name(&self, code: u32) -> Option<&str>
    {
        self.lookup_block(code).map(|block| block.name.as_str())
    }

    /// блоки, в порядке Blocks.txt
    #[inline]
    pub fn blocks(&self) -> &[BlockRange]
    {
        &self.blocks
    }
}
