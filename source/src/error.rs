use crate::properties::PropertiesError;

/// ошибка разбора файлов UCD
///
/// любая из них означает, что данные не соответствуют ожидаемому формату (или версии Unicode),
/// и собранная таблица не может быть использована
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UcdError
{
    #[error("line {line}: invalid code point `{value}`")]
    MalformedCodepoint
    {
        line: usize,
        value: String,
    },
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingFields
    {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {source}")]
    Property
    {
        line: usize,
        source: PropertiesError,
    },
    #[error("code point U+{code:04X} is listed twice")]
    DuplicateCodepoint
    {
        code: u32,
    },
    #[error("line {line}: range marker `{name}` has no pair")]
    UnpairedRangeMarker
    {
        line: usize,
        name: String,
    },
    #[error("line {line}: range `{first}` is closed by `{last}`")]
    MismatchedRange
    {
        line: usize,
        first: String,
        last: String,
    },
    #[error("line {line}: range starting at U+{start:04X} has no preceding code point to take properties from")]
    RangeWithoutRepresentative
    {
        line: usize,
        start: u32,
    },
    #[error("range `{name}` starting at U+{start:04X} is never closed")]
    UnterminatedRange
    {
        start: u32,
        name: String,
    },
    #[error("line {line}: invalid block `{value}`")]
    MalformedBlock
    {
        line: usize,
        value: String,
    },
}

/// кодпоинт не записан в UnicodeData.txt и не входит ни в один диапазон
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid code point U+{0:04X} ({0})")]
pub struct CodepointNotFound(pub u32);

impl CodepointNotFound
{
    /// код, который искали
    #[inline]
    pub fn code(&self) -> u32
    {
        self.0
    }
}
