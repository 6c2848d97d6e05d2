mod bidi_mirrored;
mod canonical_combining_class;
mod general_category;
mod simple_case_mapping;

pub use bidi_mirrored::BidiMirrored;
pub use canonical_combining_class::CanonicalCombiningClass;
pub use general_category::GeneralCategory;
pub use simple_case_mapping::SimpleCaseMapping;

/// Кодпоинт Unicode, записанный в UnicodeData.txt отдельной строкой
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRecord
{
    /// код символа
    pub code: u32,
    /// название (для управляющих символов - название из Unicode 1.0, если оно есть)
    pub name: String,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
    /// "зеркальный" символ двунаправленого текста (bidi mirrored)
    pub bidi_mirrored: BidiMirrored,
    /// соответствующая прописная буква, 0 - отсутствует
    pub simple_uppercase_mapping: u32,
    /// соответствующая строчная буква, 0 - отсутствует
    pub simple_lowercase_mapping: u32,
    /// соответствующая заглавная буква, 0 - отсутствует
    pub simple_titlecase_mapping: u32,
}

impl CodepointRecord
{
    /// совпадают ли все свойства, кроме кода и названия
    pub fn same_attributes(&self, other: &CodepointRecord) -> bool
    {
        self.gc == other.gc
            && self.ccc == other.ccc
            && self.bidi_mirrored == other.bidi_mirrored
            && self.simple_uppercase_mapping == other.simple_uppercase_mapping
            && self.simple_lowercase_mapping == other.simple_lowercase_mapping
            && self.simple_titlecase_mapping == other.simple_titlecase_mapping
    }
}

/// ошибка разбора значения свойства
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PropertiesError
{
    #[error("unknown general category `{0}`")]
    UnknownGeneralCategory(String),
    #[error("invalid canonical combining class `{0}`")]
    InvalidCombiningClass(String),
    #[error("invalid case mapping `{0}`")]
    InvalidCaseMapping(String),
}
