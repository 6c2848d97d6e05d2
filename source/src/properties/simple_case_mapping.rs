use super::PropertiesError;
use crate::hex::parse_codepoint;

/// Simple Uppercase/Lowercase/Titlecase Mapping
/// берется из UCD: 12, 13, 14 колонки UnicodeData.txt
///
/// соответствующая символу прописная/строчная/заглавная буква, один символ
///
/// более детально - https://www.unicode.org/reports/tr44/#Casemapping
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SimpleCaseMapping
{
    None,
    Some(u32),
}

impl SimpleCaseMapping
{
    /// если отображение отсутствует - берем другое (заглавная буква по умолчанию совпадает с прописной)
    #[inline]
    pub fn or(self, fallback: SimpleCaseMapping) -> SimpleCaseMapping
    {
        match self {
            Self::None => fallback,
            some => some,
        }
    }

    /// код, 0 - отображение отсутствует
    #[inline]
    pub fn code(&self) -> u32
    {
        match self {
            Self::None => 0,
            Self::Some(code) => *code,
        }
    }
}

impl TryFrom<&str> for SimpleCaseMapping
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.is_empty() {
            true => Self::None,
            false => match parse_codepoint(value) {
                Some(code) => Self::Some(code),
                None => return Err(PropertiesError::InvalidCaseMapping(value.to_owned())),
            },
        })
    }
}
