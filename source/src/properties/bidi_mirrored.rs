/// "зеркальный" символ в двунаправленном тексте, Bidi Mirrored
/// берется из UCD: девятая колонка UnicodeData.txt
///
/// например, круглые скобки.
///
/// см. раздел 4.7 документации,
/// https://www.unicode.org/versions/Unicode15.0.0/ch04.pdf
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct BidiMirrored(bool);

impl BidiMirrored
{
    /// "зеркальный символ" символ?
    #[inline]
    pub fn is_mirrored(&self) -> bool
    {
        self.0
    }
}

/// только Y означает "зеркальный", любое другое значение - нет
impl From<&str> for BidiMirrored
{
    #[inline]
    fn from(value: &str) -> Self
    {
        Self(value == "Y")
    }
}
