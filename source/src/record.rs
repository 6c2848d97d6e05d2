use crate::error::UcdError;
use crate::hex::parse_codepoint;
use crate::properties::*;

/// минимальное количество колонок в строке UnicodeData.txt
pub const MIN_FIELDS: usize = 15;

/// название-заглушка управляющих символов
const CONTROL_NAME: &str = "<control>";

/// строка UnicodeData.txt, разбитая на колонки
///
/// используемые колонки:
///     0 - код, 1 - название (или маркер диапазона), 2 - категория, 3 - CCC,
///     9 - bidi mirrored, 10 - название из Unicode 1.0,
///     12, 13, 14 - простые отображения регистра
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a>
{
    /// номер строки в файле, начиная с 1
    pub line: usize,
    /// код символа (колонка 0)
    pub code: u32,
    fields: Vec<&'a str>,
}

impl<'a> RawRecord<'a>
{
    /// разбор строки; колонки сверх 15-й игнорируются
    pub fn parse(line: usize, source: &'a str) -> Result<Self, UcdError>
    {
        let fields: Vec<&str> = source.trim_end_matches(&['\r', '\n'][..]).split(';').collect();

        if fields.len() < MIN_FIELDS {
            return Err(UcdError::MissingFields {
                line,
                expected: MIN_FIELDS,
                found: fields.len(),
            });
        }

        let code = parse_codepoint(fields[0]).ok_or_else(|| UcdError::MalformedCodepoint {
            line,
            value: fields[0].to_owned(),
        })?;

        Ok(Self { line, code, fields })
    }

    /// название или маркер диапазона, как в файле
    #[inline]
    pub fn name(&self) -> &'a str
    {
        self.fields[1]
    }

    /// сокращение категории
    #[inline]
    pub fn category(&self) -> &'a str
    {
        self.fields[2]
    }

    /// название из Unicode 1.0 / ISO 6429 (заполнено в основном для управляющих символов)
    #[inline]
    pub fn unicode_1_name(&self) -> &'a str
    {
        self.fields[10]
    }

    /// кодпоинт со всеми свойствами
    pub fn to_record(&self) -> Result<CodepointRecord, UcdError>
    {
        let property = |source| UcdError::Property {
            line: self.line,
            source,
        };

        // у управляющих символов нет собственных названий, но название из Unicode 1.0 информативнее заглушки
        let name = match self.name() == CONTROL_NAME && !self.unicode_1_name().is_empty() {
            true => self.unicode_1_name(),
            false => self.name(),
        };

        let gc = GeneralCategory::try_from(self.category()).map_err(property)?;
        let ccc = CanonicalCombiningClass::try_from(self.fields[3]).map_err(property)?;
        let bidi_mirrored = BidiMirrored::from(self.fields[9]);

        let uppercase = SimpleCaseMapping::try_from(self.fields[12]).map_err(property)?;
        let lowercase = SimpleCaseMapping::try_from(self.fields[13]).map_err(property)?;
        let titlecase = SimpleCaseMapping::try_from(self.fields[14]).map_err(property)?;

        // пропускаем колонки 4 - 8 и 11:
        //
        // * Bidi_Class, Decomposition, Numeric_Type / Numeric_Value
        // * ISO_Comment (Obsolete as of 5.2.0; Deprecated and Stabilized as of 6.0.0)

        Ok(CodepointRecord {
            code: self.code,
            name: name.to_owned(),
            gc,
            ccc,
            bidi_mirrored,
            simple_uppercase_mapping: uppercase.code(),
            simple_lowercase_mapping: lowercase.code(),
            simple_titlecase_mapping: titlecase.or(uppercase).code(),
        })
    }
}
