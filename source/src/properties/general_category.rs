use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt
///
/// 30 конкретных значений, Cn и 8 обобщающих категорий - всего 38 вариантов.
/// обобщающие категории в UnicodeData.txt не встречаются, но входят в таблицу сокращений UAX #44:
///     LC (Lu, Ll, Lt) - буквы, имеющие регистр
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
/// более детально - https://www.unicode.org/reports/tr44/#General_Category_Values
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом
    Unassigned = 0,

    /// Lu - прописная буква
    UppercaseLetter = 1,
    /// Ll - строчная буква
    LowercaseLetter = 2,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3,

    /// Lm - буква-модификатор
    ModifierLetter = 4,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 6,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8,

    /// Nd - десятичная цифра
    DecimalNumber = 9,
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10,
    /// No - прочие числовые символы
    OtherNumber = 11,

    /// Zs - разделитель-пробел
    SpaceSeparator = 12,
    /// Zl - разделитель строки
    LineSeparator = 13,
    /// Zp - разделитель параграфов
    ParagraphSeparator = 14,

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 16,
    /// Cf - управляющий символ форматирования
    Format = 17,
    /// Cs - символ-суррогат
    Surrogate = 18,
    /// Co - символ для приватного использования
    PrivateUse = 19,

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 20,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 21,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 22,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 23,
    /// Pi - начальный знак цитаты
    InitialPunctuation = 24,
    /// Pf - конечный знак цитаты
    FinalPunctuation = 25,
    /// Po - знак препинания другого типа
    OtherPunctuation = 26,

    /// Sm - математический символ
    MathSymbol = 28,
    /// Sc - символ валюты
    CurrencySymbol = 29,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 30,
    /// So - прочие символы
    OtherSymbol = 31,

    /// LC - Lu | Ll | Lt
    CasedLetter = 32,
    /// L - Lu | Ll | Lt | Lm | Lo
    Letter = 33,
    /// M - Mn | Mc | Me
    Mark = 34,
    /// N - Nd | Nl | No
    Number = 35,
    /// P - Pc | Pd | Ps | Pe | Pi | Pf | Po
    Punctuation = 36,
    /// S - Sm | Sc | Sk | So
    Symbol = 37,
    /// Z - Zs | Zl | Zp
    Separator = 38,
    /// C - Cc | Cf | Cs | Co | Cn
    Other = 39,
}

impl GeneralCategory
{
    /// все варианты, в порядке таблицы сокращений
    pub const ALL: [GeneralCategory; 38] = [
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::CasedLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::Letter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::Mark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::Number,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::Punctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
        Self::Symbol,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Separator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::Unassigned,
        Self::Other,
    ];

    /// сокращение, как в UnicodeData.txt
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::CasedLetter => "LC",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::Letter => "L",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::Mark => "M",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::Number => "N",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::Punctuation => "P",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::Symbol => "S",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Separator => "Z",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::Unassigned => "Cn",
            Self::Other => "C",
        }
    }

    /// полное название значения свойства, например Uppercase_Letter
    pub fn long_name(&self) -> &'static str
    {
        match self {
            Self::UppercaseLetter => "Uppercase_Letter",
            Self::LowercaseLetter => "Lowercase_Letter",
            Self::TitlecaseLetter => "Titlecase_Letter",
            Self::CasedLetter => "Cased_Letter",
            Self::ModifierLetter => "Modifier_Letter",
            Self::OtherLetter => "Other_Letter",
            Self::Letter => "Letter",
            Self::NonspacingMark => "Nonspacing_Mark",
            Self::SpacingMark => "Spacing_Mark",
            Self::EnclosingMark => "Enclosing_Mark",
            Self::Mark => "Mark",
            Self::DecimalNumber => "Decimal_Number",
            Self::LetterNumber => "Letter_Number",
            Self::OtherNumber => "Other_Number",
            Self::Number => "Number",
            Self::ConnectorPunctuation => "Connector_Punctuation",
            Self::DashPunctuation => "Dash_Punctuation",
            Self::OpenPunctuation => "Open_Punctuation",
            Self::ClosePunctuation => "Close_Punctuation",
            Self::InitialPunctuation => "Initial_Punctuation",
            Self::FinalPunctuation => "Final_Punctuation",
            Self::OtherPunctuation => "Other_Punctuation",
            Self::Punctuation => "Punctuation",
            Self::MathSymbol => "Math_Symbol",
            Self::CurrencySymbol => "Currency_Symbol",
            Self::ModifierSymbol => "Modifier_Symbol",
            Self::OtherSymbol => "Other_Symbol",
            Self::Symbol => "Symbol",
            Self::SpaceSeparator => "Space_Separator",
            Self::LineSeparator => "Line_Separator",
            Self::ParagraphSeparator => "Paragraph_Separator",
            Self::Separator => "Separator",
            Self::Control => "Control",
            Self::Format => "Format",
            Self::Surrogate => "Surrogate",
            Self::PrivateUse => "Private_Use",
            Self::Unassigned => "Unassigned",
            Self::Other => "Other",
        }
    }

    /// описание категории из UAX #44
    pub fn description(&self) -> &'static str
    {
        match self {
            Self::UppercaseLetter => "an uppercase letter",
            Self::LowercaseLetter => "a lowercase letter",
            Self::TitlecaseLetter => "a digraphic character, with first part uppercase",
            Self::CasedLetter => "Lu | Ll | Lt",
            Self::ModifierLetter => "a modifier letter",
            Self::OtherLetter => "other letters, including syllables and ideographs",
            Self::Letter => "Lu | Ll | Lt | Lm | Lo",
            Self::NonspacingMark => "a nonspacing combining mark (zero advance width)",
            Self::SpacingMark => "a spacing combining mark (positive advance width)",
            Self::EnclosingMark => "an enclosing combining mark",
            Self::Mark => "Mn | Mc | Me",
            Self::DecimalNumber => "a decimal digit",
            Self::LetterNumber => "a letterlike numeric character",
            Self::OtherNumber => "a numeric character of other type",
            Self::Number => "Nd | Nl | No",
            Self::ConnectorPunctuation => "a connecting punctuation mark, like a tie",
            Self::DashPunctuation => "a dash or hyphen punctuation mark",
            Self::OpenPunctuation => "an opening punctuation mark (of a pair)",
            Self::ClosePunctuation => "a closing punctuation mark (of a pair)",
            Self::InitialPunctuation => "an initial quotation mark",
            Self::FinalPunctuation => "a final quotation mark",
            Self::OtherPunctuation => "a punctuation mark of other type",
            Self::Punctuation => "Pc | Pd | Ps | Pe | Pi | Pf | Po",
            Self::MathSymbol => "a symbol of mathematical use",
            Self::CurrencySymbol => "a currency sign",
            Self::ModifierSymbol => "a non-letterlike modifier symbol",
            Self::OtherSymbol => "a symbol of other type",
            Self::Symbol => "Sm | Sc | Sk | So",
            Self::SpaceSeparator => "a space character (of various non-zero widths)",
            Self::LineSeparator => "U+2028 LINE SEPARATOR only",
            Self::ParagraphSeparator => "U+2029 PARAGRAPH SEPARATOR only",
            Self::Separator => "Zs | Zl | Zp",
            Self::Control => "a C0 or C1 control code",
            Self::Format => "a format control character",
            Self::Surrogate => "a surrogate code point",
            Self::PrivateUse => "a private-use character",
            Self::Unassigned => "a reserved unassigned code point or a noncharacter",
            Self::Other => "Cc | Cf | Cs | Co | Cn",
        }
    }

    /// обобщающая категория (L, M, N, P, S, Z, C)
    /// для обобщающих категорий возвращается L или сама категория; LC входит в L
    pub fn group(&self) -> GeneralCategory
    {
        match self {
            Self::UppercaseLetter
            | Self::LowercaseLetter
            | Self::TitlecaseLetter
            | Self::CasedLetter
            | Self::ModifierLetter
            | Self::OtherLetter
            | Self::Letter => Self::Letter,

            Self::NonspacingMark | Self::SpacingMark | Self::EnclosingMark | Self::Mark => Self::Mark,

            Self::DecimalNumber | Self::LetterNumber | Self::OtherNumber | Self::Number => Self::Number,

            Self::ConnectorPunctuation
            | Self::DashPunctuation
            | Self::OpenPunctuation
            | Self::ClosePunctuation
            | Self::InitialPunctuation
            | Self::FinalPunctuation
            | Self::OtherPunctuation
            | Self::Punctuation => Self::Punctuation,

            Self::MathSymbol
            | Self::CurrencySymbol
            | Self::ModifierSymbol
            | Self::OtherSymbol
            | Self::Symbol => Self::Symbol,

            Self::SpaceSeparator | Self::LineSeparator | Self::ParagraphSeparator | Self::Separator => {
                Self::Separator
            }

            Self::Control
            | Self::Format
            | Self::Surrogate
            | Self::PrivateUse
            | Self::Unassigned
            | Self::Other => Self::Other,
        }
    }

    /// обобщающая ли это категория (LC, L, M, N, P, S, Z, C)
    #[inline]
    pub fn is_umbrella(&self) -> bool
    {
        u8::from(*self) >= Self::CasedLetter as u8
    }

    /// относится-ли категория к буквам с регистром (LC)
    #[inline]
    pub fn is_cased_letter(&self) -> bool
    {
        matches!(
            self,
            Self::UppercaseLetter | Self::LowercaseLetter | Self::TitlecaseLetter | Self::CasedLetter
        )
    }

    /// относится-ли категория к буквам (L)
    #[inline]
    pub fn is_letter(&self) -> bool
    {
        self.group() == Self::Letter
    }

    /// относится-ли категория к комбинирующим символам (M)
    #[inline]
    pub fn is_combining(&self) -> bool
    {
        matches!(self, Self::NonspacingMark | Self::SpacingMark | Self::EnclosingMark)
    }

    /// относится-ли категория к цифрам и числовым символам (N)
    #[inline]
    pub fn is_numeric(&self) -> bool
    {
        self.group() == Self::Number
    }

    /// относится-ли категория к пунктуации (P)
    #[inline]
    pub fn is_punctuation(&self) -> bool
    {
        self.group() == Self::Punctuation
    }

    /// относится-ли категория к символам (S)
    #[inline]
    pub fn is_symbol(&self) -> bool
    {
        self.group() == Self::Symbol
    }

    /// относится-ли категория к управляющим символам (или не назначена) (C)
    #[inline]
    pub fn is_control(&self) -> bool
    {
        self.group() == Self::Other
    }
}

impl core::fmt::Display for GeneralCategory
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.long_name())
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "LC" => Self::CasedLetter,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "L" => Self::Letter,
            "Mn" => Self::NonspacingMark,
            "Mc" => Self::SpacingMark,
            "Me" => Self::EnclosingMark,
            "M" => Self::Mark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "N" => Self::Number,
            "Pc" => Self::ConnectorPunctuation,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Po" => Self::OtherPunctuation,
            "P" => Self::Punctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            "S" => Self::Symbol,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Z" => Self::Separator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Cs" => Self::Surrogate,
            "Co" => Self::PrivateUse,
            "Cn" => Self::Unassigned,
            "C" => Self::Other,
            _ => return Err(PropertiesError::UnknownGeneralCategory(abbr.to_owned())),
        })
    }
}

impl TryFrom<u8> for GeneralCategory
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        Self::ALL
            .iter()
            .copied()
            .find(|gc| u8::from(*gc) == value)
            .ok_or_else(|| PropertiesError::UnknownGeneralCategory(value.to_string()))
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}
