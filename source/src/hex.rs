/// наибольший кодпоинт Unicode
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// кодпоинт в шестнадцатеричной записи UCD: 0041, 1F600, 10FFFF
///
/// u32::from_str_radix допускает ведущий +, поэтому сначала проверяем, что все символы - шестнадцатеричные цифры;
/// пустая строка и значения больше U+10FFFF - не кодпоинты
pub fn parse_codepoint(value: &str) -> Option<u32>
{
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(value, 16).ok().filter(|&code| code <= MAX_CODEPOINT)
}
