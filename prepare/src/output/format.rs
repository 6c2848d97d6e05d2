use std::fmt::UpperHex;

/// представить массив чисел в текстовом виде, строками не длиннее boundary
pub fn format_num_vec<T: UpperHex + Into<u64> + Copy>(input: &[T], boundary: usize) -> String
{
    let mut output = String::new();
    let mut line_len = boundary;

    for &e in input {
        let e_str = match e.into() == 0 {
            true => "0, ".to_owned(),
            false => format!("0x{:X}, ", e),
        };

        if line_len + e_str.len() > boundary {
            output.push_str("\n    ");
            line_len = 0;
        }

        line_len += e_str.len();
        output.push_str(e_str.as_str());
    }

    output.push('\n');

    output
}

/// кодпоинт в виде литерала: 0 или 0x41
pub fn format_code(code: u32) -> String
{
    match code {
        0 => "0".to_owned(),
        _ => format!("0x{:X}", code),
    }
}

/// строковый литерал Rust
#[inline]
pub fn format_str(value: &str) -> String
{
    format!("{:?}", value)
}
