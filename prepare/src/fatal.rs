use std::fmt::Display;
use std::process;

use unicode_data_source::CodepointNotFound;

/// код завершения при фатальной ошибке
pub const EXIT_FAILURE: i32 = 1;

/// значение или завершение процесса с записью ошибки в лог
pub fn exit_on_error<T, E: Display>(result: Result<T, E>) -> T
{
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("{}", e);
            process::exit(EXIT_FAILURE)
        }
    }
}

/// кодпоинт, отсутствующий в таблице, - ошибка во входных данных или у вызывающей стороны,
/// продолжать с ним нельзя
pub fn require<T>(result: Result<T, CodepointNotFound>) -> T
{
    exit_on_error(result)
}
