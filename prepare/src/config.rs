use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use unicode_data_source::hex::parse_codepoint;

/// каталог с файлами UCD по умолчанию
pub const DEFAULT_UCD_DIR: &str = "./../data/ucd/15.1.0";
/// файл с подготовленными таблицами по умолчанию
pub const DEFAULT_OUTPUT: &str = "./../data/unicode_data.rs.txt";
/// переменная окружения с каталогом UCD
pub const UCD_DIR_VAR: &str = "UCD_DIR";

/// настройки подготовки таблиц
#[derive(Debug, Clone, PartialEq)]
pub struct Config
{
    /// путь к UnicodeData.txt
    pub unicode_data: PathBuf,
    /// путь к Blocks.txt
    pub blocks: PathBuf,
    /// куда писать таблицы
    pub output: PathBuf,
    pub log_level: LevelFilter,
    /// кодпоинты, описание которых нужно вывести
    pub describe: Vec<u32>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError
{
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` requires a value")]
    MissingValue(String),
    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
    #[error("invalid code point `{0}`")]
    InvalidCodepoint(String),
}

impl Config
{
    /// настройки по умолчанию для каталога UCD
    pub fn for_ucd_dir(dir: impl Into<PathBuf>) -> Self
    {
        let dir = dir.into();

        Self {
            unicode_data: dir.join("UnicodeData.txt"),
            blocks: dir.join("Blocks.txt"),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_level: LevelFilter::Info,
            describe: vec![],
        }
    }

    /// каталог UCD из переменной окружения UCD_DIR, остальное - из аргументов
    pub fn from_env<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ConfigError>
    {
        let dir = env::var_os(UCD_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UCD_DIR));

        Self::for_ucd_dir(dir).with_args(args)
    }

    /// применить аргументы вида --ключ=значение
    ///
    /// ```text
    ///     --ucd-dir=<каталог>      UnicodeData.txt и Blocks.txt из каталога
    ///     --unicode-data=<файл>
    ///     --blocks=<файл>
    ///     --output=<файл>
    ///     --log-level=<off|error|warn|info|debug|trace>
    ///     --describe=<код>[,<код>...]  коды в шестнадцатеричном виде, допускается префикс U+
    /// ```
    pub fn with_args<I: IntoIterator<Item = String>>(mut self, args: I) -> Result<Self, ConfigError>
    {
        for arg in args {
            let (key, value) = match arg.split_once('=') {
                Some((key, value)) if !value.is_empty() => (key, value),
                _ => return Err(ConfigError::MissingValue(arg.clone())),
            };

            match key {
                "--ucd-dir" => {
                    let dir = PathBuf::from(value);

                    self.unicode_data = dir.join("UnicodeData.txt");
                    self.blocks = dir.join("Blocks.txt");
                }
                "--unicode-data" => self.unicode_data = PathBuf::from(value),
                "--blocks" => self.blocks = PathBuf::from(value),
                "--output" => self.output = PathBuf::from(value),
                "--log-level" => {
                    self.log_level = LevelFilter::from_str(value)
                        .map_err(|_| ConfigError::InvalidLogLevel(value.to_owned()))?;
                }
                "--describe" => {
                    for code in value.split(',') {
                        self.describe.push(parse_code(code)?);
                    }
                }
                _ => return Err(ConfigError::UnknownOption(key.to_owned())),
            }
        }

        Ok(self)
    }
}

/// 0041, U+0041, u+4e01
fn parse_code(value: &str) -> Result<u32, ConfigError>
{
    let value = value.trim();
    let digits = value
        .strip_prefix("U+")
        .or_else(|| value.strip_prefix("u+"))
        .unwrap_or(value);

    parse_codepoint(digits).ok_or_else(|| ConfigError::InvalidCodepoint(value.to_owned()))
}
