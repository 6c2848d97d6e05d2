use crate::error::UcdError;
use crate::properties::CodepointRecord;
use crate::record::RawRecord;

const FIRST_SUFFIX: &str = ", First>";
const LAST_SUFFIX: &str = ", Last>";

/// диапазон кодпоинтов, названия которых вычисляются, а не перечисляются в UnicodeData.txt
///
/// в UnicodeData.txt записан парой строк:
///     4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
///     9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmicRange
{
    /// первый кодпоинт (включительно)
    pub start: u32,
    /// последний кодпоинт (включительно)
    pub end: u32,
    /// префикс названия, например CJK IDEOGRAPH
    pub name_prefix: String,
    /// индекс кодпоинта, свойства которого используются для всего диапазона
    pub representative: usize,
}

impl AlgorithmicRange
{
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.start <= code && code <= self.end
    }

    /// название кодпоинта из диапазона: префикс и код, не менее 4 шестнадцатеричных цифр
    #[inline]
    pub fn display_name(&self, code: u32) -> String
    {
        format!("{} {:04X}", self.name_prefix, code)
    }

    /// количество кодпоинтов в диапазоне
    #[inline]
    pub fn size(&self) -> u32
    {
        self.end - self.start + 1
    }
}

/// маркер диапазона в колонке названия: <метка, First> или <метка, Last>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMarker<'a>
{
    First(&'a str),
    Last(&'a str),
}

impl<'a> RangeMarker<'a>
{
    pub fn parse(name: &'a str) -> Option<Self>
    {
        let label = name.strip_prefix('<')?;

        if let Some(label) = label.strip_suffix(FIRST_SUFFIX) {
            return Some(Self::First(label));
        }

        label.strip_suffix(LAST_SUFFIX).map(Self::Last)
    }
}

/// состояние разбора
#[derive(Debug)]
enum State
{
    Scanning,
    RangeOpen
    {
        start: u32,
        label: String,
    },
}

/// собирает кодпоинты и диапазоны из потока строк UnicodeData.txt
///
/// каждой строке <…, First> должна соответствовать следующая за ней строка <…, Last> с той же меткой;
/// свойства диапазона берутся у последнего кодпоинта, записанного перед его закрытием
#[derive(Debug)]
pub struct Reconciler
{
    state: State,
    records: Vec<CodepointRecord>,
    ranges: Vec<AlgorithmicRange>,
}

impl Default for Reconciler
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl Reconciler
{
    pub fn new() -> Self
    {
        Self {
            state: State::Scanning,
            records: vec![],
            ranges: vec![],
        }
    }

    /// обработать очередную строку
    pub fn feed(&mut self, row: &RawRecord) -> Result<(), UcdError>
    {
        let marker = RangeMarker::parse(row.name());

        match (core::mem::replace(&mut self.state, State::Scanning), marker) {
            (State::Scanning, None) => {
                self.records.push(row.to_record()?);
            }
            (State::Scanning, Some(RangeMarker::First(label))) => {
                self.state = State::RangeOpen {
                    start: row.code,
                    label: label.to_owned(),
                };
            }
            (State::RangeOpen { start, label }, Some(RangeMarker::Last(last))) => {
                if label != last || row.code < start {
                    return Err(UcdError::MismatchedRange {
                        line: row.line,
                        first: label,
                        last: last.to_owned(),
                    });
                }

                let representative = match self.records.len() {
                    0 => {
                        return Err(UcdError::RangeWithoutRepresentative {
                            line: row.line,
                            start,
                        })
                    }
                    len => len - 1,
                };

                let range = AlgorithmicRange {
                    start,
                    end: row.code,
                    name_prefix: last.to_uppercase(),
                    representative,
                };

                log::trace!(
                    "range U+{:04X}..=U+{:04X} {}, properties of U+{:04X}",
                    range.start,
                    range.end,
                    range.name_prefix,
                    self.records[representative].code
                );

                self.ranges.push(range);
            }
            (State::Scanning, Some(RangeMarker::Last(_))) | (State::RangeOpen { .. }, _) => {
                return Err(UcdError::UnpairedRangeMarker {
                    line: row.line,
                    name: row.name().to_owned(),
                });
            }
        }

        Ok(())
    }

    /// завершить разбор; незакрытый диапазон - ошибка
    pub fn finish(self) -> Result<(Vec<CodepointRecord>, Vec<AlgorithmicRange>), UcdError>
    {
        match self.state {
            State::Scanning => Ok((self.records, self.ranges)),
            State::RangeOpen { start, label } => Err(UcdError::UnterminatedRange { start, name: label }),
        }
    }
}
