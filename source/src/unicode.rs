use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::{CodepointNotFound, UcdError};
use crate::properties::CodepointRecord;
use crate::ranges::{AlgorithmicRange, Reconciler};
use crate::record::RawRecord;

/// как кодпоинт представлен в таблице
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification
{
    /// записан отдельной строкой, индекс в records()
    Listed(usize),
    /// входит в диапазон, индекс в ranges()
    Ranged(usize),
}

/// таблица кодпоинтов UnicodeData.txt: отдельно записанные кодпоинты и диапазоны
///
/// после сборки не изменяется; кодпоинт, которого нет ни среди записанных, ни в диапазонах,
/// считается ошибкой вызывающей стороны
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointStore
{
    records: Vec<CodepointRecord>,
    index: HashMap<u32, usize>,
    ranges: Vec<AlgorithmicRange>,
}

impl CodepointStore
{
    /// разбор UnicodeData.txt из UCD
    pub fn compile(data: &str) -> Result<Self, UcdError>
    {
        let mut reconciler = Reconciler::new();

        for (i, line) in data.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            reconciler.feed(&RawRecord::parse(i + 1, line)?)?;
        }

        let (records, ranges) = reconciler.finish()?;

        let mut index = HashMap::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            if index.insert(record.code, i).is_some() {
                return Err(UcdError::DuplicateCodepoint { code: record.code });
            }
        }

        log::debug!(
            "UnicodeData.txt: {} code points, {} ranges",
            records.len(),
            ranges.len()
        );

        Ok(Self {
            records,
            index,
            ranges,
        })
    }

    /// найти кодпоинт: сначала среди записанных, затем в диапазонах
    pub fn classify(&self, code: u32) -> Option<Classification>
    {
        if let Some(&i) = self.index.get(&code) {
            return Some(Classification::Listed(i));
        }

        self.ranges
            .iter()
            .position(|range| range.contains(code))
            .map(Classification::Ranged)
    }

    /// свойства кодпоинта
    ///
    /// для кодпоинта из диапазона возвращается запись, свойства которой использует диапазон -
    /// её название к кодпоинту не относится, см. lookup_display_name()
    pub fn lookup_record(&self, code: u32) -> Result<&CodepointRecord, CodepointNotFound>
    {
        match self.classify(code) {
            Some(Classification::Listed(i)) => Ok(&self.records[i]),
            Some(Classification::Ranged(i)) => Ok(self.representative(&self.ranges[i])),
            None => Err(CodepointNotFound(code)),
        }
    }

    /// название кодпоинта
    pub fn lookup_display_name(&self, code: u32) -> Result<Cow<'_, str>, CodepointNotFound>
    {
        match self.classify(code) {
            Some(Classification::Listed(i)) => Ok(Cow::Borrowed(self.records[i].name.as_str())),
            Some(Classification::Ranged(i)) => Ok(Cow::Owned(self.ranges[i].display_name(code))),
            None => Err(CodepointNotFound(code)),
        }
    }

    /// диапазон, в который входит кодпоинт (без учета записанных отдельно)
    pub fn range(&self, code: u32) -> Option<&AlgorithmicRange>
    {
        self.ranges.iter().find(|range| range.contains(code))
    }

    /// запись, свойства которой используются для всего диапазона
    #[inline]
    pub fn representative(&self, range: &AlgorithmicRange) -> &CodepointRecord
    {
        &self.records[range.representative]
    }

    /// записанные отдельно кодпоинты, в порядке UnicodeData.txt
    #[inline]
    pub fn records(&self) -> &[CodepointRecord]
    {
        &self.records
    }

    /// диапазоны, в порядке UnicodeData.txt
    #[inline]
    pub fn ranges(&self) -> &[AlgorithmicRange]
    {
        &self.ranges
    }
}
