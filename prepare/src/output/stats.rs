use std::collections::HashMap;

use unicode_data_source::UnicodeDatabase;

/// информация о собранных таблицах
pub fn print(database: &UnicodeDatabase)
{
    let store = database.codepoints();

    let ranged: u64 = store.ranges().iter().map(|range| range.size() as u64).sum();

    println!(
        "\nUnicodeData.txt:\n  \
        записано отдельно: {}\n  \
        диапазонов: {}\n  \
        кодпоинтов в диапазонах: {}\n\
        Blocks.txt:\n  \
        блоков: {}",
        store.records().len(),
        store.ranges().len(),
        ranged,
        database.blocks().blocks().len(),
    );

    println!();

    let stats = categories(database);

    let mut keys: Vec<&&str> = stats.keys().collect();
    keys.sort_by(|a, b| stats[*b].cmp(&stats[*a]).then(a.cmp(b)));

    for key in keys {
        println!("  {}: {}", key, stats[key]);
    }

    println!();
}

/// количество записанных отдельно кодпоинтов по обобщающим категориям
pub fn categories(database: &UnicodeDatabase) -> HashMap<&'static str, usize>
{
    let mut stats = HashMap::new();

    for record in database.codepoints().records() {
        *stats.entry(record.gc.group().long_name()).or_default() += 1;
    }

    stats
}
