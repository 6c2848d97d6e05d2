use std::collections::HashMap;
use std::env;
use std::fs;

/// выведем результаты бенчмарка lookup как CSV: строки - виды кодпоинтов, колонки - запросы
fn main()
{
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Использование: {} <файл с выводом cargo bench>", args[0]);
        return;
    }

    match fs::read_to_string(&args[1]) {
        Ok(contents) => println!("{}", make_csv(parse_str(contents.as_str(), "lookup"))),
        Err(e) => println!("Не удалось прочитать файл: {}", e),
    }
}

/// время в наносекундах для каждого бенчмарка группы: "lookup/record/listed" -> 12.4
fn parse_str(source: &str, group: &str) -> HashMap<String, f64>
{
    let mut result = HashMap::new();

    for line in source.lines() {
        if !line.starts_with(group) {
            continue;
        }

        // lookup/record/listed    time:   [12.301 ns 12.398 ns 12.501 ns]
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 6 || parts[1] != "time:" {
            continue;
        }

        let time = match parts[4].parse::<f64>() {
            Ok(time) => time,
            Err(_) => continue,
        };

        let scale = match parts[5] {
            "ps" => 0.001,
            "ns" => 1.0,
            "µs" | "us" => 1_000.0,
            "ms" => 1_000_000.0,
            _ => continue,
        };

        result.insert(parts[0].to_owned(), time * scale);
    }

    result
}

fn make_csv(source: HashMap<String, f64>) -> String
{
    let mut queries: Vec<&str> = vec![];
    let mut kinds: Vec<&str> = vec![];

    for key in source.keys() {
        let parts: Vec<&str> = key.split('/').collect();

        if parts.len() != 3 {
            continue;
        }

        if !queries.contains(&parts[1]) {
            queries.push(parts[1]);
        }

        if !kinds.contains(&parts[2]) {
            kinds.push(parts[2]);
        }
    }

    queries.sort();
    kinds.sort();

    let mut result = String::new();

    for query in queries.iter() {
        result.push_str(format!(";{}", query).as_str());
    }
    result.push('\n');

    for kind in kinds.iter() {
        result.push_str(kind);

        for query in queries.iter() {
            let value = source.get(&format!("lookup/{}/{}", query, kind)).unwrap_or(&0.0);

            result.push_str(format!(";{:.2}", value).as_str());
        }

        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn criterion_output_to_csv()
    {
        let output = "\
lookup/record/listed    time:   [10.000 ns 12.500 ns 13.000 ns]
lookup/block/listed     time:   [1.0000 µs 1.2000 µs 1.3000 µs]
lookup/record/range_first
                        time:   [20.000 ns 21.000 ns 22.000 ns]
compile                 time:   [5.0000 µs 5.1000 µs 5.2000 µs]
";
        let parsed = parse_str(output, "lookup");

        assert_eq!(parsed.len(), 2);
        assert_eq!(make_csv(parsed), ";block;record\nlisted;1200.00;12.50\n");
    }
}
