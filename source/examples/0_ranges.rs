use unicode_data_source::UnicodeDatabase;

const UNICODE_DATA: &str = include_str!("./../data/ucd/sample/UnicodeData.txt");
const BLOCKS: &str = include_str!("./../data/ucd/sample/Blocks.txt");

/// какие диапазоны записаны в UnicodeData.txt, и чьи свойства они получают?
fn main()
{
    let unicode = match UnicodeDatabase::compile(UNICODE_DATA, BLOCKS) {
        Ok(unicode) => unicode,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let store = unicode.codepoints();

    for range in store.ranges() {
        let representative = store.representative(range);

        println!(
            "U+{:04X} ..= U+{:04X} {} ({} кодпоинтов), свойства U+{:04X}: {}, блок: {}",
            range.start,
            range.end,
            range.name_prefix,
            range.size(),
            representative.code,
            representative.gc.abbr(),
            unicode.blocks().lookup_block_name(range.start).unwrap_or("-"),
        );
    }
}

/*

результат (тестовая выборка):

U+3400 ..= U+4DBF CJK IDEOGRAPH EXTENSION A (6592 кодпоинтов), свойства U+33FF: So, блок: CJK Unified Ideographs Extension A
U+4E00 ..= U+9FFF CJK IDEOGRAPH (20992 кодпоинтов), свойства U+4DC0: So, блок: CJK Unified Ideographs
U+AC00 ..= U+D7A3 HANGUL SYLLABLE (11172 кодпоинтов), свойства U+A000: Lo, блок: Hangul Syllables
...

*/
