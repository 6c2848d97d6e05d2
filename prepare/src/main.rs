use std::fs::{self, File};
use std::io::BufWriter;

use log::LevelFilter;
use unicode_data_prepare::config::Config;
use unicode_data_prepare::{fatal, logger, output};
use unicode_data_source::UnicodeDatabase;

fn main()
{
    // до разбора настроек пишем в лог всё, начиная с info
    logger::init(LevelFilter::Info);

    let config = fatal::exit_on_error(Config::from_env(std::env::args().skip(1)));
    log::set_max_level(config.log_level);

    let unicode_data = fatal::exit_on_error(fs::read_to_string(&config.unicode_data));
    let blocks = fatal::exit_on_error(fs::read_to_string(&config.blocks));

    let database = fatal::exit_on_error(UnicodeDatabase::compile(&unicode_data, &blocks));

    for &code in config.describe.iter() {
        let description = fatal::require(database.describe(code));

        println!(
            "{}\n    Category: {} ({})\n    Block: {}\n    Plane: {}",
            description,
            description.gc,
            description.gc.description(),
            description.block.unwrap_or("*none*"),
            description.plane.unwrap_or("???"),
        );
    }

    let mut file = BufWriter::new(fatal::exit_on_error(File::create(&config.output)));

    fatal::exit_on_error(output::write(&database, &mut file));
    log::info!("written {}", config.output.display());

    output::stats::print(&database);
}
