use std::process::exit;

use log::info;

use text_analyzer::logging::init_logging_or_exit;
use text_analyzer::report::CountStrategy;
use text_analyzer::util::*;

fn main() {
    let conf = parse_args("word frequency report: tally words, then sort the distinct ones");
    init_logging_or_exit(&conf);

    let stopwatch = Stopwatch::start();
    match run(&conf, CountStrategy::TallyThenSort) {
        Ok(lines) => info!("wrote {} report lines", lines),
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    }
    stopwatch.log_elapsed("tally-then-sort");
}
