use std::io::{Read, Seek, SeekFrom};

use leveled_logging::color::{AnsiColors, NoColors};
use leveled_logging::{log_to, Logger, Severity, LINE_ENDING};

fn read_back(file: &mut std::fs::File) -> String {
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    contents
}

#[test]
fn test_file_lines_are_uncolored() {
    let logger = Logger::with_colors(AnsiColors);
    let mut file = tempfile::tempfile().unwrap();

    logger.log_line(&mut file, "starting", Severity::Info).unwrap();
    logger.log_line(&mut file, "low disk", Severity::Warn).unwrap();
    log_to!(logger, &mut file, Severity::Error, "{} of {} writes failed", 2, 5).unwrap();

    let expected = format!(
        "[INFO] starting {le}[WARN] low disk {le}[ERROR] 2 of 5 writes failed {le}",
        le = LINE_ENDING
    );
    assert_eq!(read_back(&mut file), expected);
}

#[test]
fn test_threshold_filters_file_output() {
    let logger = Logger::with_colors(AnsiColors);
    logger.set_threshold(Severity::Error);
    let mut file = tempfile::tempfile().unwrap();

    logger.log_line(&mut file, "ignored", Severity::Warn).unwrap();
    log_to!(logger, &mut file, Severity::Trace, "ignored {}", 1).unwrap();
    assert_eq!(read_back(&mut file), "");

    logger.log_line(&mut file, "fatal", Severity::Error).unwrap();
    assert_eq!(read_back(&mut file), format!("[ERROR] fatal {}", LINE_ENDING));
}

#[test]
fn test_every_level_at_or_above_threshold_writes_one_line() {
    for threshold in Severity::ALL {
        let logger = Logger::with_colors(NoColors);
        logger.set_threshold(threshold);

        for level in Severity::ALL {
            let mut out = Vec::new();
            logger.log_line(&mut out, "x", level).unwrap();
            if level >= threshold {
                assert_eq!(out, format!("{} x {}", level.tag(), LINE_ENDING).into_bytes());
            } else {
                assert!(out.is_empty());
            }
        }
    }
}

#[test]
fn test_no_colors_sink_on_colored_path() {
    let logger = Logger::with_colors(NoColors);
    let mut out = Vec::new();
    logger
        .log_formatted_colored(&mut out, format_args!("{}", "plain"), Severity::Error)
        .unwrap();
    assert_eq!(out, format!("[ERROR] plain {}", LINE_ENDING).into_bytes());
}

#[test]
fn test_shared_logger_across_threads() {
    let logger = Logger::with_colors(AnsiColors);
    let worker = logger.clone();

    std::thread::spawn(move || worker.set_threshold(Severity::Warn))
        .join()
        .unwrap();

    assert_eq!(logger.threshold(), Severity::Warn);
    assert!(!logger.is_enabled(Severity::Info));
}
