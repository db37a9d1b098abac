use std::{
    ffi::CString,
    sync::{Arc, Mutex},
    thread,
};

use gdal_glue::{config, errors::CplErrType};
use gdal_glue_sys::{CPLErr, CPLError};
use log::{Level, LevelFilter, Log, Metadata, Record};

#[test]
fn test_error_handler() {
    // The error handler is process wide, so the scenarios run in order.
    use_error_handler();
    error_handler_interleaved();
    use_log_error_handler();
}

fn emit(class: CPLErr::Type, number: i32, msg: &str) {
    let fmt = CString::new("%s").unwrap();
    let msg = CString::new(msg).unwrap();
    unsafe { CPLError(class, number, fmt.as_ptr(), msg.as_ptr()) };
}

fn use_error_handler() {
    let errors: Arc<Mutex<Vec<(CplErrType, i32, String)>>> = Arc::new(Mutex::new(Vec::new()));

    let errors_clone = errors.clone();
    config::set_error_handler(move |class, number, msg| {
        errors_clone.lock().unwrap().push((class, number, msg.to_string()));
    });

    emit(CPLErr::CE_Failure, 42, "foo");
    emit(CPLErr::CE_Warning, 1, "bar");

    config::remove_error_handler();
    emit(CPLErr::CE_Warning, 2, "not captured");

    let result = errors.lock().unwrap().clone();
    assert_eq!(
        result,
        vec![
            (CplErrType::Failure, 42, "foo".to_string()),
            (CplErrType::Warning, 1, "bar".to_string())
        ]
    );
}

fn error_handler_interleaved() {
    // two threads swapping handlers while a third one reports errors
    let setters: Vec<_> = (0..2)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..100 {
                    config::set_error_handler(|_, _, _| {});
                }
            })
        })
        .collect();

    let reporter = thread::spawn(|| {
        for _ in 0..100 {
            emit(CPLErr::CE_Failure, 42, "foo");
            emit(CPLErr::CE_Warning, 1, "bar");
        }
    });

    reporter.join().unwrap();
    for setter in setters {
        setter.join().unwrap();
    }
    config::remove_error_handler();
}

/// Keeps every record so the test can inspect target and level.
struct CollectingLogger {
    records: Mutex<Vec<(String, Level, String)>>,
}

impl Log for CollectingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((
            record.target().to_string(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: CollectingLogger = CollectingLogger {
    records: Mutex::new(Vec::new()),
};

fn use_log_error_handler() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);
    // CE_Debug messages only reach the handler with CPL_DEBUG on
    config::set_config_option("CPL_DEBUG", "ON").unwrap();

    config::set_log_error_handler();
    emit(CPLErr::CE_Debug, 0, "a debug message");
    emit(CPLErr::CE_Warning, 3, "a warning");
    emit(CPLErr::CE_Failure, 4, "a failure");
    config::remove_error_handler();
    emit(CPLErr::CE_Failure, 5, "not logged");

    config::clear_config_option("CPL_DEBUG").unwrap();

    let records = LOGGER.records.lock().unwrap().clone();
    assert_eq!(
        records,
        vec![
            ("gdal".to_string(), Level::Debug, "a debug message".to_string()),
            ("gdal".to_string(), Level::Warn, "[3] a warning".to_string()),
            ("gdal".to_string(), Level::Error, "[4] a failure".to_string()),
        ]
    );
}
