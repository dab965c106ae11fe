use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::Once;
use std::sync::OnceLock;

// 리포트 사본을 기록할 파일 (설정되지 않으면 콘솔만 사용)
static LOGGER: OnceLock<Mutex<Option<File>>> = OnceLock::new();
static INIT: Once = Once::new();

pub struct Logger;

impl Logger {
    /// 콘솔 출력과 함께 `log_path`에도 같은 내용을 기록하도록 설정
    pub fn init(log_path: &Path) {
        INIT.call_once(|| {
            // 디렉토리가 없으면 생성
            let log_dir = log_path.parent().unwrap_or_else(|| Path::new("."));
            if !log_dir.as_os_str().is_empty() && !log_dir.exists() {
                if let Err(e) = fs::create_dir_all(log_dir) {
                    eprintln!("Cannot create log directory: {e}");
                    LOGGER.get_or_init(|| Mutex::new(None));
                    return;
                }
            }

            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(log_path);

            match file {
                Ok(mut file) => {
                    println!("Writing report log to '{}'", log_path.display());
                    if let Err(e) = writeln!(
                        file,
                        "# latency report generated at {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S")
                    ) {
                        eprintln!("Failed to write log header: {e}");
                    }
                    LOGGER.get_or_init(|| Mutex::new(Some(file)));
                }
                Err(e) => {
                    eprintln!("Cannot open log file: {e}");
                    LOGGER.get_or_init(|| Mutex::new(None));
                }
            }
        });
    }

    pub fn log(message: &str) {
        println!("{message}");
        Self::write_to_file(format_args!("{message}"));
    }

    pub fn log_error(message: &str) {
        eprintln!("{message}");
        Self::write_to_file(format_args!("ERROR: {message}"));
    }

    pub fn flush() -> std::io::Result<()> {
        if let Some(logger) = LOGGER.get() {
            if let Ok(mut file_guard) = logger.lock() {
                if let Some(file) = file_guard.as_mut() {
                    file.flush()?;
                }
            }
        }
        Ok(())
    }

    fn write_to_file(args: std::fmt::Arguments<'_>) {
        if let Some(logger) = LOGGER.get() {
            if let Ok(mut file_guard) = logger.lock() {
                if let Some(file) = file_guard.as_mut() {
                    if let Err(e) = writeln!(file, "{args}") {
                        eprintln!("Failed to write log file: {e}");
                    }
                }
            }
        }
    }
}

// 매크로 정의
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log(&message);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log_error(&message);
    }};
}
