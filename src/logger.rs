use log::{Level, LevelFilter};
use env_logger::{Builder, Env};
use std::io::Write;
use chrono::Local;

/// Console logger. `Info` unless `RUST_LOG` says otherwise; debug lines also
/// carry the module they came from.
pub fn init() {
    if let Err(e) = builder().try_init() {
        eprintln!("Logger already initialized: {}", e);
    }
}

fn builder() -> Builder {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            if record.level() >= Level::Debug {
                writeln!(buf, "{} [{}] {} - {}", stamp, record.level(), record.target(), record.args())
            } else {
                writeln!(buf, "{} [{}] - {}", stamp, record.level(), record.args())
            }
        })
        .filter(None, LevelFilter::Info)
        .parse_env(Env::default());
    builder
}
