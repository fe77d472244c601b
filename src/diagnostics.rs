//! Diagnostic logging for the `herald` binary.
use std::io::Write;

use env_logger::{fmt::Color, Builder, Env};
use herald::formatted_topic;
use log::Level;

/// Sets up logging for herald's own diagnostics.
///
/// These go to stderr through the `log` facade and are controlled by
/// `RUST_LOG` (default `warn`). Each line uses the same right-aligned topic
/// column as herald's messages, with `<target> <level>` as the topic, colored
/// by level.
pub fn setup() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red).set_bold(true),
                Level::Warn => style.set_color(Color::Yellow).set_bold(true),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::White),
            };

            let level = record.level().as_str().to_ascii_lowercase();
            let topic = formatted_topic(&format!("{} {level}", record.target()));
            writeln!(buf, "{}{}", style.value(topic), record.args())
        })
        .init();
}
