//! Console logger for host builds of `tickfsm-sim`.

use fern::colors::{Color, ColoredLevelConfig};

pub fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Cyan)
        .debug(Color::Green)
        .trace(Color::Magenta);

    fern::Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{level}] [{target}] {message}",
                level = colors.color(record.level()),
                target = record.target(),
                message = message
            ));
        })
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
