// src/logging/format.rs

//! Line format for run log files:
//!
//! ```text
//! [ 2024-05-01 13:45:10,123 ] line 42 my_app::worker - INFO - job finished
//! [ 2024-05-01 13:45:11,004 ] line 57 my_app::worker - WARNING - queue is full
//! ```

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{ChronoLocal, FormatTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const RECORD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone)]
pub struct RunLineFormat {
    timer: ChronoLocal,
}

impl RunLineFormat {
    pub fn new() -> Self {
        Self {
            timer: ChronoLocal::new(RECORD_TIME_FORMAT.to_string()),
        }
    }
}

impl Default for RunLineFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, N> FormatEvent<S, N> for RunLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        writer.write_str("[ ")?;
        if self.timer.format_time(&mut writer).is_err() {
            writer.write_str("<unknown time>")?;
        }
        write!(
            writer,
            " ] line {} {} - {} - ",
            meta.line().unwrap_or(0),
            meta.target(),
            level_name(meta.level())
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Level names as they appear in run files; warnings are spelled out.
fn level_name(level: &Level) -> &'static str {
    if *level == Level::WARN {
        "WARNING"
    } else {
        level.as_str()
    }
}
