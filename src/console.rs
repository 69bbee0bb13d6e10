use std::io::{self, Write};

use crate::model::level::{LogLevel, COLOR_RESET};

/// Destination for echoed log lines. ERROR goes to `err`, everything else to `out`.
pub struct Console {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Console {
    pub fn stdio() -> Self {
        Console {
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
        }
    }

    pub fn new(out: impl Write + Send + 'static, err: impl Write + Send + 'static) -> Self {
        Console {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    fn stream(&mut self, level: LogLevel) -> &mut (dyn Write + Send) {
        match level {
            LogLevel::Error => self.err.as_mut(),
            LogLevel::Info | LogLevel::Debug => self.out.as_mut(),
        }
    }

    pub(crate) fn echo(
        &mut self,
        level: LogLevel,
        header: &str,
        body: std::fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let stream = self.stream(level);
        write!(stream, "{}{}", level.color(), header)?;
        stream.write_fmt(body)?;
        writeln!(stream, "{}", COLOR_RESET)?;
        stream.flush()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
