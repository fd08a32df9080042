use ansi_term::Style;
use basm::lang::Error;
use chrono::Local;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io;

/// ## Line oriented console
///
/// Every line written is prefixed with the local time and `[ASM]`
/// unless timestamps are turned off.

pub struct Console {
    interface: Interface<DefaultTerminal>,
    timestamps: bool,
}

impl Console {
    pub fn new(timestamps: bool) -> io::Result<Console> {
        let interface = Interface::new("BASM")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Console {
            interface,
            timestamps,
        })
    }

    fn prefix(&self) -> String {
        if self.timestamps {
            format!("[{}][ASM] ", Local::now().format("%H:%M:%S"))
        } else {
            String::new()
        }
    }

    pub fn log(&self, s: &str) -> io::Result<()> {
        self.interface
            .write_fmt(format_args!("{}{}\n", self.prefix(), s))
    }

    pub fn error(&self, error: &Error) -> io::Result<()> {
        self.interface.write_fmt(format_args!(
            "{}{}\n",
            self.prefix(),
            Style::new().bold().paint(format!("?{}", error))
        ))
    }

    /// Read one line after showing the prompt.
    /// `None` means the user gave up with Ctrl-C or end of file.
    pub fn prompt(&self, prompt: &str) -> io::Result<Option<String>> {
        self.interface
            .set_prompt(&format!("{}{}", self.prefix(), prompt))?;
        match self.interface.read_line()? {
            ReadResult::Input(string) => Ok(Some(string)),
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}
