extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use calc::mach::{Event, Runtime};
use linefeed::{Interface, ReadResult, Signal};
use log::info;

pub struct Options {
    pub prompt: String,
    pub precision: usize,
    pub plain: bool,
}

pub fn main(options: Options) {
    if let Err(error) = main_loop(&options) {
        eprintln!("{}", error);
    }
}

fn main_loop(options: &Options) -> std::io::Result<()> {
    let mut runtime = Runtime::new().with_precision(options.precision);
    let interface = Interface::new("calc")?;
    interface.set_prompt(&options.prompt)?;
    interface.set_report_signal(Signal::Interrupt, true);
    interface.write_fmt(format_args!("Type \"quit\" to leave.\n"))?;
    info!("session started");

    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                interface.lock_reader().cancel_read_line()?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let event = runtime.enter(&string);
        if !string.trim().is_empty() {
            interface.add_history_unique(string);
        }
        match event {
            Event::Quit => break,
            Event::Stopped => {}
            Event::Print(s) => {
                interface.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Error(error) => {
                let message = error.to_string();
                if options.plain {
                    interface.write_fmt(format_args!("{}\n", message))?;
                } else {
                    interface.write_fmt(format_args!("{}\n", Style::new().bold().paint(message)))?;
                }
            }
        }
    }
    info!("session ended");
    Ok(())
}
