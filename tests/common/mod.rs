use calc::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime, line: &str) -> String {
    match runtime.enter(line) {
        Event::Print(s) => s,
        Event::Error(error) => error.to_string(),
        Event::Stopped => String::new(),
        Event::Quit => panic!("unexpected quit"),
    }
}
