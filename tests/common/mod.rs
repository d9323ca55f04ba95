use miep::mach::{Event, Runtime};

#[allow(dead_code)]
pub fn runtime(program: &str) -> Runtime {
    runtime_with_input(program, "")
}

#[allow(dead_code)]
pub fn runtime_with_input(program: &str, input: &str) -> Runtime {
    let mut runtime = Runtime::default();
    runtime.set_input(Box::new(std::io::Cursor::new(input.as_bytes().to_vec())));
    runtime.load(program);
    runtime.start();
    runtime
}

#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Quit => {
                s.push_str("<QUIT>");
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Load(filename) => {
                if let Ok(text) = std::fs::read(filename) {
                    runtime.load(text);
                }
            }
        }
        prev_running = event == Event::Running;
    }
    s
}
