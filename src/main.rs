use student_calc::driver;

fn main() {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    // Failures inside the session are already reported on stderr; an error
    // here means one of the standard streams itself is broken.
    if let Err(e) = driver::run_session(&mut input, &mut stdout, &mut stderr) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
