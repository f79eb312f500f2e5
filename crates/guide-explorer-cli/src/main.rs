use std::process;

fn main() {
    match guide_explorer_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("guide-explorer error: {err}");
            process::exit(1);
        }
    }
}
