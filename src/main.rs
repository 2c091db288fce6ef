//! rRecall main entrypoint.

use rrecall::run;
use rrecall::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
