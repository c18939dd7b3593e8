//! fieldvisits main entrypoint.

use fieldvisits::run;
use fieldvisits::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
