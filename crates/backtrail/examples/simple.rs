use backtrail::prelude::*;
use backtrail::{ColorMode, TracePrinter};

fn checked_div(dividend: u32, divisor: u32) -> Value<u32> {
    ensure!(divisor != 0, "cannot divide {dividend} by zero");
    ok(dividend / divisor).into()
}

fn halve(raw: u32) -> Value<u32> {
    let half = take_or_forward!(checked_div(raw, 2));
    ok(half).into()
}

fn main() {
    // Success path: the value flows through the forwarding chain.
    let mut halved = halve(84);
    println!("84 halved: {}", halved.get());

    // Error path: the failure is data until someone asks for the value.
    let broken = checked_div(1, 0);
    println!("handled error: {}", broken.err());

    // Forward it out and render the trace of the original failure site.
    let failure = broken.forward();
    let printer = TracePrinter {
        addresses: false,
        color: ColorMode::Never,
    };
    println!("\n{}", printer.render(failure.trace()));
}
