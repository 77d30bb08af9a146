#![deny(clippy::all, clippy::pedantic)]
//! fastbuilder — headless building client.

use fastbuilder_launch::{Invocation, intercept, launch, logging};

fn main() {
    let code = intercept(Invocation::capture(), |invocation, config| {
        logging::init(&config);
        launch::run(invocation, config)
    });
    std::process::exit(code);
}
