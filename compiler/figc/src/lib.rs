//! Figura driver.
//!
//! Ties the stages together: source text is lexed and parsed into a
//! [`Program`], which a fresh [`Interpreter`] then runs. The first failure of
//! any stage stops the run and comes back as a [`Problem`].
//!
//! ```text
//! let output = PrintHandler::buffer();
//! figc::run(source, &Config::default(), output.clone(), Canvas::log())?;
//! ```

mod config;
mod problem;

pub use config::Config;
pub use problem::Problem;

pub use fig_eval::{Interpreter, PrintHandler, SharedPrintHandler};
pub use fig_ir::Program;
pub use fig_shapes::{Canvas, SharedCanvas};
pub use fig_value::Value;

use fig_eval::InterpreterBuilder;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with e.g. `RUST_LOG=fig_eval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Lex and parse `source` without running it.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn check(source: &str, config: &Config) -> Result<Program, Problem> {
    fig_parse::parse(source, config.lexer_limits()).map_err(Problem::from)
}

/// A fresh interpreter configured by `config`.
pub fn interpreter<'a>(
    config: &Config,
    print_handler: SharedPrintHandler,
    canvas: SharedCanvas,
) -> Interpreter<'a> {
    InterpreterBuilder::new(config.max_recursion_depth)
        .print_handler(print_handler)
        .canvas(canvas)
        .build()
}

/// Parse and run `source` to completion.
pub fn run(
    source: &str,
    config: &Config,
    print_handler: SharedPrintHandler,
    canvas: SharedCanvas,
) -> Result<(), Problem> {
    let program = check(source, config)?;
    let mut runner = interpreter(config, print_handler, canvas);
    runner.interpret(&program).map_err(|err| {
        tracing::debug!(error = %err, "run failed");
        Problem::from(err)
    })
}
