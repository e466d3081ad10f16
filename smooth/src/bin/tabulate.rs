use ariadne::Source;
use smooth::{error::Error, SmoothFn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Reports the given error, which came from evaluating `f`, to stderr.
fn report(name: &str, f: &SmoothFn<f64>, err: &Error) {
    let source = Source::from(f.to_string());
    if let Err(io_err) = err.build_report(name).eprint((name, source)) {
        eprintln!("failed to report error: {io_err}");
    }
}

/// Prints the function, its derivative, and their values at each of the given inputs.
fn tabulate(name: &str, f: &SmoothFn<f64>, inputs: impl IntoIterator<Item = f64>) {
    let derivative = f.derivative();
    let derivative_name = format!("{name}'");
    println!("{name}(x) = {f}");
    println!("{derivative_name}(x) = {derivative}");

    for x in inputs {
        match (f.eval(x), derivative.eval(x)) {
            (Ok(y), Ok(dy)) => println!("{name}({x}) = {y}, {derivative_name}({x}) = {dy}"),
            (Err(err), _) => report(name, f, &err),
            (_, Err(err)) => report(&derivative_name, &derivative, &err),
        }
    }
    println!();
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let x = SmoothFn::identity();
    let one = SmoothFn::constant(1.0);
    let inputs = || (0..=8).map(|i| i as f64 * 0.25);

    tabulate("f", &(&x * &x * &x), inputs());
    tabulate("g", &(&one / &(&x - &one)), inputs());
}
