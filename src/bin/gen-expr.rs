use argh::FromArgs;
use gen_expr::expr;
use log::{debug, info, LevelFilter};
use std::io::{self, Write};

#[derive(FromArgs)]
/// Generate a random arithmetic expression and print it as an indented tree.
struct Arguments {
    #[argh(positional)]
    /// maximum depth of the generated expression
    max_rec: u32,
}

fn main() -> Result<(), expr::Error> {
    simple_logging::log_to_stderr(LevelFilter::Info);

    let args: Arguments = argh::from_env();
    let max_depth = expr::check_depth(args.max_rec)?;
    info!("Generating an expression of depth at most {}", max_depth);

    let tree = expr::generate_expression(&mut rand::thread_rng(), max_depth);
    debug!(
        "Generated depth {} with {} leaves and {} binary operations",
        tree.depth(),
        tree.leaf_count(),
        tree.binary_count()
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    expr::print_program(&mut out, &tree)?;
    out.flush()?;
    Ok(())
}
