use super::pattern::{PatternSpec, compile};

pub struct CheckArgs {
    pub pattern: PatternSpec,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    if let Err(rendered) = compile(&args.pattern, args.color) {
        eprint!("{rendered}");
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
