use posre_lib::Colors;

use super::pattern::{PatternSpec, compile};

pub struct DumpArgs {
    pub pattern: PatternSpec,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let regex = match compile(&args.pattern, args.color) {
        Ok(regex) => regex,
        Err(rendered) => {
            eprint!("{rendered}");
            std::process::exit(1);
        }
    };

    print!("{}", regex.dump(Colors::new(args.color)));
}
