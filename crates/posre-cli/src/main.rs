mod cli;
mod commands;

use cli::{CheckParams, DumpParams, ExecParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("exec", m)) => {
            let params = ExecParams::from_matches(m);
            commands::exec::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
