//! Trace matcher execution for debugging.

use posre_lib::{Colors, PrintTracer};

use super::pattern::{PatternSpec, SubjectSpec, prepare};

pub struct TraceArgs {
    pub pattern: PatternSpec,
    pub subject: SubjectSpec,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let (regex, subject) = prepare(&args.pattern, &args.subject, args.color);
    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(regex.program(), colors);

    let found = match regex.exec_traced(&subject, args.subject.flags, &mut tracer) {
        Ok(found) => {
            tracer.print();
            found
        }
        Err(e) => {
            tracer.print();
            eprintln!("runtime error: {e}");
            std::process::exit(2);
        }
    };

    let Some(m) = found else {
        std::process::exit(1);
    };

    println!("{}---{}", colors.dim, colors.reset);
    for (group, span) in m.captures().iter().enumerate() {
        match span {
            Some(span) => {
                let text = subject.get(span.range()).unwrap_or_default();
                println!("#{group}  {}..{}  {text:?}", span.start, span.end);
            }
            None => println!("#{group}  unset"),
        }
    }
}
