extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use formula::lang::{Column, Error};
use formula::mach::{Compiler, Evaluation, Formula};
use linefeed::{Interface, ReadResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let command = Interface::new("formula")?;
    command.set_prompt("> ")?;
    let mut session = Session::new();
    command.write_fmt(format_args!("Formula calculator. Type :quit to leave.\n"))?;
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let line = string.trim();
        if line.is_empty() {
            continue;
        }
        command.add_history_unique(string.clone());
        interrupted.store(false, Ordering::SeqCst);
        match session.enter(line, &interrupted) {
            Reply::Quit => break,
            Reply::Lines(lines) => {
                for s in lines {
                    command.write_fmt(format_args!("{}\n", s))?;
                }
            }
            Reply::Failed(source, error) => {
                if error.is_compile_error() {
                    command.write_fmt(format_args!(
                        "{}\n",
                        decorate_source(&source, &error.column())
                    ))?;
                }
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
            Reply::Usage(s) => {
                command.write_fmt(format_args!("{}\n", Style::new().bold().paint(s)))?;
            }
        }
    }
    Ok(())
}

enum Reply {
    Quit,
    Lines(Vec<String>),
    Failed(String, Error),
    Usage(String),
}

struct Session {
    bindings: Vec<(String, f64)>,
    rng: StdRng,
}

impl Session {
    fn new() -> Session {
        Session {
            bindings: vec![],
            rng: StdRng::from_entropy(),
        }
    }

    fn enter(&mut self, line: &str, interrupted: &AtomicBool) -> Reply {
        if let Some(rest) = line.strip_prefix(':') {
            let mut words = rest.splitn(2, char::is_whitespace);
            let cmd = words.next().unwrap_or("");
            let args = words.next().unwrap_or("").trim();
            return match cmd {
                "quit" | "q" => Reply::Quit,
                "vars" => self.vars(),
                "seed" => self.seed(args),
                "code" => self.code(args),
                "table" => self.table(args, interrupted),
                _ => Reply::Usage(format!("UNKNOWN COMMAND :{}", cmd)),
            };
        }
        if let Some(index) = line.find(":=") {
            let name = line[..index].trim();
            let source = line[index + 2..].trim();
            return self.assign(name, source);
        }
        match self.evaluate(line) {
            Ok(eval) => Reply::Lines(vec![show(eval)]),
            Err(reply) => reply,
        }
    }

    fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn values(&self) -> Vec<f64> {
        self.bindings.iter().map(|(_, val)| *val).collect()
    }

    fn compile(&self, source: &str, extra: Option<&str>) -> Result<Formula, Reply> {
        let mut names = self.names();
        if let Some(name) = extra {
            names.push(name);
        }
        let formula = Compiler::new(names.as_slice())
            .discover_variables(true)
            .compile(source)
            .map_err(|error| Reply::Failed(source.to_string(), error))?;
        let unbound = &formula.variables()[names.len()..];
        if !unbound.is_empty() {
            return Err(Reply::Usage(format!("UNBOUND: {}", unbound.join(", "))));
        }
        Ok(formula)
    }

    fn evaluate(&mut self, source: &str) -> Result<Evaluation, Reply> {
        let formula = self.compile(source, None)?;
        formula
            .run(&self.values(), &mut self.rng)
            .map_err(|error| Reply::Failed(source.to_string(), error))
    }

    fn assign(&mut self, name: &str, source: &str) -> Reply {
        let is_name = match Compiler::discovering().compile(name) {
            Ok(formula) => formula.variables() == [name.to_string()],
            Err(_) => false,
        };
        if !is_name {
            return Reply::Usage(format!("NOT A VARIABLE NAME: {}", name));
        }
        let eval = match self.evaluate(source) {
            Ok(eval) => eval,
            Err(reply) => return reply,
        };
        match self.bindings.iter_mut().find(|(n, _)| n == name) {
            Some(binding) => binding.1 = eval.value,
            None => self.bindings.push((name.to_string(), eval.value)),
        }
        Reply::Lines(vec![format!("{} = {}", name, show(eval))])
    }

    fn vars(&self) -> Reply {
        Reply::Lines(
            self.bindings
                .iter()
                .map(|(name, val)| format!("{} = {}", name, val))
                .collect(),
        )
    }

    fn seed(&mut self, args: &str) -> Reply {
        match args.parse::<u64>() {
            Ok(seed) => {
                self.rng = StdRng::seed_from_u64(seed);
                Reply::Lines(vec![])
            }
            Err(_) => Reply::Usage(":seed <integer>".to_string()),
        }
    }

    fn code(&self, source: &str) -> Reply {
        match self.compile(source, None) {
            Ok(formula) => Reply::Lines(formula.to_string().lines().map(String::from).collect()),
            Err(reply) => reply,
        }
    }

    fn table(&mut self, args: &str, interrupted: &AtomicBool) -> Reply {
        let usage = || Reply::Usage(":table <name> <from> <to> <steps> <expression>".to_string());
        let mut words: Vec<&str> = vec![];
        let mut rest = args;
        while words.len() < 4 {
            let trimmed = rest.trim_start();
            let end = trimmed.find(char::is_whitespace).unwrap_or_else(|| trimmed.len());
            if end == 0 {
                return usage();
            }
            words.push(&trimmed[..end]);
            rest = &trimmed[end..];
        }
        let source = rest.trim();
        if source.is_empty() {
            return usage();
        }
        let name = words[0];
        let (from, to, steps) = match (
            words[1].parse::<f64>(),
            words[2].parse::<f64>(),
            words[3].parse::<usize>(),
        ) {
            (Ok(from), Ok(to), Ok(steps)) if steps > 0 => (from, to, steps),
            _ => return usage(),
        };
        let mut values = self.values();
        let bound = self.bindings.iter().position(|(n, _)| n == name);
        let extra = match bound {
            Some(_) => None,
            None => Some(name),
        };
        let formula = match self.compile(source, extra) {
            Ok(formula) => formula,
            Err(reply) => return reply,
        };
        let last = match bound {
            Some(index) => index,
            None => {
                values.push(from);
                values.len() - 1
            }
        };
        let mut lines = vec![];
        for step in 0..=steps {
            if interrupted.load(Ordering::SeqCst) {
                lines.push("BREAK".to_string());
                break;
            }
            values[last] = from + (to - from) * step as f64 / steps as f64;
            match formula.run(&values, &mut self.rng) {
                Ok(eval) => lines.push(format!("{:>12} {}", values[last], show(eval))),
                Err(error) => return Reply::Failed(source.to_string(), error),
            }
        }
        Reply::Lines(lines)
    }
}

fn show(eval: Evaluation) -> String {
    if eval.was_nan {
        format!("{} (NaN)", eval.value)
    } else {
        format!("{}", eval.value)
    }
}

fn decorate_source(ins: &str, column: &Column) -> String {
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    let mut under_on = false;
    let mut index = 0;
    for char in ins.chars() {
        let do_under = column.contains(&index) || (column.is_empty() && column.start == index);
        if under_on && !do_under {
            out.push_str(&suffix);
        } else if !under_on && do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(char);
        index += 1;
    }
    if !under_on && column.start >= index {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}
