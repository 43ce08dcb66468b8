use std::io::{BufRead, Write};

use wordwise_core::AgentPool;

/// One line of shell input
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Define(&'a str),
    Rate(i32),
    Recall(&'a str),
    Agents,
    Usage(&'static str),
    Say(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        if line == "exit" {
            return Command::Exit;
        }

        let Some(command) = line.strip_prefix(':') else {
            return Command::Say(line);
        };
        let (name, arg) = command.split_once(' ').unwrap_or((command, ""));
        let arg = arg.trim();

        match name {
            "define" if !arg.is_empty() => Command::Define(arg),
            "define" => Command::Usage(":define <word>"),
            "rate" => match arg.parse() {
                Ok(rating) => Command::Rate(rating),
                Err(_) => Command::Usage(":rate <integer>"),
            },
            "recall" => Command::Recall(arg),
            "agents" => Command::Agents,
            _ => Command::Say(line),
        }
    }
}

/// Read lines until `exit` or end of input, answering each through the pool
pub fn run<R, W>(
    pool: &mut AgentPool,
    mut input: R,
    mut output: W,
    interactive: bool,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        if interactive {
            write!(output, "You: ")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\n', '\r']);

        match Command::parse(text) {
            Command::Exit => break,
            Command::Define(word) => writeln!(output, "Bot: {}", pool.define(word))?,
            Command::Rate(rating) => {
                if pool.rate_last(rating) > 0 {
                    writeln!(output, "Bot: Rated the last reply {rating}.")?;
                } else {
                    writeln!(output, "Bot: Nothing to rate yet.")?;
                }
            }
            Command::Recall(text) => {
                writeln!(output, "Bot: {}", pool.best_reply_from_history(text))?
            }
            Command::Agents => {
                for agent in pool.agents() {
                    writeln!(
                        output,
                        "{}: {} turns, {} words learned, {} ratings",
                        agent.name(),
                        agent.memory().len(),
                        agent.frequencies().len(),
                        agent.ratings().len()
                    )?;
                }
            }
            Command::Usage(usage) => writeln!(output, "Usage: {usage}")?,
            Command::Say(text) => {
                let reply = pool.converse(text);
                writeln!(output, "Bot: {reply}")?;
            }
        }
    }

    Ok(())
}
