//! Interactive menu loop
//!
//! Reads whitespace-separated integers the way a terminal user types them:
//! a process count, then `arrival burst priority` per process, then a menu
//! choice and, for Round-Robin, a quantum. A count of 0 quits. End of input
//! or a token that is not an integer ends the session.

use crate::process::{build_batch, ProcessSpec};
use crate::report::{render_averages, render_gantt, render_table};
use crate::{PolicyType, Scheduler, SchedulerError, SchedulingPolicy};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const MENU: &str = "Choose scheduling algorithm:\n1. FCFS\n2. SJF\n3. Priority\n4. Round-Robin\n";

/// Whitespace-separated integer reader over a line-oriented source
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next integer, or `None` at end of input or on a non-integer token
    fn next_int(&mut self) -> Result<Option<i64>, SchedulerError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        let Some(token) = self.pending.pop_front() else {
            return Ok(None);
        };
        match token.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                warn!(token = %token, "Non-integer input, ending session");
                Ok(None)
            }
        }
    }
}

/// What the caller should do after one round of the menu loop
enum Round {
    Continue,
    Quit,
}

/// Console session over any reader/writer pair
pub struct Console<R, W> {
    input: Tokens<R>,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a new console session
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Tokens::new(input),
            output,
        }
    }

    /// Run the menu loop until the user quits or input ends
    pub fn run(&mut self) -> Result<(), SchedulerError> {
        writeln!(self.output, "\nWelcome Dear Programmer!")?;

        while let Round::Continue = self.round()? {}

        self.output.flush()?;
        Ok(())
    }

    /// Take back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }

    fn round(&mut self) -> Result<Round, SchedulerError> {
        let Some(count) = self.prompt("\nEnter number of processes (Enter 0 to quit): ")? else {
            return Ok(Round::Quit);
        };
        if count == 0 {
            writeln!(self.output, "Exiting the program.")?;
            return Ok(Round::Quit);
        }
        if count < 0 {
            writeln!(self.output, "Invalid number of processes: {}", count)?;
            return Ok(Round::Continue);
        }

        let mut specs = Vec::new();
        for n in 1..=count {
            let prompt = format!(
                "Enter arrival time, burst time, and priority for process {}: ",
                n
            );
            let Some(arrival) = self.prompt(&prompt)? else {
                return Ok(Round::Quit);
            };
            let (Some(burst), Some(priority)) = (self.input.next_int()?, self.input.next_int()?)
            else {
                return Ok(Round::Quit);
            };
            specs.push(ProcessSpec::new(arrival, burst, priority));
        }

        let processes = match build_batch(&specs) {
            Ok(processes) => processes,
            Err(e) => {
                warn!(error = %e, "Rejected process batch");
                writeln!(self.output, "{}", e)?;
                return Ok(Round::Continue);
            }
        };

        let Some(choice) = self.prompt(MENU)? else {
            return Ok(Round::Quit);
        };
        let selected = u32::try_from(choice)
            .ok()
            .and_then(|selector| PolicyType::try_from(selector).ok());
        let Some(policy_type) = selected else {
            warn!(choice, "Invalid scheduling choice");
            writeln!(self.output, "Invalid choice!")?;
            return Ok(Round::Continue);
        };

        let quantum = if policy_type.is_preemptive() {
            match self.prompt("Enter time quantum for Round-Robin: ")? {
                Some(q) => Some(q),
                None => return Ok(Round::Quit),
            }
        } else {
            None
        };

        let policy = match SchedulingPolicy::new(policy_type, quantum) {
            Ok(policy) => policy,
            Err(e) => {
                warn!(error = %e, "Rejected scheduling policy");
                writeln!(self.output, "{}", e)?;
                return Ok(Round::Continue);
            }
        };

        let schedule = Scheduler::new(policy).run(&processes);
        info!(policy = %policy, processes = processes.len(), "Printed schedule");

        write!(self.output, "{}", render_table(&schedule))?;
        writeln!(self.output, "{}", render_gantt(&schedule))?;
        writeln!(self.output, "{}", render_averages(&schedule))?;

        Ok(Round::Continue)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<i64>, SchedulerError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.input.next_int()
    }
}
