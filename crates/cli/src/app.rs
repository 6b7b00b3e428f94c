use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use marina_core::{
    billing,
    record::parse_record,
    report::{inventory_line, REPORT_HEADING},
    Fleet, FleetError, FleetFile, Money,
};
use tracing::{error, info};

const MENU_PROMPT: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ";
const RECORD_PROMPT: &str = "Please enter the boat data in CSV format                 : ";
const NAME_PROMPT: &str = "Please enter the boat name                               : ";
const AMOUNT_PROMPT: &str = "Please enter the amount to be paid                       : ";

/// Menu commands, selected by a single case-insensitive character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Inventory,
    Add,
    Remove,
    Payment,
    Month,
    Exit,
    Invalid(char),
}

impl Command {
    pub fn from_char(choice: char) -> Self {
        match choice.to_ascii_uppercase() {
            'I' => Command::Inventory,
            'A' => Command::Add,
            'R' => Command::Remove,
            'P' => Command::Payment,
            'M' => Command::Month,
            'X' => Command::Exit,
            other => Command::Invalid(other),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop over a fleet.
///
/// The session owns the fleet for its whole lifetime and writes it back to the
/// data file when the loop ends, either on `X` or when input runs out.
pub struct Session<R, W> {
    fleet: Fleet,
    store: FleetFile,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(fleet: Fleet, store: FleetFile, input: R, output: W) -> Self {
        Self {
            fleet,
            store,
            input,
            output,
        }
    }

    /// Run the menu loop until exit and return the final fleet.
    pub fn run(mut self) -> Result<Fleet> {
        writeln!(self.output, "Welcome to the Boat Management System")?;
        writeln!(self.output, "-------------------------------------")?;

        loop {
            write!(self.output, "\n{MENU_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let Some(choice) = line.trim_start().chars().next() else {
                continue;
            };
            if let Flow::Exit = self.dispatch(Command::from_char(choice))? {
                break;
            }
        }

        self.shutdown()?;
        Ok(self.fleet)
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Inventory => self.print_inventory(),
            Command::Add => self.add_boat(),
            Command::Remove => self.remove_boat(),
            Command::Payment => self.accept_payment(),
            Command::Month => {
                billing::apply_monthly_fees(&mut self.fleet);
                Ok(Flow::Continue)
            }
            Command::Exit => Ok(Flow::Exit),
            Command::Invalid(choice) => {
                writeln!(self.output, "Invalid option {choice}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn print_inventory(&mut self) -> Result<Flow> {
        self.fleet.sort_by_name();
        writeln!(self.output, "{REPORT_HEADING}")?;
        for boat in &self.fleet {
            writeln!(self.output, "{}", inventory_line(boat))?;
        }
        Ok(Flow::Continue)
    }

    fn add_boat(&mut self) -> Result<Flow> {
        if self.fleet.is_full() {
            writeln!(self.output, "Marina is full")?;
            return Ok(Flow::Continue);
        }

        let Some(line) = self.prompt(RECORD_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let boat = parse_record(line.trim_start());
        let name = boat.name.clone();
        match self.fleet.add(boat) {
            Ok(()) => info!("added boat {name:?}"),
            Err(err) => {
                info!("rejected boat {name:?}: {err}");
                writeln!(self.output, "Marina is full")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn remove_boat(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt(NAME_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        match self.fleet.remove_by_name(name.trim_start()) {
            Ok(boat) => info!("removed boat {:?}", boat.name),
            Err(err) => {
                info!("{err}");
                writeln!(self.output, "No boat with that name")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn accept_payment(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt(NAME_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        if self.fleet.find_by_name(name.trim_start()).is_none() {
            writeln!(self.output, "No boat with that name")?;
            return Ok(Flow::Continue);
        }

        let Some(amount) = self.prompt(AMOUNT_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let amount = Money::parse_lenient(&amount);
        let Some(boat) = self.fleet.find_by_name_mut(name.trim_start()) else {
            return Ok(Flow::Continue);
        };
        match billing::apply_payment(boat, amount) {
            Ok(balance) => info!("payment of {amount} from {:?}, owes {balance}", boat.name),
            Err(FleetError::PaymentExceedsBalance { owed }) => {
                writeln!(self.output, "That is more than the amount owed, ${owed}")?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Err(err) = self.store.save(&self.fleet) {
            error!("save failed: {err:#}");
            eprintln!(
                "Error: Could not open file {}: {err:#}",
                self.store.path().display()
            );
        }
        writeln!(self.output, "\nExiting the Boat Management System")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `text` and read the next non-blank line.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        while let Some(line) = self.read_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
