use slog::debug;
use slog::Logger;
use std::io::prelude::*;

use crate::random::WordGenerator;
use crate::table::LOAD_FACTOR_THRESHOLD;
use crate::DictError;
use crate::Result;
use crate::StringTable;

const PROMPT: &str = "> ";
/// Upper bound on one `random` request.
const MAX_RANDOM_WORDS: usize = 100_000;

/// Line-oriented front end over a [`StringTable`].
///
/// Words are upper-cased here before they reach the table.
pub struct Shell<R, W> {
    input: R,
    output: W,
    table: StringTable,
    words: WordGenerator,
    log: Logger,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        table: StringTable,
        words: WordGenerator,
        input: R,
        output: W,
        log: Logger,
    ) -> Self {
        Self {
            input,
            output,
            table,
            words,
            log,
        }
    }

    /// Process commands until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        while let Some(line) = self.prompt(PROMPT)? {
            let command = line.to_lowercase();
            debug!(self.log, "command"; "name" => &command);
            match command.as_str() {
                "" => {}
                "exit" => break,
                "search" => self.search()?,
                "add" => self.add()?,
                "delete" => self.delete()?,
                "random" => match self.random() {
                    Err(DictError::StringError(msg)) => writeln!(self.output, "{}", msg)?,
                    result => result?,
                },
                "stats" => {
                    let stats = self.table.occupancy_stats();
                    writeln!(self.output, "{}", stats)?;
                }
                _ => writeln!(self.output, "Unknown command: {}", line)?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    pub fn table(&self) -> &StringTable {
        &self.table
    }

    pub fn into_table(self) -> StringTable {
        self.table
    }

    fn search(&mut self) -> Result<()> {
        let word = match self.prompt_word()? {
            Some(word) => word,
            None => return Ok(()),
        };
        match self.table.get(&word) {
            Some(definition) => writeln!(self.output, "{}: {}", word, definition)?,
            None => writeln!(self.output, "{} not found", word)?,
        }
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let word = match self.prompt_word()? {
            Some(word) => word,
            None => return Ok(()),
        };
        if self.table.contains_key(&word) {
            writeln!(self.output, "{} already exists", word)?;
            return Ok(());
        }
        let definition = match self.prompt("Definition: ")? {
            Some(definition) => definition,
            None => return Ok(()),
        };
        self.table.add(word.clone(), definition);
        writeln!(self.output, "Added {}", word)?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let word = match self.prompt_word()? {
            Some(word) => word,
            None => return Ok(()),
        };
        if self.table.remove(&word) {
            writeln!(self.output, "Deleted {}", word)?;
        } else {
            writeln!(self.output, "{} not found", word)?;
        }
        Ok(())
    }

    fn random(&mut self) -> Result<()> {
        let needed = self
            .table
            .words_needed_for_target_load_factor(LOAD_FACTOR_THRESHOLD);
        let answer = match self.prompt(&format!("How many words? [{}]: ", needed))? {
            Some(answer) => answer,
            None => return Ok(()),
        };
        let count = if answer.is_empty() {
            needed
        } else {
            match answer.parse::<usize>() {
                Ok(count) if count <= MAX_RANDOM_WORDS => count,
                _ => {
                    return Err(DictError::StringError(format!(
                        "Invalid number: {}",
                        answer
                    )))
                }
            }
        };
        let added = self.words.fill(&mut self.table, count);
        debug!(self.log, "added random words"; "count" => added.len());
        writeln!(self.output, "{}", self.table.occupancy_stats())?;
        Ok(())
    }

    fn prompt_word(&mut self) -> Result<Option<String>> {
        Ok(self.prompt("Word: ")?.map(|word| word.to_uppercase()))
    }

    /// Write `prompt` and read one trimmed line. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_owned()))
    }
}
