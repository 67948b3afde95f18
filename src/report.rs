use crate::error::Result;
use std::fmt::Debug;
use std::io::Write;

/// Writes full-structure dumps of api server responses.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn created<T: Debug>(&mut self, created: &T) -> Result<()> {
        writeln!(self.out, "CREATED: {created:#?}")?;
        Ok(())
    }

    pub fn created_from<T: Debug>(&mut self, created: &T, submitted: &T) -> Result<()> {
        writeln!(self.out, "CREATED: {created:#?}\nFROM: {submitted:#?}")?;
        Ok(())
    }

    pub fn skipped<T: Debug>(&mut self, existing: &T) -> Result<()> {
        writeln!(self.out, "SKIPPING: already exists {existing:#?}")?;
        Ok(())
    }

    pub fn fetched<T: Debug>(&mut self, fetched: &T) -> Result<()> {
        writeln!(self.out, "GET: {fetched:#?}")?;
        Ok(())
    }

    pub fn listed<T: Debug>(&mut self, list: &T) -> Result<()> {
        writeln!(self.out, "LIST: {list:#?}")?;
        Ok(())
    }
}
