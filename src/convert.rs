// SPDX-License-Identifier: PMPL-1.0-or-later

//! The conversion pass: one CSV in, one output file per emitted locale out.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::clean::TextCleaner;
use crate::record::{Locale, SoilSeriesRecord};
use crate::render::{render_json, write_fragment, OutputFormat};

/// Drives a single conversion run.
pub struct Converter {
    input: PathBuf,
    out_dir: PathBuf,
    format: OutputFormat,
    verbose: bool,
}

/// What a finished run produced, for operator feedback.
pub struct ConversionSummary {
    pub rows: usize,
    pub outputs: Vec<PathBuf>,
}

impl Converter {
    pub fn new(input: PathBuf, out_dir: PathBuf, format: OutputFormat) -> Self {
        Self {
            input,
            out_dir,
            format,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the pass. Any error is fatal: the first unreadable row, short row,
    /// or non-UTF-8 byte aborts the run, and in fragment mode leaves the
    /// outputs partially written. Streams close on drop either way.
    pub fn run(&self) -> Result<ConversionSummary> {
        if !self.input.exists() {
            bail!("input does not exist: {}", self.input.display());
        }

        // No header row: every row is data. Flexible record lengths so the
        // column-count check below owns the error message.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.input)
            .with_context(|| format!("failed to open {}", self.input.display()))?;

        let cleaner = TextCleaner::new()?;

        let outputs: Vec<PathBuf> = Locale::EMITTED
            .iter()
            .map(|locale| {
                self.out_dir
                    .join(locale.output_filename(self.format.extension()))
            })
            .collect();

        let rows = match self.format {
            OutputFormat::Fragment => self.run_fragment(&mut reader, &cleaner, &outputs)?,
            OutputFormat::Json => self.run_json(&mut reader, &cleaner, &outputs)?,
        };

        Ok(ConversionSummary { rows, outputs })
    }

    /// Streaming path: each row is rendered to both locale streams as soon as
    /// it is read.
    fn run_fragment(
        &self,
        reader: &mut csv::Reader<File>,
        cleaner: &TextCleaner,
        outputs: &[PathBuf],
    ) -> Result<usize> {
        let mut writers = Vec::with_capacity(outputs.len());
        for path in outputs {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            writers.push(BufWriter::new(file));
        }

        let mut rows = 0;
        for (index, result) in reader.records().enumerate() {
            let row_number = index + 1;
            let row = result.with_context(|| format!("failed to read row {row_number}"))?;
            let record = SoilSeriesRecord::from_row(&row, row_number)?;

            if self.verbose {
                println!("  row {row_number}: {}", record.id);
            }

            for (locale, out) in Locale::EMITTED.iter().zip(writers.iter_mut()) {
                write_fragment(out, &record, *locale, cleaner)?;
            }
            rows += 1;
        }

        for writer in &mut writers {
            writer.flush()?;
        }
        Ok(rows)
    }

    /// Document path: collect everything first so a standalone JSON document
    /// can be written per locale, keys in input row order.
    fn run_json(
        &self,
        reader: &mut csv::Reader<File>,
        cleaner: &TextCleaner,
        outputs: &[PathBuf],
    ) -> Result<usize> {
        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row_number = index + 1;
            let row = result.with_context(|| format!("failed to read row {row_number}"))?;
            let record = SoilSeriesRecord::from_row(&row, row_number)?;
            if self.verbose {
                println!("  row {row_number}: {}", record.id);
            }
            records.push(record);
        }

        for (locale, path) in Locale::EMITTED.iter().zip(outputs.iter()) {
            let mut doc = render_json(&records, *locale, cleaner)?;
            doc.push('\n');
            fs::write(path, doc)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        Ok(records.len())
    }
}
