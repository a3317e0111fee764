//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

type BoxError = Box<dyn std::error::Error>;

pub struct OutputWriter {
    detail_writer: Box<dyn Write + Send>,
    detail_path: PathBuf,
    format: OutputFormat,
    /// Buffered games for the single-array JSON format.
    pending: Vec<GameMetrics>,
    csv_writer: csv::Writer<BufWriter<File>>,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: &str, format: &OutputFormat, compress: bool) -> Result<Self, BoxError> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let ext = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let filename = format!("simulation_{timestamp}.{ext}");

        let (detail_writer, detail_path): (Box<dyn Write + Send>, PathBuf) = if compress {
            let gz_path = dir.join(format!("{filename}.gz"));
            let writer = BufWriter::new(GzEncoder::new(
                File::create(&gz_path)?,
                Compression::default(),
            ));
            (Box::new(writer), gz_path)
        } else {
            let path = dir.join(&filename);
            (Box::new(BufWriter::new(create_truncated(&path)?)), path)
        };

        // Always create CSV summary
        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));

        Ok(Self {
            detail_writer,
            detail_path,
            format: format.clone(),
            pending: Vec::new(),
            csv_writer,
            csv_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), BoxError> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(metrics)?;
                writeln!(self.detail_writer, "{json}")?;
                self.detail_writer.flush()?;
            }
            OutputFormat::Json => self.pending.push(metrics.clone()),
        }

        let row: CsvSummaryRow = metrics.into();
        self.csv_writer.serialize(&row)?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), BoxError> {
        if let OutputFormat::Json = self.format {
            serde_json::to_writer_pretty(&mut self.detail_writer, &self.pending)?;
            writeln!(self.detail_writer)?;
        }
        self.detail_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&PathBuf, &PathBuf) {
        (&self.detail_path, &self.csv_path)
    }
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
