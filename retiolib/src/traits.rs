//! Унифицированные трэйты чтения датасета и записи отчёта на основе std::io::{BufRead, Write}.

use crate::{aggregate::AggRow, error::Result, model::Dataset};
use std::io::{BufRead, Write};

pub trait ReadDataset {
    fn read<R: BufRead>(r: R) -> Result<Dataset>;
}

pub trait WriteReport {
    fn write<W: Write>(w: W, rows: &[AggRow]) -> Result<()>;
}
