use crate::domain::order::OrderRequest;
use crate::error::{GatewayError, Result};
use std::io::Read;

/// Reads orders from a CSV source whose headers are the wire field names
/// (`Od_sob`, `Pay_zg`, `Amount`, ...).
///
/// Empty cells are read as absent fields.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one order per record.
    pub fn orders(self) -> impl Iterator<Item = Result<OrderRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(GatewayError::from))
    }
}
