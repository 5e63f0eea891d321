// src/load/convert.rs

use anyhow::{bail, Result};
use arrow::{
    array::{Array, ArrayRef, StringArray, TimestampMillisecondBuilder},
    datatypes::{DataType, Field, FieldRef, Schema, TimeUnit},
    record_batch::RecordBatch,
};
use std::sync::Arc;

use crate::calendar::parse_timestamp_millis;

/// Convert the named string columns into millisecond timestamps.
/// Any cell that does not parse fails the whole batch.
pub fn convert_timestamp_columns(batch: &RecordBatch, columns: &[&str]) -> Result<RecordBatch> {
    let schema = batch.schema();
    let mut fields: Vec<FieldRef> = Vec::with_capacity(batch.num_columns());
    let mut out = Vec::with_capacity(batch.num_columns());

    for (arr, fld) in batch.columns().iter().zip(schema.fields()) {
        let sarr = arr.as_any().downcast_ref::<StringArray>();
        match sarr {
            Some(sarr) if columns.contains(&fld.name().as_str()) => {
                let mut b = TimestampMillisecondBuilder::with_capacity(sarr.len());
                for (row, opt) in sarr.iter().enumerate() {
                    match opt.and_then(parse_timestamp_millis) {
                        Some(ms) => b.append_value(ms),
                        None => bail!(
                            "invalid timestamp {:?} in column `{}` at row {}",
                            opt.unwrap_or_default(),
                            fld.name(),
                            row
                        ),
                    }
                }
                fields.push(Arc::new(Field::new(
                    fld.name(),
                    DataType::Timestamp(TimeUnit::Millisecond, None),
                    false,
                )));
                out.push(Arc::new(b.finish()) as ArrayRef);
            }
            _ => {
                fields.push(fld.clone());
                out.push(arr.clone());
            }
        }
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), out).map_err(Into::into)
}
