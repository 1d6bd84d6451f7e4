// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use crate::data_handler::column::ColumnBuilder;
use crate::data_handler::common::DatasetMetadata;
use crate::data_handler::dataframe::DataFrame;
use crate::error::DataResult;
use std::path::Path;
#[derive(Debug)]
pub struct CsvReader {
    has_headers: bool,
    delimiter: u8,
}
impl CsvReader {
    pub fn new() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
        }
    }
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
    pub fn read_file(&self, path: &Path, dataset_name: String) -> DataResult<DataFrame> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_path(path)?;
        let headers: Vec<String> = if self.has_headers {
            reader.headers()?.iter().map(str::to_string).collect()
        } else {
            let width = reader
                .records()
                .next()
                .transpose()?
                .map(|r| r.len())
                .unwrap_or(0);
            // Re-open so the peeked record is not lost.
            reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .delimiter(self.delimiter)
                .flexible(true)
                .from_path(path)?;
            (0..width).map(|i| format!("column_{i}")).collect()
        };
        let mut builders: Vec<ColumnBuilder> =
            headers.iter().map(|_| ColumnBuilder::new()).collect();
        for record in reader.records() {
            let record = record?;
            for (i, builder) in builders.iter_mut().enumerate() {
                builder.push(record.get(i).map(str::to_string));
            }
        }
        let mut metadata = DatasetMetadata::named(dataset_name);
        metadata.source_path = Some(path.to_path_buf());
        let mut frame = DataFrame::new(metadata);
        for (header, builder) in headers.into_iter().zip(builders) {
            frame.add_column(header, builder.build())?;
        }
        Ok(frame)
    }
}
impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}
pub fn load_csv<P: AsRef<Path>>(path: P, name: String) -> DataResult<DataFrame> {
    CsvReader::new().read_file(path.as_ref(), name)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handler::common::DataType;
    use std::io::Write;
    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }
    #[test]
    fn reads_headers_and_infers_types() {
        let file = write_csv("Ville,Ventes\nParis,120\nLyon,80\nParis,\n");
        let frame = load_csv(file.path(), "ventes".to_string()).unwrap();
        assert_eq!(frame.column_names(), ["Ville", "Ventes"]);
        assert_eq!(frame.row_count(), 3);
        assert_eq!(
            frame.get_column("Ville").unwrap().data_type(),
            DataType::Text
        );
        assert_eq!(
            frame.get_column("Ventes").unwrap().data_type(),
            DataType::Numeric
        );
        assert_eq!(frame.get_column("Ventes").unwrap().null_count(), 1);
    }
    #[test]
    fn headerless_files_get_positional_names() {
        let file = write_csv("1,a\n2,b\n");
        let frame = CsvReader::new()
            .with_headers(false)
            .read_file(file.path(), "raw".to_string())
            .unwrap();
        assert_eq!(frame.column_names(), ["column_0", "column_1"]);
        assert_eq!(frame.row_count(), 2);
    }
    #[test]
    fn short_records_become_missing_values() {
        let file = write_csv("a,b\nx,1\ny\n");
        let frame = load_csv(file.path(), "ragged".to_string()).unwrap();
        assert_eq!(frame.get_column("b").unwrap().null_count(), 1);
    }
}
